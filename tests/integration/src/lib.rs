//! Page fixtures shared by the integration scenarios.

use async_trait::async_trait;
use qrsign_identity::{FetchError, PageReader};

/// Badge text used by the default profile source.
pub const VERIFIED_BADGE: &str = "Verified Page";

/// A generic web page publishing `key` in its head.
pub fn meta_page(key: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>Home</title>
<meta charset="utf-8">
<meta name="qr-sign" content="{}">
</head>
<body><h1>Welcome</h1></body>
</html>"#,
        key
    )
}

/// A profile about page publishing `key` in its bio, optionally badged.
pub fn profile_page(key: &str, verified: bool) -> String {
    let badge = if verified {
        format!(r#"<span class="badge">{}</span>"#, VERIFIED_BADGE)
    } else {
        String::new()
    };
    format!(
        r#"<html><body><div class="header">Bob's Bakery {}</div>
<div class="bio">Fresh bread daily. QRSign&lt;{}&gt;</div></body></html>"#,
        badge, key
    )
}

/// A reader whose every fetch fails, as if the network were down.
pub struct UnreachableReader;

#[async_trait]
impl PageReader for UnreachableReader {
    async fn read_page(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url = url, "simulated transport failure");
        Err(FetchError::Transport {
            url: url.to_string(),
            reason: "network unreachable".into(),
        })
    }
}
