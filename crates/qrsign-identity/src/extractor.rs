//! Public-key extraction from fetched key locations.
//!
//! Page content is untrusted. Extraction is limited to one bounded regex
//! for named profiles and one CSS selector for web pages.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use qrsign_core::{KeySource, ScrapeResult, SignedMessage, Verification};

use crate::config::ProfileSource;
use crate::error::IdentityError;
use crate::page_reader::PageReader;

/// `QRSign<key>` with HTML-escaped brackets; a base64 Ed25519 public key
/// is always 44 characters.
static PROFILE_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"QRSign&lt;([^&;\s]{44})&gt;").expect("profile key pattern is valid")
});

static META_KEY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"head meta[name="qr-sign"]"#).expect("meta selector is valid")
});

/// Find the public key published in a named profile's page.
///
/// Returns the first marked key and whether `verified_marker` occurs
/// anywhere in the content. A blank marker never matches.
pub fn extract_profile_key(content: &str, verified_marker: &str) -> Option<(String, Verification)> {
    let key = PROFILE_KEY_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())?;
    let badge = Verification::from(
        !verified_marker.trim().is_empty() && content.contains(verified_marker),
    );
    Some((key, badge))
}

/// Find the `content` of the first `<meta name="qr-sign">` in the document head.
///
/// A matching tag without a `content` attribute counts as absent.
pub fn extract_meta_key(content: &str) -> Option<String> {
    let document = Html::parse_document(content);
    let meta = document.select(&META_KEY_SELECTOR).next()?;
    meta.value().attr("content").map(str::to_string)
}

/// Profile identifiers become part of a URL path, so only plain handle
/// characters are allowed.
fn is_valid_profile_id(profile_id: &str) -> bool {
    !profile_id.is_empty()
        && profile_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// Fetches a message's key location and extracts the claimed public key.
pub struct KeyExtractor<R> {
    reader: R,
    profile: ProfileSource,
}

impl<R: PageReader> KeyExtractor<R> {
    /// Create an extractor using the default profile source.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            profile: ProfileSource::default(),
        }
    }

    /// Create an extractor with custom profile settings.
    pub fn with_profile_source(reader: R, profile: ProfileSource) -> Result<Self, IdentityError> {
        profile.validate()?;
        Ok(Self { reader, profile })
    }

    /// Extract the public key claimed by a signed message.
    pub async fn extract(&self, signed: &SignedMessage) -> Result<ScrapeResult, IdentityError> {
        let message = signed.message();
        let location = message.key_location();
        let source = message.key_source();
        tracing::debug!(location = location, key_type = %source.key_type(), "extracting key");

        match source {
            KeySource::NamedProfile(profile_id) => self.from_profile(location, profile_id).await,
            KeySource::Url(url) => self.from_page(url).await,
        }
    }

    async fn from_profile(
        &self,
        location: &str,
        profile_id: &str,
    ) -> Result<ScrapeResult, IdentityError> {
        if !is_valid_profile_id(profile_id) {
            return Err(IdentityError::key_not_found(
                location,
                format!("invalid profile identifier {:?}", profile_id),
            ));
        }

        let url = self.profile.about_url(profile_id);
        let content = self.fetch(location, &url).await?;

        let (key, badge) = extract_profile_key(&content, &self.profile.verified_marker)
            .ok_or_else(|| IdentityError::key_not_found(location, "no QRSign marker on profile"))?;

        tracing::debug!(location = location, verified = %badge, "found profile key");
        Ok(ScrapeResult::new(key, content).with_verification(badge))
    }

    async fn from_page(&self, url: &str) -> Result<ScrapeResult, IdentityError> {
        let content = self.fetch(url, url).await?;

        let key = extract_meta_key(&content)
            .ok_or_else(|| IdentityError::key_not_found(url, "no qr-sign meta tag in head"))?;

        tracing::debug!(location = url, "found meta key");
        Ok(ScrapeResult::new(key, content))
    }

    async fn fetch(&self, location: &str, url: &str) -> Result<String, IdentityError> {
        self.reader.read_page(url).await.map_err(|e| {
            tracing::warn!(location = location, url = url, error = %e, "fetch failed");
            IdentityError::key_not_found(location, e.to_string())
        })
    }
}
