pub mod check_keys;
pub mod init;
pub mod parse;
pub mod scrape;
pub mod sign;
pub mod verify;

use std::io::Read;
use std::path::Path;

use qrsign_core::SignedMessage;
use qrsign_identity::{FetchConfig, HttpPageReader, PageReader, ProfileSource, StaticPageReader};

/// Read a payload given inline, as a file path, or `-` for stdin.
///
/// A single line ending left by editors or `echo` is dropped from file and
/// stdin input. Inline payloads are taken verbatim.
pub fn read_payload(input: &str) -> anyhow::Result<String> {
    let contents = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else if Path::new(input).is_file() {
        std::fs::read_to_string(input)?
    } else {
        return Ok(input.to_string());
    };

    let trimmed = contents
        .strip_suffix("\r\n")
        .or_else(|| contents.strip_suffix('\n'))
        .unwrap_or(&contents);
    Ok(trimmed.to_string())
}

/// Reader for a payload's key location: the network, or a local file
/// standing in for the page when `page` is given.
pub fn page_reader(
    signed: &SignedMessage,
    profile: &ProfileSource,
    fetch: &FetchConfig,
    page: Option<&Path>,
) -> anyhow::Result<Box<dyn PageReader>> {
    match page {
        Some(path) => {
            let url = profile.page_url(signed.message().key_source());
            let content = std::fs::read_to_string(path)?;
            tracing::debug!(url = %url, path = %path.display(), "serving page from file");
            Ok(Box::new(StaticPageReader::new().with_page(url, content)))
        }
        None => Ok(Box::new(HttpPageReader::new(fetch)?)),
    }
}
