//! Settings for fetching and reading key locations.

use serde::{Deserialize, Serialize};

use qrsign_core::KeySource;

use crate::error::IdentityError;

/// HTTP page reader settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// How named profiles map to pages, and how their badge is recognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSource {
    /// About-page URL; `{id}` is replaced by the profile identifier.
    #[serde(default = "default_about_url_template")]
    pub about_url_template: String,
    /// Literal text whose presence marks an officially verified profile.
    #[serde(default = "default_verified_marker")]
    pub verified_marker: String,
}

fn default_timeout_secs() -> u64 {
    10
}
fn default_user_agent() -> String {
    format!("qrsign/{}", env!("CARGO_PKG_VERSION"))
}
fn default_about_url_template() -> String {
    "https://m.facebook.com/{id}/about".into()
}
fn default_verified_marker() -> String {
    "Verified Page".into()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ProfileSource {
    fn default() -> Self {
        Self {
            about_url_template: default_about_url_template(),
            verified_marker: default_verified_marker(),
        }
    }
}

impl ProfileSource {
    /// Reject settings that would make every profile look verified, or
    /// send every identifier to the same page.
    pub fn validate(&self) -> Result<(), IdentityError> {
        if self.verified_marker.trim().is_empty() {
            return Err(IdentityError::InvalidProfileSource(
                "verified_marker must not be empty".into(),
            ));
        }
        if !self.about_url_template.contains("{id}") {
            return Err(IdentityError::InvalidProfileSource(format!(
                "about_url_template must contain {{id}}, got: {:?}",
                self.about_url_template
            )));
        }
        Ok(())
    }

    /// About-page URL for a profile identifier.
    pub fn about_url(&self, profile_id: &str) -> String {
        self.about_url_template.replace("{id}", profile_id)
    }

    /// URL fetched for a key source.
    pub fn page_url(&self, source: KeySource<'_>) -> String {
        match source {
            KeySource::Url(url) => url.to_string(),
            KeySource::NamedProfile(profile_id) => self.about_url(profile_id),
        }
    }
}
