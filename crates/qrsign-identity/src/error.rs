use qrsign_core::CoreError;

/// Failure to read a page from a key location.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("no page for {0}")]
    NotFound(String),
}

/// Identity layer errors.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("key not found at {location}: {reason}")]
    KeyNotFound { location: String, reason: String },

    #[error("invalid profile source: {0}")]
    InvalidProfileSource(String),

    #[error(transparent)]
    Message(#[from] CoreError),
}

impl IdentityError {
    pub(crate) fn key_not_found(location: &str, reason: impl Into<String>) -> Self {
        Self::KeyNotFound {
            location: location.to_string(),
            reason: reason.into(),
        }
    }
}
