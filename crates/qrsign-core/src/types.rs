use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the claimed public key is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    /// A web page carrying a `qr-sign` meta tag.
    Url,
    /// A social-network profile carrying a `QRSign<...>` marker.
    NamedProfile,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url => write!(f, "URL"),
            Self::NamedProfile => write!(f, "NAMED_PROFILE"),
        }
    }
}

/// Key location resolved to the input of its extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource<'a> {
    /// The literal page URL.
    Url(&'a str),
    /// The profile identifier, without its reserved prefix.
    NamedProfile(&'a str),
}

impl KeySource<'_> {
    pub fn key_type(&self) -> KeyType {
        match self {
            Self::Url(_) => KeyType::Url,
            Self::NamedProfile(_) => KeyType::NamedProfile,
        }
    }
}

/// Out-of-band "verified" badge signal.
///
/// `Unknown` means the key source has no badge concept at all, which is
/// distinct from a source that could carry one but does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verification {
    Verified,
    NotVerified,
    #[default]
    Unknown,
}

impl From<bool> for Verification {
    fn from(value: bool) -> Self {
        if value {
            Self::Verified
        } else {
            Self::NotVerified
        }
    }
}

impl From<Option<bool>> for Verification {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unknown, Self::from)
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verified => write!(f, "verified"),
            Self::NotVerified => write!(f, "not verified"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Outcome of checking a signed message against a public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the signature matches the claimed key.
    pub is_well_signed: bool,
    /// External badge signal; forced to `NotVerified` when the signature fails.
    pub is_verified: Verification,
}

impl ValidationResult {
    /// Result for a signature that did not verify.
    pub fn rejected() -> Self {
        Self {
            is_well_signed: false,
            is_verified: Verification::NotVerified,
        }
    }

    /// Result for a good signature, carrying the external signal unchanged.
    pub fn accepted(is_verified: Verification) -> Self {
        Self {
            is_well_signed: true,
            is_verified,
        }
    }
}

/// Public key scraped from a key location, with the raw content it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// Base64 public key as found on the page.
    pub key: String,
    /// Full fetched page content.
    pub page_content: String,
    #[serde(default)]
    pub is_verified: Verification,
}

impl ScrapeResult {
    pub fn new(key: impl Into<String>, page_content: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            page_content: page_content.into(),
            is_verified: Verification::Unknown,
        }
    }

    pub fn with_verification(mut self, is_verified: Verification) -> Self {
        self.is_verified = is_verified;
        self
    }
}
