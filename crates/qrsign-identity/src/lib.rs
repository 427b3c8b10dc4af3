//! QRSign Identity Layer
//!
//! Resolves the key location named in a signed QR message to a public key:
//! - Page fetching behind the `PageReader` capability (HTTP, in-memory)
//! - Key extraction from web pages (`qr-sign` meta tag) and named profiles
//!   (`QRSign&lt;...&gt;` marker plus verified badge)
//! - The parse → extract → verify validation flow

pub mod config;
pub mod error;
pub mod extractor;
pub mod page_reader;
pub mod validator;

pub use config::{FetchConfig, ProfileSource};
pub use error::{FetchError, IdentityError};
pub use extractor::{extract_meta_key, extract_profile_key, KeyExtractor};
pub use page_reader::{HttpPageReader, PageReader, StaticPageReader};
pub use validator::{validate_with_key, QrValidator, ValidationReport};
