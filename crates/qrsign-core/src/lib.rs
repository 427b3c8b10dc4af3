//! QRSign Core — Message types, the QR wire format, and the canonical
//! form over which claims are signed.

pub mod error;
pub mod message;
pub mod types;

pub use error::CoreError;
pub use message::{
    parse, Message, SignedMessage, CANONICAL_FORM_VERSION, FIELD_SEPARATOR, PROFILE_PREFIX,
    SIGNATURE_LENGTH, URL_PREFIX,
};
pub use types::{KeySource, KeyType, ScrapeResult, ValidationResult, Verification};
