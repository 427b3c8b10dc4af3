//! QR payload wire format.
//!
//! A payload is four newline-separated fields:
//!
//! ```text
//! <name>\n<YYYY-MM-DD>\n<keyLocation>\n<88-char base64 signature>
//! ```
//!
//! Fields are kept byte-for-byte: no trimming and no case folding, because
//! the first three fields are exactly what was signed.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::{KeySource, KeyType};

/// Version of the canonical signed byte form produced by [`Message::canonical_form`].
pub const CANONICAL_FORM_VERSION: u8 = 1;

/// Separator between fields, both on the wire and in the canonical form.
pub const FIELD_SEPARATOR: char = '\n';

/// Key locations starting with this are fetched as web pages.
pub const URL_PREFIX: &str = "http";

/// Key locations starting with this name a social-network profile.
pub const PROFILE_PREFIX: &str = "FB:";

/// Length of a padded base64 encoding of a 64-byte Ed25519 signature.
pub const SIGNATURE_LENGTH: usize = 88;

const FIELD_COUNT: usize = 4;

// ASCII classes only: `\d` would also accept non-ASCII Unicode digits.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid")
});

/// The claim carried by a QR code, without its signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Message {
    name: String,
    date: String,
    key_type: KeyType,
    key_location: String,
}

impl Message {
    /// Build a message, applying the same checks as the wire parser.
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        key_location: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        let date = date.into();
        let key_location = key_location.into();

        for (field, value) in [("name", &name), ("date", &date), ("key location", &key_location)] {
            if value.contains(FIELD_SEPARATOR) {
                return Err(CoreError::MalformedMessage(format!(
                    "{} must not contain a line break",
                    field
                )));
            }
        }

        if !DATE_PATTERN.is_match(&date) {
            return Err(CoreError::MalformedMessage(format!(
                "date must have the form YYYY-MM-DD, got: {:?}",
                date
            )));
        }

        let key_type = classify_location(&key_location)?;

        Ok(Self {
            name,
            date,
            key_type,
            key_location,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date exactly as written, `YYYY-MM-DD`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The date as a calendar day, if it names one.
    ///
    /// Parsing only checks the shape, so `2024-13-40` is a valid message
    /// whose calendar date is `None`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn key_location(&self) -> &str {
        &self.key_location
    }

    /// Input for the extraction strategy matching this message's key type.
    pub fn key_source(&self) -> KeySource<'_> {
        match self.key_type {
            KeyType::Url => KeySource::Url(&self.key_location),
            KeyType::NamedProfile => KeySource::NamedProfile(
                self.key_location
                    .strip_prefix(PROFILE_PREFIX)
                    .unwrap_or(&self.key_location),
            ),
        }
    }

    /// Text over which the signature is computed (version 1).
    ///
    /// `name`, `date` and `keyLocation` joined by a single `\n`, with no
    /// trailing separator. The key type is implied by the location and is
    /// not serialized on its own.
    pub fn canonical_form(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.name,
            self.date,
            self.key_location,
            sep = FIELD_SEPARATOR
        )
    }

    /// UTF-8 bytes of [`Message::canonical_form`].
    pub fn canonical_bytes(&self) -> Vec<u8> {
        self.canonical_form().into_bytes()
    }
}

/// A message together with its base64 signature, as scanned from a QR code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SignedMessage {
    message: Message,
    signature: String,
}

impl SignedMessage {
    pub fn new(message: Message, signature: impl Into<String>) -> Result<Self, CoreError> {
        let signature = signature.into();
        let length = signature.chars().count();
        if length != SIGNATURE_LENGTH {
            return Err(CoreError::MalformedMessage(format!(
                "signature must be {} characters, got {}",
                SIGNATURE_LENGTH, length
            )));
        }
        if signature.contains(FIELD_SEPARATOR) {
            return Err(CoreError::MalformedMessage(
                "signature must not contain a line break".into(),
            ));
        }
        Ok(Self { message, signature })
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Render the four-line QR payload.
    pub fn to_wire(&self) -> String {
        format!(
            "{}{}{}",
            self.message.canonical_form(),
            FIELD_SEPARATOR,
            self.signature
        )
    }
}

impl fmt::Display for SignedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

/// Parse raw scanned text into a signed message.
pub fn parse(raw: &str) -> Result<SignedMessage, CoreError> {
    let fields: Vec<&str> = raw.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(CoreError::MalformedMessage(format!(
            "expected {} lines, got {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let message = Message::new(fields[0], fields[1], fields[2])?;
    let signed = SignedMessage::new(message, fields[3])?;

    tracing::debug!(
        name = signed.message().name(),
        key_type = %signed.message().key_type(),
        "parsed signed message"
    );
    Ok(signed)
}

fn classify_location(location: &str) -> Result<KeyType, CoreError> {
    if location.starts_with(URL_PREFIX) {
        Ok(KeyType::Url)
    } else if location.starts_with(PROFILE_PREFIX) {
        Ok(KeyType::NamedProfile)
    } else {
        Err(CoreError::MalformedMessage(format!(
            "key location must start with '{}' or '{}', got: {:?}",
            URL_PREFIX, PROFILE_PREFIX, location
        )))
    }
}
