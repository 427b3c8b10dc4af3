use serde::Serialize;

use qrsign_core::{parse, ScrapeResult, SignedMessage, ValidationResult, Verification};
use qrsign_crypto::verify_signed_message;

use crate::error::IdentityError;
use crate::extractor::KeyExtractor;
use crate::page_reader::PageReader;

/// Everything learned while validating one scanned payload.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub message: SignedMessage,
    /// Key and page content from the key location; `None` when the key
    /// was supplied by the caller.
    pub scrape: Option<ScrapeResult>,
    pub result: ValidationResult,
}

/// Runs parse → extract → verify on scanned QR text.
pub struct QrValidator<R> {
    extractor: KeyExtractor<R>,
}

impl<R: PageReader> QrValidator<R> {
    pub fn new(extractor: KeyExtractor<R>) -> Self {
        Self { extractor }
    }

    /// Validate raw QR text against the key published at its key location.
    pub async fn validate(&self, raw: &str) -> Result<ValidationReport, IdentityError> {
        let signed = parse(raw)?;
        self.validate_signed(signed).await
    }

    /// Validate an already parsed message against its published key.
    pub async fn validate_signed(
        &self,
        signed: SignedMessage,
    ) -> Result<ValidationReport, IdentityError> {
        let scrape = self.extractor.extract(&signed).await?;
        let result = verify_signed_message(&signed, &scrape.key, scrape.is_verified);
        log_outcome(&signed, &result);

        Ok(ValidationReport {
            message: signed,
            scrape: Some(scrape),
            result,
        })
    }
}

/// Validate a parsed message against a caller-supplied key, without fetching.
///
/// No key location is consulted, so the badge signal is `Unknown`.
pub fn validate_with_key(signed: SignedMessage, public_key: &str) -> ValidationReport {
    let result = verify_signed_message(&signed, public_key, Verification::Unknown);
    log_outcome(&signed, &result);

    ValidationReport {
        message: signed,
        scrape: None,
        result,
    }
}

fn log_outcome(signed: &SignedMessage, result: &ValidationResult) {
    tracing::info!(
        name = signed.message().name(),
        location = signed.message().key_location(),
        well_signed = result.is_well_signed,
        verified = %result.is_verified,
        "validated QR message"
    );
}
