//! Integration test: scan → fetch → extract → verify across crates.
//!
//! Payloads are signed with qrsign-crypto, published on in-memory pages,
//! and validated through qrsign-identity.

use qrsign_core::{Message, ValidationResult, Verification};
use qrsign_crypto::{sign_message, verify_signed_message, KeyPair};
use qrsign_identity::{IdentityError, KeyExtractor, QrValidator, StaticPageReader};
use qrsign_integration_tests::{meta_page, profile_page, UnreachableReader};

const PROFILE_URL: &str = "https://m.facebook.com/bobsbakery/about";

fn payload(kp: &KeyPair, location: &str) -> String {
    let message = Message::new("Bob's Bakery", "2024-06-15", location).unwrap();
    sign_message(message, kp).unwrap().to_wire()
}

fn validator(reader: StaticPageReader) -> QrValidator<StaticPageReader> {
    QrValidator::new(KeyExtractor::new(reader))
}

// =========================================================================
// Named profile with a verified badge
// =========================================================================

#[tokio::test]
async fn test_profile_matching_signature_is_verified() {
    let kp = KeyPair::generate();
    let page = profile_page(&kp.public_key().to_base64(), true);
    let validator = validator(StaticPageReader::new().with_page(PROFILE_URL, page));

    let report = validator
        .validate(&payload(&kp, "FB:bobsbakery"))
        .await
        .expect("validation should complete");

    assert_eq!(
        report.result,
        ValidationResult {
            is_well_signed: true,
            is_verified: Verification::Verified,
        }
    );
}

#[tokio::test]
async fn test_profile_badge_does_not_rescue_bad_signature() {
    // Forger signs with their own key; the profile publishes the real one.
    let owner = KeyPair::generate();
    let forger = KeyPair::generate();
    let page = profile_page(&owner.public_key().to_base64(), true);
    let validator = validator(StaticPageReader::new().with_page(PROFILE_URL, page));

    let report = validator
        .validate(&payload(&forger, "FB:bobsbakery"))
        .await
        .unwrap();

    assert_eq!(
        report.result,
        ValidationResult {
            is_well_signed: false,
            is_verified: Verification::NotVerified,
        }
    );
    // The badge was still seen on the page.
    assert_eq!(
        report.scrape.unwrap().is_verified,
        Verification::Verified
    );
}

#[tokio::test]
async fn test_profile_without_badge_is_well_signed_but_unverified() {
    let kp = KeyPair::generate();
    let page = profile_page(&kp.public_key().to_base64(), false);
    let validator = validator(StaticPageReader::new().with_page(PROFILE_URL, page));

    let report = validator
        .validate(&payload(&kp, "FB:bobsbakery"))
        .await
        .unwrap();

    assert!(report.result.is_well_signed);
    assert_eq!(report.result.is_verified, Verification::NotVerified);
}

// =========================================================================
// Generic web page
// =========================================================================

#[tokio::test]
async fn test_url_location_has_unknown_verification() {
    let kp = KeyPair::generate();
    let url = "https://bobsbakery.example/";
    let validator = validator(
        StaticPageReader::new().with_page(url, meta_page(&kp.public_key().to_base64())),
    );

    let report = validator.validate(&payload(&kp, url)).await.unwrap();

    assert!(report.result.is_well_signed);
    assert_eq!(report.result.is_verified, Verification::Unknown);
    let scrape = report.scrape.unwrap();
    assert!(scrape.page_content.contains("<h1>Welcome</h1>"));
}

#[tokio::test]
async fn test_url_location_with_stale_key() {
    let old = KeyPair::generate();
    let new = KeyPair::generate();
    let url = "https://bobsbakery.example/";
    let validator = validator(
        StaticPageReader::new().with_page(url, meta_page(&new.public_key().to_base64())),
    );

    let report = validator.validate(&payload(&old, url)).await.unwrap();
    assert_eq!(report.result, ValidationResult::rejected());
}

// =========================================================================
// Failure surfaces
// =========================================================================

#[tokio::test]
async fn test_fetch_failure_is_key_not_found() {
    let kp = KeyPair::generate();
    let validator = QrValidator::new(KeyExtractor::new(UnreachableReader));

    for location in ["FB:bobsbakery", "https://bobsbakery.example/"] {
        let result = validator.validate(&payload(&kp, location)).await;
        assert!(
            matches!(result, Err(IdentityError::KeyNotFound { .. })),
            "expected KeyNotFound for {}",
            location
        );
    }
}

#[tokio::test]
async fn test_extract_then_verify_manually() {
    // Same flow as QrValidator, assembled by hand from the public pieces.
    let kp = KeyPair::generate();
    let page = profile_page(&kp.public_key().to_base64(), true);
    let extractor = KeyExtractor::new(StaticPageReader::new().with_page(PROFILE_URL, page));

    let signed = qrsign_core::parse(&payload(&kp, "FB:bobsbakery")).unwrap();
    let scrape = extractor.extract(&signed).await.unwrap();
    let result = verify_signed_message(&signed, &scrape.key, scrape.is_verified);

    assert_eq!(result, ValidationResult::accepted(Verification::Verified));
}
