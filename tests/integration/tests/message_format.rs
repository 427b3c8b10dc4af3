//! Integration test: wire format parsing and canonical-form signing.

use qrsign_core::{parse, CoreError, KeyType, Message, Verification};
use qrsign_crypto::{check_key_pair, sign_message, verify_signed_message, KeyPair};

fn signed_wire(kp: &KeyPair, name: &str, date: &str, location: &str) -> String {
    let message = Message::new(name, date, location).unwrap();
    sign_message(message, kp).unwrap().to_wire()
}

#[test]
fn test_signed_payload_parses_verbatim() {
    let kp = KeyPair::generate();
    let cases = [
        ("Alice", "2024-05-01", "https://alice.example/about", KeyType::Url),
        (" spaced name ", "1999-12-31", "http://x", KeyType::Url),
        ("Ünïcödé Café", "2030-01-01", "FB:cafe.unicode", KeyType::NamedProfile),
        ("", "0000-00-00", "FB:", KeyType::NamedProfile),
    ];

    for (name, date, location, key_type) in cases {
        let wire = signed_wire(&kp, name, date, location);
        let signed = parse(&wire).expect("signed payload should parse");
        let message = signed.message();
        assert_eq!(message.name(), name);
        assert_eq!(message.date(), date);
        assert_eq!(message.key_location(), location);
        assert_eq!(message.key_type(), key_type);
        assert_eq!(signed.to_wire(), wire);
    }
}

#[test]
fn test_canonical_form_is_payload_without_signature() {
    let kp = KeyPair::generate();
    let wire = signed_wire(&kp, "Alice", "2024-05-01", "FB:alice");
    let signed = parse(&wire).unwrap();
    let (body, signature) = wire.rsplit_once('\n').unwrap();
    assert_eq!(signed.message().canonical_form(), body);
    assert_eq!(signed.signature(), signature);
}

#[test]
fn test_roundtrip_verifies_only_with_signing_key() {
    let kp = KeyPair::generate();
    let other = KeyPair::generate();
    let signed = parse(&signed_wire(&kp, "Alice", "2024-05-01", "FB:alice")).unwrap();

    let good = verify_signed_message(&signed, &kp.public_key().to_base64(), Verification::Unknown);
    assert!(good.is_well_signed);

    let bad = verify_signed_message(
        &signed,
        &other.public_key().to_base64(),
        Verification::Unknown,
    );
    assert!(!bad.is_well_signed);
}

#[test]
fn test_any_single_character_tamper_fails() {
    let kp = KeyPair::generate();
    let public = kp.public_key().to_base64();
    let wire = signed_wire(&kp, "Alice Smith", "2024-05-01", "https://alice.example");
    let (body, signature) = wire.rsplit_once('\n').unwrap();

    let mut checked = 0;
    for (i, c) in body.char_indices() {
        if c == '\n' {
            continue;
        }
        let replacement = match c {
            '0'..='8' => ((c as u8) + 1) as char,
            '9' => '0',
            'x' => 'y',
            _ => 'x',
        };
        let mut tampered = String::with_capacity(wire.len());
        tampered.push_str(&body[..i]);
        tampered.push(replacement);
        tampered.push_str(&body[i + c.len_utf8()..]);
        tampered.push('\n');
        tampered.push_str(signature);

        // Changes that break the wire format are rejected earlier.
        let Ok(forged) = parse(&tampered) else {
            continue;
        };
        let result = verify_signed_message(&forged, &public, Verification::Verified);
        assert!(!result.is_well_signed, "tamper at byte {} verified", i);
        assert_eq!(result.is_verified, Verification::NotVerified);
        checked += 1;
    }
    assert!(checked > 20, "only {} tampered variants were parseable", checked);
}

#[test]
fn test_malformed_payloads() {
    let sig = "A".repeat(86) + "==";
    let cases = [
        "Alice\n2024-05-01\nFB:alice".to_string(),
        format!("Alice\n2024-05-01\nFB:alice\n{}\n", sig),
        format!("Alice\n2024-5-1\nFB:alice\n{}", sig),
        format!("Alice\n2024-05-01\nmailto:alice@example.com\n{}", sig),
        format!("Alice\n2024-05-01\nFB:alice\n{}", &sig[..87]),
        format!("Alice\n2024-05-01\nFB:alice\n{}A", sig),
    ];

    for raw in cases {
        assert!(
            matches!(parse(&raw), Err(CoreError::MalformedMessage(_))),
            "expected MalformedMessage for {:?}",
            raw
        );
    }
}

#[test]
fn test_key_pair_check() {
    let kp = KeyPair::generate();
    let other = KeyPair::generate();
    assert!(check_key_pair(&kp.public_key().to_base64(), &kp.secret_base64()));
    assert!(!check_key_pair(&other.public_key().to_base64(), &kp.secret_base64()));
}
