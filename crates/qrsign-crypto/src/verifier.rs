//! Message-level signing and verification.
//!
//! Failures here are expected outcomes ("this QR code is not validly
//! signed"), so the checker and verifier fold every error into a negative
//! result instead of returning it.

use qrsign_core::{CoreError, Message, SignedMessage, ValidationResult, Verification};

use crate::error::CryptoError;
use crate::keys::{KeyPair, PublicKey};
use crate::signing::{sign, verify, Signature};

/// Self-test that a base64 public key belongs to a base64 private key.
///
/// Signs an empty message with the private key and verifies it with the
/// public key. Any decode or verification failure yields `false`.
pub fn check_key_pair(public_key: &str, private_key: &str) -> bool {
    match try_check_key_pair(public_key, private_key) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "key pair check failed");
            false
        }
    }
}

fn try_check_key_pair(public_key: &str, private_key: &str) -> Result<(), CryptoError> {
    let keypair = KeyPair::from_base64(private_key)?;
    let pubkey = PublicKey::from_base64(public_key)?;
    let sig = sign(b"", &keypair);
    verify(b"", &sig, &pubkey)
}

/// Verify a signed message against a base64 public key.
///
/// A good signature passes `external` through unchanged. A bad signature,
/// or an undecodable key or signature, yields `{false, NotVerified}`
/// whatever `external` says.
pub fn verify_signed_message(
    signed: &SignedMessage,
    public_key: &str,
    external: Verification,
) -> ValidationResult {
    match try_verify(signed, public_key) {
        Ok(()) => ValidationResult::accepted(external),
        Err(e) => {
            tracing::debug!(
                name = signed.message().name(),
                error = %e,
                "signature rejected"
            );
            ValidationResult::rejected()
        }
    }
}

fn try_verify(signed: &SignedMessage, public_key: &str) -> Result<(), CryptoError> {
    let pubkey = PublicKey::from_base64(public_key)?;
    let sig = Signature::from_base64(signed.signature())?;
    verify(&signed.message().canonical_bytes(), &sig, &pubkey)
}

/// Sign a message's canonical form, producing a scannable payload.
pub fn sign_message(message: Message, keypair: &KeyPair) -> Result<SignedMessage, CoreError> {
    let sig = sign(&message.canonical_bytes(), keypair);
    SignedMessage::new(message, sig.to_base64())
}
