use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ed25519_dalek::{SigningKey, VerifyingKey, KEYPAIR_LENGTH, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::error::CryptoError;

/// Ed25519 key pair for signing operations.
/// Private key material is zeroized on drop.
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    /// Generate a new random key pair using OS-provided entropy.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self { signing_key }
    }

    /// Create a key pair from a 32-byte seed.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Create a key pair from raw private key bytes.
    ///
    /// Accepts either the 32-byte seed or the 64-byte `seed || public`
    /// form. In the 64-byte form the public half must match the seed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        match bytes.len() {
            SECRET_KEY_LENGTH => {
                let seed: Zeroizing<[u8; SECRET_KEY_LENGTH]> =
                    Zeroizing::new(bytes.try_into().map_err(|_| {
                        CryptoError::InvalidKeyLength {
                            expected: SECRET_KEY_LENGTH,
                            actual: bytes.len(),
                        }
                    })?);
                Ok(Self::from_seed(&seed))
            }
            KEYPAIR_LENGTH => {
                let pair: Zeroizing<[u8; KEYPAIR_LENGTH]> =
                    Zeroizing::new(bytes.try_into().map_err(|_| {
                        CryptoError::InvalidKeyLength {
                            expected: KEYPAIR_LENGTH,
                            actual: bytes.len(),
                        }
                    })?);
                let signing_key = SigningKey::from_keypair_bytes(&pair).map_err(|e| {
                    CryptoError::InvalidInput(format!("inconsistent keypair bytes: {}", e))
                })?;
                Ok(Self { signing_key })
            }
            actual => Err(CryptoError::InvalidKeyLength {
                expected: SECRET_KEY_LENGTH,
                actual,
            }),
        }
    }

    /// Decode a private key from standard base64.
    pub fn from_base64(encoded: &str) -> Result<Self, CryptoError> {
        let bytes = Zeroizing::new(BASE64.decode(encoded)?);
        Self::from_bytes(&bytes)
    }

    /// Get the public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            verifying_key: self.signing_key.verifying_key(),
        }
    }

    /// The 32-byte seed as standard base64.
    pub fn secret_base64(&self) -> String {
        let seed = Zeroizing::new(self.signing_key.to_bytes());
        BASE64.encode(seed.as_slice())
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

/// Ed25519 public key for verification operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    verifying_key: VerifyingKey,
}

impl PublicKey {
    /// Create from raw bytes (32 bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let bytes_arr: [u8; PUBLIC_KEY_LENGTH] =
            bytes.try_into().map_err(|_| CryptoError::InvalidKeyLength {
                expected: PUBLIC_KEY_LENGTH,
                actual: bytes.len(),
            })?;
        let verifying_key = VerifyingKey::from_bytes(&bytes_arr)
            .map_err(|e| CryptoError::InvalidInput(format!("invalid public key: {}", e)))?;
        Ok(Self { verifying_key })
    }

    /// Decode from standard base64 (44 characters).
    pub fn from_base64(encoded: &str) -> Result<Self, CryptoError> {
        let bytes = BASE64.decode(encoded)?;
        Self::from_bytes(&bytes)
    }

    /// Encode as standard base64 (44 characters).
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.as_bytes())
    }

    /// Get the raw bytes (32 bytes).
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.verifying_key.as_bytes()
    }

    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}
