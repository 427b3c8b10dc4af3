pub mod error;
pub mod keys;
pub mod signing;
pub mod verifier;

pub use error::CryptoError;
pub use keys::{KeyPair, PublicKey};
pub use signing::{sign, verify, Signature};
pub use verifier::{check_key_pair, sign_message, verify_signed_message};
