//! Token encoding, signing, and verification.

pub mod decoder;
pub mod encoder;

pub use decoder::{verify, verify_at};
pub use encoder::{sign, sign_at};

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

pub(crate) type HmacSha256 = Hmac<Sha256>;

/// JOSE header carried as the first token segment.
///
/// Always `{"alg":"HS256","typ":"JWT"}`. It is emitted for interoperability
/// and never consulted on verify: the algorithm is not negotiated, the
/// verifier only ever computes HMAC-SHA256.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Signing algorithm identifier.
    pub alg: String,
    /// Token type identifier.
    pub typ: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        }
    }
}

/// Build a MAC instance keyed by the raw secret bytes.
pub(crate) fn mac_for(secret: &str) -> HmacSha256 {
    HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC-SHA256 accepts keys of any length")
}
