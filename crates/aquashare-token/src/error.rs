//! Token codec error taxonomy.
//!
//! Internal callers get the specific failure kind; the share-link service
//! collapses all verify-time variants into a single opaque failure so the
//! UI cannot be used as an oracle for signature validity versus expiry.

use thiserror::Error;

use aquashare_core::error::AppError;

/// Errors produced by the token codec.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Structural problem: wrong segment count, undecodable base64url,
    /// or a payload that is not a JSON object.
    #[error("malformed token: {0}")]
    Malformed(&'static str),

    /// The recomputed HMAC does not match the signature segment.
    #[error("token signature mismatch")]
    InvalidSignature,

    /// Signature is valid but the `exp` claim is in the past.
    #[error("token expired at {exp}")]
    Expired {
        /// The expiry timestamp carried by the token (Unix seconds).
        exp: i64,
    },

    /// Signature is valid but the payload carries no integer `exp` claim.
    #[error("token payload has no exp claim")]
    MissingExpiry,

    /// The payload could not be serialized at sign time.
    #[error("payload could not be encoded")]
    Encoding(#[source] serde_json::Error),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encoding(source) => {
                AppError::with_source(
                    aquashare_core::error::ErrorKind::Serialization,
                    "failed to encode token payload",
                    source,
                )
            }
            other => AppError::authentication(other.to_string()),
        }
    }
}
