//! # aquashare-token
//!
//! Compact signed-token codec for AquaShare share links.
//!
//! A token is three base64url segments joined by `.`:
//! `header.payload.signature`. The header is the fixed JOSE pair
//! `{"alg":"HS256","typ":"JWT"}`, the payload is a JSON object of claims,
//! and the signature is HMAC-SHA256 over `header_b64 + "." + payload_b64`
//! keyed by a shared secret.
//!
//! The codec is deliberately narrow: one algorithm, symmetric keys only,
//! no header negotiation on verify. It knows nothing about what the claims
//! mean; domain semantics live in `aquashare-link`.

pub mod codec;
pub mod error;

pub use codec::{Header, sign, sign_at, verify, verify_at};
pub use error::TokenError;
