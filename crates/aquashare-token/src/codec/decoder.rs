//! Token verification: structure, signature, and expiry checks.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::Mac;
use serde_json::{Map, Value};

use super::mac_for;
use crate::error::TokenError;

/// Verify `token` against `secret` and return the decoded claims.
///
/// Checks, in order:
/// 1. Exactly three non-empty dot-separated segments
/// 2. Signature matches the recomputed HMAC (constant-time comparison)
/// 3. Payload decodes to a JSON object
/// 4. `exp` claim present and not in the past (`exp == now` is still valid)
pub fn verify(token: &str, secret: &str) -> Result<Map<String, Value>, TokenError> {
    verify_at(token, secret, Utc::now().timestamp())
}

/// Verify with an explicit clock. Pure function of `(token, secret, now)`.
pub fn verify_at(token: &str, secret: &str, now: i64) -> Result<Map<String, Value>, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
        return Err(TokenError::Malformed("expected three non-empty segments"));
    }
    let (header_b64, payload_b64, signature_b64) = (segments[0], segments[1], segments[2]);

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| TokenError::Malformed("signature segment is not base64url"))?;

    let mut mac = mac_for(secret);
    mac.update(header_b64.as_bytes());
    mac.update(b".");
    mac.update(payload_b64.as_bytes());
    // verify_slice compares in constant time
    mac.verify_slice(&signature)
        .map_err(|_| TokenError::InvalidSignature)?;

    let payload_json = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .map_err(|_| TokenError::Malformed("payload segment is not base64url"))?;
    let claims = match serde_json::from_slice::<Value>(&payload_json) {
        Ok(Value::Object(map)) => map,
        _ => return Err(TokenError::Malformed("payload is not a JSON object")),
    };

    let exp = claims
        .get("exp")
        .and_then(Value::as_i64)
        .ok_or(TokenError::MissingExpiry)?;
    if now > exp {
        return Err(TokenError::Expired { exp });
    }

    Ok(claims)
}
