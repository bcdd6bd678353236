//! Token creation: serialize, encode, and sign the three segments.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::Mac;
use serde_json::{Map, Value};

use super::{Header, mac_for};
use crate::error::TokenError;

/// Sign `payload` into a three-segment token valid for `ttl_seconds`.
///
/// The `exp` claim is computed from the current wall clock and merged into
/// the payload, overwriting any `exp` the caller supplied. A TTL of zero
/// produces a token that is expired the instant after issuance.
pub fn sign(
    payload: &Map<String, Value>,
    secret: &str,
    ttl_seconds: u64,
) -> Result<String, TokenError> {
    sign_at(payload, secret, ttl_seconds, Utc::now().timestamp())
}

/// Sign with an explicit clock. Deterministic for identical inputs.
pub fn sign_at(
    payload: &Map<String, Value>,
    secret: &str,
    ttl_seconds: u64,
    now: i64,
) -> Result<String, TokenError> {
    let exp = now + ttl_seconds as i64;
    let mut claims = payload.clone();
    claims.insert("exp".to_string(), Value::from(exp));

    let header_json = serde_json::to_vec(&Header::default()).map_err(TokenError::Encoding)?;
    let payload_json = serde_json::to_vec(&claims).map_err(TokenError::Encoding)?;

    let header_b64 = URL_SAFE_NO_PAD.encode(header_json);
    let payload_b64 = URL_SAFE_NO_PAD.encode(payload_json);

    let mut mac = mac_for(secret);
    mac.update(header_b64.as_bytes());
    mac.update(b".");
    mac.update(payload_b64.as_bytes());
    let signature_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{header_b64}.{payload_b64}.{signature_b64}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid_payload(uid: &str) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("uid".to_string(), Value::from(uid));
        payload
    }

    #[test]
    fn test_token_has_exactly_three_segments() {
        let token = sign(&uid_payload("user-1"), "secret", 60).expect("sign");
        assert_eq!(token.split('.').count(), 3);
        assert!(token.split('.').all(|segment| !segment.is_empty()));
    }

    #[test]
    fn test_segments_are_url_safe() {
        let token = sign(&uid_payload("user-1"), "secret", 60).expect("sign");
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        );
    }

    #[test]
    fn test_signing_is_deterministic_at_fixed_time() {
        let payload = uid_payload("3fa85f64-5717-4562-b3fc-2c963f66afa6");
        let a = sign_at(&payload, "secret", 604_800, 1_700_000_000).expect("sign");
        let b = sign_at(&payload, "secret", 604_800, 1_700_000_000).expect("sign");
        assert_eq!(a, b);
    }

    #[test]
    fn test_exp_claim_is_now_plus_ttl() {
        let token = sign_at(&uid_payload("u"), "secret", 60, 1_700_000_000).expect("sign");
        let payload_b64 = token.split('.').nth(1).expect("payload segment");
        let payload_json = URL_SAFE_NO_PAD.decode(payload_b64).expect("base64url");
        let claims: Map<String, Value> = serde_json::from_slice(&payload_json).expect("json");
        assert_eq!(claims["exp"], Value::from(1_700_000_060_i64));
        assert_eq!(claims["uid"], Value::from("u"));
    }

    #[test]
    fn test_caller_supplied_exp_is_overwritten() {
        let mut payload = uid_payload("u");
        payload.insert("exp".to_string(), Value::from(1_i64));
        let token = sign_at(&payload, "secret", 60, 1_700_000_000).expect("sign");
        let payload_b64 = token.split('.').nth(1).expect("payload segment");
        let payload_json = URL_SAFE_NO_PAD.decode(payload_b64).expect("base64url");
        let claims: Map<String, Value> = serde_json::from_slice(&payload_json).expect("json");
        assert_eq!(claims["exp"], Value::from(1_700_000_060_i64));
    }

    #[test]
    fn test_header_segment_is_fixed() {
        let a = sign_at(&uid_payload("a"), "s1", 10, 0).expect("sign");
        let b = sign_at(&uid_payload("b"), "s2", 20, 99).expect("sign");
        assert_eq!(
            a.split('.').next().expect("header"),
            b.split('.').next().expect("header")
        );
        let header_json = URL_SAFE_NO_PAD
            .decode(a.split('.').next().expect("header"))
            .expect("base64url");
        let header: Header = serde_json::from_slice(&header_json).expect("json");
        assert_eq!(header, Header::default());
    }
}
