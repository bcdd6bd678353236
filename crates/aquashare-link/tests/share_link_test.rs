//! End-to-end tests for share link issue and resolve.

use serde_json::{Map, Value};

use aquashare_link::ShareLinkService;

const SECRET: &str = "integration-test-secret";
const USER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
const SEVEN_DAYS: u64 = 604_800;

fn service() -> ShareLinkService {
    ShareLinkService::new(SECRET, SEVEN_DAYS).expect("service")
}

fn uid_payload(uid: &str) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("uid".to_string(), Value::from(uid));
    payload
}

#[test]
fn test_happy_path() {
    let service = service();
    let token = service.issue_share_token(USER_ID).expect("issue");
    assert_eq!(token.matches('.').count(), 2);
    assert_eq!(service.resolve_share_token(&token).as_deref(), Some(USER_ID));
}

#[test]
fn test_wrong_secret_resolves_to_none() {
    let issuer = ShareLinkService::new("A", SEVEN_DAYS).expect("issuer");
    let resolver = ShareLinkService::new("B", SEVEN_DAYS).expect("resolver");
    let token = issuer.issue_share_token(USER_ID).expect("issue");
    assert_eq!(resolver.resolve_share_token(&token), None);
}

#[test]
fn test_expired_token_resolves_to_none() {
    // Signed far in the past, so its 60-second window has long elapsed.
    let token =
        aquashare_token::sign_at(&uid_payload(USER_ID), SECRET, 60, 1_000_000).expect("sign");
    assert_eq!(service().resolve_share_token(&token), None);
}

#[test]
fn test_flipping_any_signature_character_resolves_to_none() {
    let service = service();
    let token = service.issue_share_token(USER_ID).expect("issue");
    let (prefix, signature) = token.rsplit_once('.').expect("three segments");

    for (i, c) in signature.char_indices() {
        let replacement = if c == 'A' { 'B' } else { 'A' };
        let mut flipped = signature.to_string();
        flipped.replace_range(i..i + c.len_utf8(), &replacement.to_string());
        if flipped == signature {
            continue;
        }
        let tampered = format!("{prefix}.{flipped}");
        assert_eq!(
            service.resolve_share_token(&tampered),
            None,
            "flipping signature byte {i} should invalidate the token"
        );
    }
}

#[test]
fn test_swapped_payload_resolves_to_none() {
    let service = service();
    let token_a = service.issue_share_token(USER_ID).expect("issue");
    let token_b = service
        .issue_share_token("00000000-0000-4000-8000-000000000000")
        .expect("issue");

    let a: Vec<&str> = token_a.split('.').collect();
    let b: Vec<&str> = token_b.split('.').collect();
    // Payload from one token under the signature of another.
    let spliced = format!("{}.{}.{}", a[0], b[1], a[2]);
    assert_eq!(service.resolve_share_token(&spliced), None);
}

#[test]
fn test_malformed_segment_counts_resolve_to_none() {
    let service = service();
    for garbage in ["", "one", "one.two", "one.two.three.four", "a.b.c.d.e.f"] {
        assert_eq!(service.resolve_share_token(garbage), None, "for {garbage:?}");
    }
}

#[test]
fn test_valid_signature_with_non_canonical_uid_resolves_to_none() {
    // Correctly signed by the shared codec, but the claim shape is wrong.
    let service = service();
    for uid in ["not-a-uuid", "3FA85F64-5717-4562-B3FC-2C963F66AFA6", ""] {
        let token =
            aquashare_token::sign(&uid_payload(uid), SECRET, SEVEN_DAYS).expect("sign");
        assert_eq!(service.resolve_share_token(&token), None, "for uid {uid:?}");
    }
}

#[test]
fn test_valid_signature_without_uid_claim_resolves_to_none() {
    let mut payload = Map::new();
    payload.insert("sub".to_string(), Value::from(USER_ID));
    let token = aquashare_token::sign(&payload, SECRET, SEVEN_DAYS).expect("sign");
    assert_eq!(service().resolve_share_token(&token), None);
}

#[test]
fn test_token_is_url_safe() {
    let token = service().issue_share_token(USER_ID).expect("issue");
    assert!(
        token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    );
}
