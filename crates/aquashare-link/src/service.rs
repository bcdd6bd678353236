//! Share token issuing and resolution.

use serde_json::{Map, Value};
use tracing::debug;

use aquashare_core::AppResult;
use aquashare_core::config::share::ShareConfig;
use aquashare_core::error::AppError;
use aquashare_core::types::UserId;

/// Claim key carrying the shared user id.
const UID_CLAIM: &str = "uid";

/// Issues and resolves signed share tokens for dashboard links.
///
/// Issue-time failures (a malformed user id, a payload that will not encode)
/// propagate as [`AppError`]: they indicate a bug in the caller. Resolve-time
/// failures all collapse to `None` so that a recipient probing the viewer
/// cannot distinguish a bad signature from an expired token.
#[derive(Debug, Clone)]
pub struct ShareLinkService {
    /// HMAC secret, shared between issuer and verifier.
    secret: String,
    /// Validity window applied to every issued token.
    ttl_seconds: u64,
}

impl ShareLinkService {
    /// Create a service from validated share configuration.
    pub fn from_config(config: &ShareConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            secret: config.secret.clone(),
            ttl_seconds: config.token_ttl_seconds,
        })
    }

    /// Create a service from an explicit secret and TTL.
    ///
    /// An empty secret is refused here rather than falling back to a
    /// built-in development value.
    pub fn new(secret: impl Into<String>, ttl_seconds: u64) -> AppResult<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AppError::configuration("share secret must not be empty"));
        }
        Ok(Self {
            secret,
            ttl_seconds,
        })
    }

    /// The validity window applied to issued tokens, in seconds.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Issue a share token for `user_id`.
    ///
    /// The id must already be in canonical lowercase hyphenated form; the
    /// shape check runs before any signing. The returned token is URL-safe
    /// and suitable for embedding in a query parameter as-is.
    pub fn issue_share_token(&self, user_id: &str) -> AppResult<String> {
        let user_id = UserId::parse_canonical(user_id)?;

        let mut payload = Map::new();
        payload.insert(UID_CLAIM.to_string(), Value::from(user_id.to_string()));

        let token = aquashare_token::sign(&payload, &self.secret, self.ttl_seconds)?;
        debug!(%user_id, ttl_seconds = self.ttl_seconds, "issued share token");
        Ok(token)
    }

    /// Resolve a share token back to the user id it was issued for.
    ///
    /// Never panics or errors on caller-supplied garbage: every failure
    /// (malformed token, signature mismatch, missing or past expiry, a uid
    /// claim that is not a canonical id) returns `None`. The specific cause
    /// is logged at debug level only.
    pub fn resolve_share_token(&self, token: &str) -> Option<String> {
        let claims = match aquashare_token::verify(token, &self.secret) {
            Ok(claims) => claims,
            Err(err) => {
                debug!(error = %err, "share token rejected");
                return None;
            }
        };

        // The payload is untrusted even after a valid signature, so the uid
        // shape is checked again on the way out.
        let uid = claims.get(UID_CLAIM).and_then(Value::as_str)?;
        match UserId::parse_canonical(uid) {
            Ok(user_id) => Some(user_id.to_string()),
            Err(err) => {
                debug!(error = %err, "share token carried a non-canonical uid");
                None
            }
        }
    }
}
