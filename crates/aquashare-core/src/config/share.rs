//! Share-link token configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Share-link signing and URL configuration.
///
/// The secret deliberately has no `#[serde(default)]`: a deployment without
/// an explicit secret must fail at startup rather than sign tokens with a
/// guessable built-in value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Secret key for share-token signing (HMAC-SHA256). Required.
    pub secret: String,
    /// Token validity window in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
    /// Base URL of the deployed web viewer, used to build shareable links.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ShareConfig {
    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.secret.is_empty() {
            return Err(AppError::configuration(
                "share.secret must be a non-empty string",
            ));
        }
        Ok(())
    }
}

/// 7 days.
fn default_token_ttl() -> u64 {
    7 * 24 * 60 * 60
}

fn default_base_url() -> String {
    "http://localhost:8081".to_string()
}
