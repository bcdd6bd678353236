//! Shareable viewer URL construction.
//!
//! A share link is the anonymous web viewer's URL with the signed token in
//! the `token` query parameter. The token itself is already URL-safe; the
//! device id is caller-supplied and gets percent-encoded.

use url::Url;

use aquashare_core::AppResult;
use aquashare_core::error::AppError;

/// Path of the anonymous dashboard viewer.
const SHARED_DASHBOARD_PATH: &str = "shared-dashboard";
/// Path of the anonymous per-device usage history viewer.
const SHARED_USAGE_HISTORY_PATH: &str = "shared-usage-history";

/// Builds shareable URLs for a deployed viewer origin.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: Url,
}

impl LinkBuilder {
    /// Create a builder for the given base URL, e.g. `https://example.com`.
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::configuration(format!("invalid base url {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "base url {base_url} cannot carry a path"
            )));
        }
        Ok(Self { base_url })
    }

    /// URL of the shared dashboard for the given token.
    pub fn dashboard_link(&self, token: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(SHARED_DASHBOARD_PATH);
        url.set_query(None);
        url.query_pairs_mut().append_pair("token", token);
        url
    }

    /// URL of a single device's shared usage history for the given token.
    pub fn device_history_link(&self, token: &str, device_id: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(SHARED_USAGE_HISTORY_PATH);
        url.set_query(None);
        url.query_pairs_mut()
            .append_pair("token", token)
            .append_pair("deviceId", device_id);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_link() {
        let builder = LinkBuilder::new("https://example.com").expect("builder");
        let url = builder.dashboard_link("aaa.bbb.ccc");
        assert_eq!(
            url.as_str(),
            "https://example.com/shared-dashboard?token=aaa.bbb.ccc"
        );
    }

    #[test]
    fn test_device_history_link_encodes_device_id() {
        let builder = LinkBuilder::new("http://localhost:8081").expect("builder");
        let url = builder.device_history_link("aaa.bbb.ccc", "device 001/a");
        assert_eq!(
            url.as_str(),
            "http://localhost:8081/shared-usage-history?token=aaa.bbb.ccc&deviceId=device+001%2Fa"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(LinkBuilder::new("not a url").is_err());
        assert!(LinkBuilder::new("mailto:someone@example.com").is_err());
    }
}
