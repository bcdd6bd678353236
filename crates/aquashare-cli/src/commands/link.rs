//! `link` — build a full shareable URL for a user id.

use clap::Args;
use serde::Serialize;

use aquashare_core::error::AppError;
use aquashare_link::{LinkBuilder, ShareLinkService};

use crate::output::{OutputFormat, print_result};

/// Arguments for the `link` command
#[derive(Debug, Args)]
pub struct LinkArgs {
    /// User id to share (canonical lowercase UUID)
    pub user_id: String,

    /// Link to a single device's usage history instead of the dashboard
    #[arg(short, long)]
    pub device_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct ShareLink {
    user_id: String,
    device_id: Option<String>,
    url: String,
}

pub fn execute(args: &LinkArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let service = ShareLinkService::from_config(&config.share)?;
    let builder = LinkBuilder::new(&config.share.base_url)?;

    let token = service.issue_share_token(&args.user_id)?;
    let url = match &args.device_id {
        Some(device_id) => builder.device_history_link(&token, device_id),
        None => builder.dashboard_link(&token),
    };

    let result = ShareLink {
        user_id: args.user_id.clone(),
        device_id: args.device_id.clone(),
        url: url.into(),
    };
    print_result(&result.url, &result, format);
    Ok(())
}
