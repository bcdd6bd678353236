//! `issue` — sign a share token for a user id.

use clap::Args;
use serde::Serialize;

use aquashare_core::error::AppError;
use aquashare_link::ShareLinkService;

use crate::output::{OutputFormat, print_result};

/// Arguments for the `issue` command
#[derive(Debug, Args)]
pub struct IssueArgs {
    /// User id to encode (canonical lowercase UUID)
    pub user_id: String,
}

#[derive(Debug, Serialize)]
struct IssuedToken {
    user_id: String,
    token: String,
    ttl_seconds: u64,
}

pub fn execute(args: &IssueArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let service = ShareLinkService::from_config(&config.share)?;

    let token = service.issue_share_token(&args.user_id)?;
    let result = IssuedToken {
        user_id: args.user_id.clone(),
        ttl_seconds: service.ttl_seconds(),
        token,
    };
    print_result(&result.token, &result, format);
    Ok(())
}
