//! `resolve` — validate a share token and recover the user id.

use clap::Args;
use serde::Serialize;

use aquashare_core::error::AppError;
use aquashare_link::ShareLinkService;

use crate::output::{OutputFormat, print_result};

/// Arguments for the `resolve` command
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Share token to resolve
    pub token: String,
}

#[derive(Debug, Serialize)]
struct ResolvedToken {
    user_id: String,
}

pub fn execute(args: &ResolveArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let service = ShareLinkService::from_config(&config.share)?;

    match service.resolve_share_token(&args.token) {
        Some(user_id) => {
            let result = ResolvedToken { user_id };
            print_result(&result.user_id, &result, format);
            Ok(())
        }
        None => Err(AppError::authentication("link has expired or is invalid")),
    }
}
