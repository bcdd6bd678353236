//! CLI command definitions and dispatch.

pub mod issue;
pub mod link;
pub mod resolve;

use clap::{Parser, Subcommand};

use aquashare_core::config::AppConfig;
use aquashare_core::error::AppError;

use crate::output::OutputFormat;

/// AquaShare — share-link tooling for the water dashboard
#[derive(Debug, Parser)]
#[command(name = "aquashare", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Issue a share token for a user id
    Issue(issue::IssueArgs),
    /// Resolve a share token back to its user id
    Resolve(resolve::ResolveArgs),
    /// Build a full shareable URL for a user id
    Link(link::LinkArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Issue(args) => issue::execute(args, &self.env, self.format),
            Commands::Resolve(args) => resolve::execute(args, &self.env, self.format),
            Commands::Link(args) => link::execute(args, &self.env, self.format),
        }
    }
}

/// Helper: load configuration for the selected environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}
