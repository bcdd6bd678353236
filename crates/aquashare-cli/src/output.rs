//! Output formatting for CLI commands.

use serde::Serialize;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Just the primary value, suitable for scripting
    Plain,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

/// Print a command result in the selected format.
///
/// `primary` is the single value a shell pipeline wants (a token, a URL,
/// a user id); the full item is only rendered for JSON output.
pub fn print_result<T: Serialize>(primary: &str, item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Plain => println!("{}", primary),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}
