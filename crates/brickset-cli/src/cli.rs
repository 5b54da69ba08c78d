//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::account::AccountCommand;
use crate::commands::sets::SetsCommand;
use crate::commands::themes::ThemesCommand;

/// BrickSet catalog and collection explorer.
#[derive(Parser, Debug)]
#[command(name = "brickset")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// BrickSet API key
    #[arg(long, env = "BRICKSET_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL override
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set catalog operations
    Sets(SetsCommand),

    /// Theme catalog operations
    Themes(ThemesCommand),

    /// User account operations
    Account(AccountCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
