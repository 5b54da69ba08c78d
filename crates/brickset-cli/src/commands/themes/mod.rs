//! Theme subcommand implementations.

mod list;
mod subthemes;
mod years;

use anyhow::Result;
use clap::{Args, Subcommand};

use super::ApiOptions;

#[derive(Args, Debug)]
pub struct ThemesCommand {
    #[command(subcommand)]
    pub command: ThemesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ThemesSubcommand {
    /// List all themes with set counts
    List(list::ListArgs),

    /// List sub-themes of a theme
    Subthemes(subthemes::SubthemesArgs),

    /// List per-year set counts
    Years(years::YearsArgs),
}

pub async fn handle(cmd: ThemesCommand, options: &ApiOptions) -> Result<()> {
    match cmd.command {
        ThemesSubcommand::List(args) => list::run(args, options).await,
        ThemesSubcommand::Subthemes(args) => subthemes::run(args, options).await,
        ThemesSubcommand::Years(args) => years::run(args, options).await,
    }
}
