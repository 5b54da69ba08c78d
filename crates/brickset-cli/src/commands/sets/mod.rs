//! Set subcommand implementations.

mod get;
mod images;
mod instructions;
mod reviews;
mod search;

use anyhow::Result;
use clap::{Args, Subcommand};

use super::ApiOptions;

#[derive(Args, Debug)]
pub struct SetsCommand {
    #[command(subcommand)]
    pub command: SetsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SetsSubcommand {
    /// Search sets by query, theme, sub-theme or year
    Search(search::SearchArgs),

    /// Fetch a single set
    Get(get::GetArgs),

    /// List building instructions for a set
    Instructions(instructions::InstructionsArgs),

    /// List additional images for a set
    Images(images::ImagesArgs),

    /// List user reviews for a set
    Reviews(reviews::ReviewsArgs),
}

pub async fn handle(cmd: SetsCommand, options: &ApiOptions) -> Result<()> {
    match cmd.command {
        SetsSubcommand::Search(args) => search::run(args, options).await,
        SetsSubcommand::Get(args) => get::run(args, options).await,
        SetsSubcommand::Instructions(args) => instructions::run(args, options).await,
        SetsSubcommand::Images(args) => images::run(args, options).await,
        SetsSubcommand::Reviews(args) => reviews::run(args, options).await,
    }
}
