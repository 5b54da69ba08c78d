//! User minifigs command implementation.

use anyhow::{Context, Result};
use clap::Args;

use brickset_core::traits::Account;

use crate::commands::ApiOptions;
use crate::output;

use super::load_session;

#[derive(Args, Debug)]
pub struct MinifigsArgs {
    /// Search query to limit the minifigs by
    #[arg(long)]
    pub query: Option<String>,

    /// Only minifigs the user owns
    #[arg(long)]
    pub owned: bool,

    /// Only minifigs the user wants
    #[arg(long)]
    pub wanted: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: MinifigsArgs, options: &ApiOptions) -> Result<()> {
    let session = load_session(options)?;

    let minifigs = session
        .minifigs(args.query.as_deref(), args.owned, args.wanted)
        .await
        .context("Failed to list user minifigs")?;

    if minifigs.is_empty() {
        output::empty("No minifigs found.");
        return Ok(());
    }

    output::json_list(&minifigs, args.pretty)?;
    output::count("Total", minifigs.len());

    Ok(())
}
