//! User sets command implementation.

use anyhow::{Context, Result};
use clap::Args;

use brickset_core::SetQuery;
use brickset_core::traits::Account;

use crate::commands::ApiOptions;
use crate::output;

use super::load_session;

#[derive(Args, Debug)]
pub struct SetsArgs {
    /// Search term for set number, name, theme and sub-theme
    #[arg(long)]
    pub query: Option<String>,

    /// Theme name
    #[arg(long)]
    pub theme: Option<String>,

    /// Release year
    #[arg(long)]
    pub year: Option<u16>,

    /// Only sets the user owns
    #[arg(long)]
    pub owned: bool,

    /// Only sets the user wants
    #[arg(long)]
    pub wanted: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: SetsArgs, options: &ApiOptions) -> Result<()> {
    let session = load_session(options)?;

    let mut query = SetQuery::new();
    if let Some(term) = args.query {
        query = query.query(term);
    }
    if let Some(theme) = args.theme {
        query = query.theme(theme);
    }
    if let Some(year) = args.year {
        query = query.year(year);
    }

    let sets = session
        .search_sets(&query, args.owned, args.wanted)
        .await
        .context("Failed to search user sets")?;

    if sets.is_empty() {
        output::empty("No sets found.");
        return Ok(());
    }

    output::json_list(&sets, args.pretty)?;
    output::count("Total", sets.len());

    Ok(())
}
