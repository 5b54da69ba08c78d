//! Set search command implementation.

use anyhow::{Context, Result};
use clap::Args;

use brickset_core::SetQuery;
use brickset_core::traits::Catalog;

use crate::commands::ApiOptions;
use crate::output;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search term for set number, name, theme and sub-theme
    #[arg(long)]
    pub query: Option<String>,

    /// Theme name
    #[arg(long)]
    pub theme: Option<String>,

    /// Sub-theme name
    #[arg(long)]
    pub subtheme: Option<String>,

    /// Release year
    #[arg(long)]
    pub year: Option<u16>,

    /// Field to order results by
    #[arg(long)]
    pub order_by: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: SearchArgs, options: &ApiOptions) -> Result<()> {
    let client = options.client()?;

    let mut query = SetQuery::new();
    if let Some(term) = args.query {
        query = query.query(term);
    }
    if let Some(theme) = args.theme {
        query = query.theme(theme);
    }
    if let Some(subtheme) = args.subtheme {
        query = query.subtheme(subtheme);
    }
    if let Some(year) = args.year {
        query = query.year(year);
    }
    if let Some(order_by) = args.order_by {
        query = query.order_by(order_by);
    }

    let sets = client
        .search_sets(&query)
        .await
        .context("Failed to search sets")?;

    if sets.is_empty() {
        output::empty("No sets found.");
        return Ok(());
    }

    output::json_list(&sets, args.pretty)?;
    output::count("Total", sets.len());

    Ok(())
}
