//! Theme list command implementation.

use anyhow::{Context, Result};
use clap::Args;

use brickset_core::traits::Catalog;

use crate::commands::ApiOptions;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs, options: &ApiOptions) -> Result<()> {
    let client = options.client()?;

    let themes = client.themes().await.context("Failed to fetch themes")?;

    if themes.is_empty() {
        output::empty("No themes found.");
        return Ok(());
    }

    output::json_list(&themes, args.pretty)?;
    output::count("Total", themes.len());

    Ok(())
}
