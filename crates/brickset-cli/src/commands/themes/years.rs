//! Theme years command implementation.

use anyhow::{Context, Result};
use clap::Args;

use brickset_core::traits::Catalog;

use crate::commands::ApiOptions;
use crate::output;

#[derive(Args, Debug)]
pub struct YearsArgs {
    /// Limit to a theme; all themes when absent
    #[arg(long)]
    pub theme: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: YearsArgs, options: &ApiOptions) -> Result<()> {
    let client = options.client()?;

    let years = client
        .theme_years(args.theme.as_deref())
        .await
        .context("Failed to fetch theme years")?;

    if years.is_empty() {
        output::empty("No years found.");
        return Ok(());
    }

    output::json_list(&years, args.pretty)?;

    Ok(())
}
