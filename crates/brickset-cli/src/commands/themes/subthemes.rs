//! Sub-theme list command implementation.

use anyhow::{Context, Result};
use clap::Args;

use brickset_core::traits::Catalog;

use crate::commands::ApiOptions;
use crate::output;

#[derive(Args, Debug)]
pub struct SubthemesArgs {
    /// Theme name
    pub theme: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: SubthemesArgs, options: &ApiOptions) -> Result<()> {
    let client = options.client()?;

    let subthemes = client
        .subthemes(&args.theme)
        .await
        .context("Failed to fetch sub-themes")?;

    if subthemes.is_empty() {
        output::empty("No sub-themes found.");
        return Ok(());
    }

    output::json_list(&subthemes, args.pretty)?;

    Ok(())
}
