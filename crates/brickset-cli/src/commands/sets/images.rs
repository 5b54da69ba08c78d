//! Set images command implementation.

use anyhow::{Context, Result};
use clap::Args;

use brickset_core::traits::Catalog;

use crate::commands::ApiOptions;
use crate::output;

#[derive(Args, Debug)]
pub struct ImagesArgs {
    /// BrickSet internal set ID
    #[arg(long)]
    pub set_id: u32,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ImagesArgs, options: &ApiOptions) -> Result<()> {
    let client = options.client()?;

    let images = client
        .set_images(args.set_id)
        .await
        .context("Failed to fetch images")?;

    if images.is_empty() {
        output::empty("No additional images found.");
        return Ok(());
    }

    output::json_list(&images, args.pretty)?;

    Ok(())
}
