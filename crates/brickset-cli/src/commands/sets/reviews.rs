//! Set reviews command implementation.

use anyhow::{Context, Result};
use clap::Args;

use brickset_core::traits::Catalog;

use crate::commands::ApiOptions;
use crate::output;

#[derive(Args, Debug)]
pub struct ReviewsArgs {
    /// BrickSet internal set ID
    #[arg(long)]
    pub set_id: u32,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ReviewsArgs, options: &ApiOptions) -> Result<()> {
    let client = options.client()?;

    let reviews = client
        .set_reviews(args.set_id)
        .await
        .context("Failed to fetch reviews")?;

    if reviews.is_empty() {
        output::empty("No reviews found.");
        return Ok(());
    }

    output::json_list(&reviews, args.pretty)?;
    output::count("Total", reviews.len());

    Ok(())
}
