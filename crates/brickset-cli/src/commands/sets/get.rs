//! Get set command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use brickset_core::traits::Catalog;
use brickset_core::{SetNumber, SetRef};

use crate::commands::ApiOptions;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Set number (variant defaults to 1)
    #[arg(long, conflicts_with = "set_id")]
    pub number: Option<String>,

    /// BrickSet internal set ID
    #[arg(long)]
    pub set_id: Option<u32>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: GetArgs, options: &ApiOptions) -> Result<()> {
    let set_ref = match (args.set_id, &args.number) {
        (Some(id), _) => SetRef::Id(id),
        (None, Some(number)) => {
            SetRef::Number(SetNumber::new(number).context("Invalid set number")?)
        }
        (None, None) => bail!("Pass --number or --set-id"),
    };

    let client = options.client()?;

    let set = client
        .get_set(&set_ref)
        .await
        .context("Failed to fetch set")?;

    match set {
        Some(set) => {
            if args.pretty {
                output::json_pretty(&set)?;
            } else {
                output::json(&set)?;
            }
        }
        None => output::empty("Set not found."),
    }

    Ok(())
}
