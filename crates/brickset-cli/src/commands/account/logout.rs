//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::commands::ApiOptions;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, _options: &ApiOptions) -> Result<()> {
    let removed = storage::clear_token().context("Failed to remove stored login")?;

    if removed {
        output::success("Logged out");
    } else {
        output::empty("No stored login.");
    }

    Ok(())
}
