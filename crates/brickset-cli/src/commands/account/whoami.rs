//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::commands::ApiOptions;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs, options: &ApiOptions) -> Result<()> {
    let stored = storage::load_token()
        .context("Failed to load stored login")?
        .context("No active login. Run 'brickset account login' first.")?;

    let client = options.client()?;

    client
        .check_token(&stored.token)
        .await
        .context("Stored token was rejected; log in again")?;

    output::field("User", &stored.username);
    output::success("Token is valid");

    Ok(())
}
