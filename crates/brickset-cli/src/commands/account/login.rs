//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;

use brickset_core::Credentials;
use brickset_core::traits::Account;

use crate::commands::ApiOptions;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// BrickSet username or e-mail
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, options: &ApiOptions) -> Result<()> {
    let client = options.client()?;

    output::empty("Logging in...");

    let session = client
        .login(Credentials::new(&args.username, &args.password))
        .await
        .context("Failed to login")?;

    storage::save_token(&args.username, session.user_token())
        .context("Failed to save login")?;

    output::success("Logged in successfully");
    println!();
    output::field("User", &args.username);

    Ok(())
}
