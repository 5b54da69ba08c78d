//! Account subcommand implementations.

mod login;
mod logout;
mod minifig_notes;
mod minifigs;
mod notes;
mod sets;
mod whoami;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use brickset_http::UserSession;

use super::ApiOptions;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct AccountCommand {
    #[command(subcommand)]
    pub command: AccountSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AccountSubcommand {
    /// Log in and store the user token
    Login(login::LoginArgs),

    /// Display and validate the stored login
    Whoami(whoami::WhoamiArgs),

    /// Remove the stored login
    Logout(logout::LogoutArgs),

    /// Search sets in the user's collection
    Sets(sets::SetsArgs),

    /// List minifigs in the user's collection
    Minifigs(minifigs::MinifigsArgs),

    /// List the user's set notes
    Notes(notes::NotesArgs),

    /// List the user's minifig notes
    MinifigNotes(minifig_notes::MinifigNotesArgs),
}

pub async fn handle(cmd: AccountCommand, options: &ApiOptions) -> Result<()> {
    match cmd.command {
        AccountSubcommand::Login(args) => login::run(args, options).await,
        AccountSubcommand::Whoami(args) => whoami::run(args, options).await,
        AccountSubcommand::Logout(args) => logout::run(args, options).await,
        AccountSubcommand::Sets(args) => sets::run(args, options).await,
        AccountSubcommand::Minifigs(args) => minifigs::run(args, options).await,
        AccountSubcommand::Notes(args) => notes::run(args, options).await,
        AccountSubcommand::MinifigNotes(args) => minifig_notes::run(args, options).await,
    }
}

/// Restore a session from the stored token.
fn load_session(options: &ApiOptions) -> Result<UserSession> {
    let stored = storage::load_token()
        .context("Failed to load stored login")?
        .context("No active login. Run 'brickset account login' first.")?;

    Ok(UserSession::from_token(options.client()?, stored.token))
}
