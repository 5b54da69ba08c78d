//! User set notes command implementation.

use anyhow::{Context, Result};
use clap::Args;

use brickset_core::traits::Account;

use crate::commands::ApiOptions;
use crate::output;

use super::load_session;

#[derive(Args, Debug)]
pub struct NotesArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: NotesArgs, options: &ApiOptions) -> Result<()> {
    let session = load_session(options)?;

    let notes = session.set_notes().await.context("Failed to list notes")?;

    if notes.is_empty() {
        output::empty("No notes found.");
        return Ok(());
    }

    output::json_list(&notes, args.pretty)?;

    Ok(())
}
