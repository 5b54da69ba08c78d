//! Token storage for persisting login state.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use brickset_core::UserToken;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored login state.
#[derive(Debug, Serialize, Deserialize)]
struct StoredLogin {
    username: String,
    user_hash: String,
}

/// A login restored from disk.
#[derive(Debug)]
pub struct SavedLogin {
    pub username: String,
    pub token: UserToken,
}

/// Get the login file path.
fn login_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "brickset").context("Could not determine config directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("login.json"))
}

/// Save a login to disk.
pub fn save_token(username: &str, token: &UserToken) -> Result<()> {
    let stored = StoredLogin {
        username: username.to_string(),
        user_hash: token.as_str().to_string(),
    };

    let path = login_path()?;
    let json = serde_json::to_string_pretty(&stored)?;

    fs::write(&path, &json).context("Failed to write login file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Load the stored login from disk.
pub fn load_token() -> Result<Option<SavedLogin>> {
    let path = login_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read login file")?;
    let stored: StoredLogin = match serde_json::from_str(&json) {
        Ok(stored) => stored,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable login file");
            return Ok(None);
        }
    };

    Ok(Some(SavedLogin {
        username: stored.username,
        token: UserToken::new(stored.user_hash),
    }))
}

/// Clear the stored login.
pub fn clear_token() -> Result<bool> {
    let path = login_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove login file")?;
        return Ok(true);
    }

    Ok(false)
}
