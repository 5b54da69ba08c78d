//! Command implementations.

pub mod account;
pub mod sets;
pub mod themes;

use anyhow::{Context, Result};

use brickset_core::{ApiKey, ApiUrl};
use brickset_http::BricksetClient;

/// Connection options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct ApiOptions {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
}

impl ApiOptions {
    /// Build a client, failing when no API key was supplied.
    pub fn client(&self) -> Result<BricksetClient> {
        let key = self
            .api_key
            .as_deref()
            .context("No API key. Pass --api-key or set BRICKSET_API_KEY.")?;

        let client = match &self.api_url {
            Some(url) => BricksetClient::with_url(
                ApiUrl::new(url).context("Invalid API URL")?,
                ApiKey::new(key),
            ),
            None => BricksetClient::new(ApiKey::new(key)),
        };

        Ok(client)
    }
}
