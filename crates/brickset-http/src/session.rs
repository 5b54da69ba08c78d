//! Authenticated user session.

use async_trait::async_trait;
use tracing::{debug, instrument};

use brickset_core::catalog::{Minifig, MinifigNote, Set, SetNote};
use brickset_core::traits::Account;
use brickset_core::{Result, SetQuery, UserToken};

use crate::catalog::BricksetClient;
use crate::endpoints::*;

/// A session for one BrickSet user account.
///
/// Obtained from [`BricksetClient::login`], or restored from a persisted
/// token with [`UserSession::from_token`]. BrickSet user tokens do not
/// expire, so there is no refresh step.
#[derive(Clone)]
pub struct UserSession {
    client: BricksetClient,
    token: UserToken,
}

impl UserSession {
    pub(crate) fn new(client: BricksetClient, token: UserToken) -> Self {
        Self { client, token }
    }

    /// Restore a session from a persisted token.
    pub fn from_token(client: BricksetClient, token: UserToken) -> Self {
        Self::new(client, token)
    }

    /// The catalog client backing this session.
    pub fn client(&self) -> &BricksetClient {
        &self.client
    }
}

#[async_trait]
impl Account for UserSession {
    fn user_token(&self) -> &UserToken {
        &self.token
    }

    #[instrument(skip(self, query))]
    async fn search_sets(&self, query: &SetQuery, owned: bool, wanted: bool) -> Result<Vec<Set>> {
        debug!(owned, wanted, "searching user sets");
        self.client
            .search_sets_with(query, Some((owned, wanted)), self.token.as_str())
            .await
    }

    #[instrument(skip(self))]
    async fn minifigs(
        &self,
        query: Option<&str>,
        owned: bool,
        wanted: bool,
    ) -> Result<Vec<Minifig>> {
        debug!(owned, wanted, "listing user minifigs");

        let params = MinifigParams {
            query,
            owned: owned as u8,
            wanted: wanted as u8,
        };

        let form = vec![
            ("params", serde_json::to_string(&params)?),
            ("userHash", self.token.as_str().to_string()),
        ];

        let response: MinifigsResponse = self
            .client
            .api()
            .procedure(GET_MINIFIG_COLLECTION, form)
            .await?;

        Ok(response.minifigs.into_iter().map(Minifig::from).collect())
    }

    #[instrument(skip(self))]
    async fn set_notes(&self) -> Result<Vec<SetNote>> {
        let form = vec![("userHash", self.token.as_str().to_string())];

        let response: UserNotesResponse =
            self.client.api().procedure(GET_USER_NOTES, form).await?;

        Ok(response.user_notes.into_iter().map(SetNote::from).collect())
    }

    #[instrument(skip(self))]
    async fn minifig_notes(&self) -> Result<Vec<MinifigNote>> {
        let form = vec![("userHash", self.token.as_str().to_string())];

        let response: MinifigNotesResponse = self
            .client
            .api()
            .procedure(GET_USER_MINIFIG_NOTES, form)
            .await?;

        Ok(response
            .user_minifig_notes
            .into_iter()
            .map(MinifigNote::from)
            .collect())
    }
}

impl std::fmt::Debug for UserSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSession")
            .field("api", &self.client.url().as_str())
            .field("token", &"[REDACTED]")
            .finish()
    }
}
