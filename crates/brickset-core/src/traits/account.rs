//! Account trait.

use async_trait::async_trait;

use crate::catalog::{Minifig, MinifigNote, Set, SetNote, SetQuery};
use crate::tokens::UserToken;
use crate::Result;

/// Access to one user's collection data.
///
/// Implementations hold the user token obtained from login.
#[async_trait]
pub trait Account: Send + Sync {
    /// Returns the user token backing this session.
    fn user_token(&self) -> &UserToken;

    /// Search the user's sets; `owned`/`wanted` restrict the results to
    /// those subsets of the collection.
    async fn search_sets(&self, query: &SetQuery, owned: bool, wanted: bool) -> Result<Vec<Set>>;

    /// List minifigs in the user's collection.
    async fn minifigs(
        &self,
        query: Option<&str>,
        owned: bool,
        wanted: bool,
    ) -> Result<Vec<Minifig>>;

    /// List the user's set notes.
    async fn set_notes(&self) -> Result<Vec<SetNote>>;

    /// List the user's minifig notes.
    async fn minifig_notes(&self) -> Result<Vec<MinifigNote>>;
}
