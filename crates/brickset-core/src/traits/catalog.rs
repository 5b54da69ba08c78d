//! Catalog trait.

use async_trait::async_trait;

use crate::catalog::{Instructions, Review, Set, SetImage, SetQuery, SetRef, Theme, YearCount};
use crate::Result;

/// Read access to the BrickSet catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Search sets, following pagination until every reported match has
    /// been returned.
    async fn search_sets(&self, query: &SetQuery) -> Result<Vec<Set>>;

    /// Fetch a single set, or `None` when nothing matches.
    async fn get_set(&self, set: &SetRef) -> Result<Option<Set>>;

    /// List building instructions for a set.
    ///
    /// A set number is resolved to the internal set ID first; an unknown
    /// set yields an empty list.
    async fn set_instructions(&self, set: &SetRef) -> Result<Vec<Instructions>>;

    /// List additional image URLs for a set.
    async fn set_images(&self, set_id: u32) -> Result<Vec<SetImage>>;

    /// List user reviews for a set.
    async fn set_reviews(&self, set_id: u32) -> Result<Vec<Review>>;

    /// List all themes, with the total number of sets in each.
    async fn themes(&self) -> Result<Vec<Theme>>;

    /// List sub-themes of a theme, with the total number of sets in each.
    async fn subthemes(&self, theme: &str) -> Result<Vec<Theme>>;

    /// List per-year set counts, optionally limited to a theme.
    async fn theme_years(&self, theme: Option<&str>) -> Result<Vec<YearCount>>;
}
