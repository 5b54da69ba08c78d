//! Catalog records mapped from API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::instructions;

/// A LEGO set from the BrickSet catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    /// BrickSet internal set ID.
    pub set_id: u32,
    /// Base set number without variant.
    pub number: String,
    /// Variant of the set number.
    pub variant: u32,
    /// Set name.
    pub name: String,
    /// Release year.
    pub year: u16,
    /// Catalog category (e.g. "Normal", "Gear").
    pub category: Option<String>,
    /// Theme group (e.g. "Licensed").
    pub group: Option<String>,
    /// Theme name.
    pub theme: Option<String>,
    /// Sub-theme name.
    pub subtheme: Option<String>,
    /// Whether the set has been released.
    pub released: bool,
    /// URL of the main set image.
    pub image_url: Option<String>,
    /// Piece count.
    pub pieces: Option<u32>,
    /// Number of minifigs included.
    pub minifigs: Option<u32>,
    /// Community rating (0-5).
    pub rating: Option<f64>,
    /// URL of the set's page on brickset.com.
    pub brickset_url: Option<String>,
    /// When the catalog entry was last updated.
    pub last_updated: Option<DateTime<Utc>>,
    /// Ownership data, present on account-scoped queries.
    pub collection: Option<SetOwnership>,
}

impl Set {
    /// Full set number including the variant suffix.
    pub fn full_number(&self) -> String {
        format!("{}-{}", self.number, self.variant)
    }
}

/// Per-user ownership data attached to a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetOwnership {
    /// Whether the user owns the set.
    pub owned: bool,
    /// Whether the user wants the set.
    pub wanted: bool,
    /// How many copies the user owns.
    pub qty_owned: u32,
    /// The user's free-text note on the set.
    pub notes: Option<String>,
}

/// A theme or sub-theme, with set counts and year span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme (or sub-theme) name.
    pub name: String,
    /// Parent theme name; set for sub-themes only.
    pub parent: Option<String>,
    /// Number of sub-themes; top-level themes only.
    pub subthemes: Option<u32>,
    /// Number of sets in the theme.
    pub sets: u32,
    /// First year the theme released sets.
    pub year_from: u16,
    /// Last year the theme released sets.
    pub year_to: u16,
}

impl Theme {
    /// Whether this entry is a sub-theme.
    pub fn is_subtheme(&self) -> bool {
        self.parent.is_some()
    }
}

/// Building instructions for a set.
///
/// `version`, `part` and `parts` are derived from the free-text
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructions {
    /// Raw description text, as delivered by the API.
    pub description: Option<String>,
    /// Download URL.
    pub url: String,
    /// Version tag (e.g. `"V29"`), or a region code for entries
    /// that carry one instead.
    pub version: Option<String>,
    /// Booklet index within the set.
    pub part: Option<u32>,
    /// Total number of booklets in the set.
    pub parts: Option<u32>,
}

impl Instructions {
    /// Build from the raw description and URL, deriving the version and
    /// part fields from the description text.
    pub fn from_description(description: Option<String>, url: String) -> Self {
        let parsed = description
            .as_deref()
            .map(instructions::parse)
            .unwrap_or_default();

        Self {
            description,
            url,
            version: parsed.version,
            part: parsed.part,
            parts: parsed.parts,
        }
    }
}

/// A minifig with per-user ownership counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minifig {
    /// BrickSet minifig number (e.g. `"hp150"`).
    pub minifig_id: String,
    /// Minifig name.
    pub name: Option<String>,
    /// Minifig category.
    pub category: Option<String>,
    /// Copies owned through sets.
    pub owned_in_sets: u32,
    /// Copies owned loose.
    pub owned_loose: u32,
    /// Total copies owned.
    pub owned_total: u32,
    /// Whether the user wants this minifig.
    pub wanted: bool,
}

/// Additional image URLs for a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetImage {
    /// Thumbnail image URL.
    pub thumbnail_url: Option<String>,
    /// Full-size image URL.
    pub image_url: Option<String>,
}

/// A user review of a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Review author.
    pub author: String,
    /// When the review was posted.
    pub date_posted: Option<DateTime<Utc>>,
    /// Review title.
    pub title: String,
    /// Review body.
    pub review: String,
    /// Whether the body contains HTML markup.
    pub html: bool,
    /// Per-aspect ratings.
    pub rating: ReviewRating,
}

/// Per-aspect review ratings (1-5).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRating {
    pub overall: u8,
    pub parts: u8,
    pub building_experience: u8,
    pub playability: u8,
    pub value_for_money: u8,
}

/// Number of sets a theme released in a given year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    /// Theme name.
    pub theme: String,
    /// Release year.
    pub year: u16,
    /// Number of sets released that year.
    pub set_count: u32,
}

/// A free-text note a user attached to a set in their collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetNote {
    /// BrickSet internal set ID.
    pub set_id: u32,
    /// The note text.
    pub notes: String,
}

/// A free-text note a user attached to a minifig in their collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinifigNote {
    /// BrickSet minifig number.
    pub minifig_id: String,
    /// The note text.
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_number_includes_variant() {
        let set = Set {
            set_id: 26049,
            number: "79003".to_string(),
            variant: 1,
            name: "An Unexpected Gathering".to_string(),
            year: 2012,
            category: Some("Normal".to_string()),
            group: Some("Licensed".to_string()),
            theme: Some("The Hobbit".to_string()),
            subtheme: Some("An Unexpected Journey".to_string()),
            released: true,
            image_url: None,
            pieces: Some(652),
            minifigs: Some(6),
            rating: None,
            brickset_url: None,
            last_updated: None,
            collection: None,
        };
        assert_eq!(set.full_number(), "79003-1");
    }

    #[test]
    fn instructions_derive_fields_from_description() {
        let instructions = Instructions::from_description(
            Some("BI 3004/60 - 79003 V29 1/2".to_string()),
            "https://example.com/79003.pdf".to_string(),
        );
        assert_eq!(instructions.version.as_deref(), Some("V29"));
        assert_eq!(instructions.part, Some(1));
        assert_eq!(instructions.parts, Some(2));
    }

    #[test]
    fn instructions_without_description() {
        let instructions =
            Instructions::from_description(None, "https://example.com/x.pdf".to_string());
        assert!(instructions.version.is_none());
        assert!(instructions.part.is_none());
        assert!(instructions.parts.is_none());
    }
}
