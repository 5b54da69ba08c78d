//! BrickSet API endpoint definitions and wire types.
//!
//! Wire structs mirror the JSON shapes the API sends and receives; each
//! response row maps into its `brickset-core` record via `From`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use brickset_core::catalog::{
    Minifig, MinifigNote, Review, ReviewRating, Set, SetImage, SetNote, SetOwnership, Theme,
    YearCount,
};
use brickset_core::{SetQuery, Term, Years};

// ============================================================================
// Endpoint Names
// ============================================================================

pub const GET_SETS: &str = "getSets";

pub const GET_INSTRUCTIONS: &str = "getInstructions";

pub const GET_ADDITIONAL_IMAGES: &str = "getAdditionalImages";

pub const GET_REVIEWS: &str = "getReviews";

pub const GET_THEMES: &str = "getThemes";

pub const GET_SUBTHEMES: &str = "getSubthemes";

pub const GET_YEARS: &str = "getYears";

pub const LOGIN: &str = "login";

pub const CHECK_USER_HASH: &str = "checkUserHash";

pub const GET_USER_NOTES: &str = "getUserNotes";

pub const GET_MINIFIG_COLLECTION: &str = "getMinifigCollection";

pub const GET_USER_MINIFIG_NOTES: &str = "getUserMinifigNotes";

// ============================================================================
// Request Types
// ============================================================================

/// The JSON-encoded `params` block for getSets.
///
/// Unset fields are omitted; booleans go over the wire as 0/1.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<&'a str>,
    #[serde(rename = "setID", skip_serializing_if = "Option::is_none")]
    pub set_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<&'a Term>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtheme: Option<&'a Term>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<&'a Years>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wanted: Option<u8>,
    pub extended_data: u8,
    pub page_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<&'a str>,
}

impl<'a> SetParams<'a> {
    /// Build the wire params for one page of a query.
    pub fn from_query(query: &'a SetQuery, page: u32) -> Self {
        Self {
            query: query.query.as_deref(),
            set_id: query.set_id,
            set_number: query.set_number.as_ref().map(|n| n.as_str()),
            theme: query.theme.as_ref(),
            subtheme: query.subtheme.as_ref(),
            year: query.year.as_ref(),
            owned: None,
            wanted: None,
            extended_data: 1,
            page_number: page,
            page_size: query.page_size,
            order_by: query.order_by.as_deref(),
        }
    }

    /// Restrict to the owned/wanted subsets of a user's collection.
    pub fn scoped(mut self, owned: bool, wanted: bool) -> Self {
        self.owned = Some(owned as u8);
        self.wanted = Some(wanted as u8);
        self
    }
}

/// The JSON-encoded `params` block for getMinifigCollection.
#[derive(Debug, Serialize)]
pub struct MinifigParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<&'a str>,
    pub owned: u8,
    pub wanted: u8,
}

/// Query parameters for set-scoped GET endpoints.
#[derive(Debug, Serialize)]
pub struct SetIdQuery {
    #[serde(rename = "setID")]
    pub set_id: u32,
}

/// Empty query parameters.
#[derive(Debug, Serialize)]
pub struct NoParams {}

// ============================================================================
// Response Types
// ============================================================================

/// Response from getSets.
#[derive(Debug, Deserialize)]
pub struct SetsResponse {
    #[serde(default)]
    pub matches: u32,
    #[serde(default)]
    pub sets: Vec<SetRow>,
}

/// A single set row.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRow {
    #[serde(rename = "setID")]
    pub set_id: u32,
    pub number: String,
    pub number_variant: u32,
    pub name: String,
    #[serde(deserialize_with = "de::int_like")]
    pub year: u16,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub theme_group: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub subtheme: Option<String>,
    #[serde(default, deserialize_with = "de::bool_like")]
    pub released: bool,
    #[serde(default)]
    pub pieces: Option<u32>,
    #[serde(default)]
    pub minifigs: Option<u32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, rename = "bricksetURL")]
    pub brickset_url: Option<String>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image: Option<ImageRow>,
    #[serde(default)]
    pub collection: Option<CollectionRow>,
}

impl From<SetRow> for Set {
    fn from(row: SetRow) -> Self {
        Set {
            set_id: row.set_id,
            number: row.number,
            variant: row.number_variant,
            name: row.name,
            year: row.year,
            category: row.category,
            group: row.theme_group,
            theme: row.theme,
            subtheme: row.subtheme,
            released: row.released,
            image_url: row.image.and_then(|image| image.image_url),
            pieces: row.pieces,
            minifigs: row.minifigs,
            rating: row.rating,
            brickset_url: row.brickset_url,
            last_updated: row.last_updated,
            collection: row.collection.map(Into::into),
        }
    }
}

/// Image URLs as nested in set rows and getAdditionalImages.
#[derive(Debug, Deserialize)]
pub struct ImageRow {
    #[serde(default, rename = "thumbnailURL")]
    pub thumbnail_url: Option<String>,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
}

impl From<ImageRow> for SetImage {
    fn from(row: ImageRow) -> Self {
        SetImage {
            thumbnail_url: row.thumbnail_url,
            image_url: row.image_url,
        }
    }
}

/// Ownership block nested in account-scoped set rows.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRow {
    #[serde(default, deserialize_with = "de::bool_like")]
    pub owned: bool,
    #[serde(default, deserialize_with = "de::bool_like")]
    pub wanted: bool,
    #[serde(default)]
    pub qty_owned: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<CollectionRow> for SetOwnership {
    fn from(row: CollectionRow) -> Self {
        SetOwnership {
            owned: row.owned,
            wanted: row.wanted,
            qty_owned: row.qty_owned,
            notes: row.notes,
        }
    }
}

/// Response from getThemes.
#[derive(Debug, Deserialize)]
pub struct ThemesResponse {
    #[serde(default)]
    pub themes: Vec<ThemeRow>,
}

/// Response from getSubthemes.
#[derive(Debug, Deserialize)]
pub struct SubthemesResponse {
    #[serde(default)]
    pub subthemes: Vec<ThemeRow>,
}

/// A theme or sub-theme row. Year bounds arrive as strings or numbers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRow {
    pub theme: String,
    #[serde(default)]
    pub subtheme: Option<String>,
    #[serde(default)]
    pub subtheme_count: Option<u32>,
    #[serde(deserialize_with = "de::int_like")]
    pub set_count: u32,
    #[serde(deserialize_with = "de::int_like")]
    pub year_from: u16,
    #[serde(deserialize_with = "de::int_like")]
    pub year_to: u16,
}

impl From<ThemeRow> for Theme {
    fn from(row: ThemeRow) -> Self {
        // Sub-theme rows carry both names; the theme becomes the parent.
        match row.subtheme {
            Some(subtheme) => Theme {
                name: subtheme,
                parent: Some(row.theme),
                subthemes: None,
                sets: row.set_count,
                year_from: row.year_from,
                year_to: row.year_to,
            },
            None => Theme {
                name: row.theme,
                parent: None,
                subthemes: row.subtheme_count,
                sets: row.set_count,
                year_from: row.year_from,
                year_to: row.year_to,
            },
        }
    }
}

/// Response from getInstructions.
#[derive(Debug, Deserialize)]
pub struct InstructionsResponse {
    #[serde(default)]
    pub instructions: Vec<InstructionRow>,
}

/// A single instructions row.
#[derive(Debug, Deserialize)]
pub struct InstructionRow {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response from getAdditionalImages.
#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    #[serde(default, rename = "additionalImages")]
    pub additional_images: Vec<ImageRow>,
}

/// Response from getReviews.
#[derive(Debug, Deserialize)]
pub struct ReviewsResponse {
    #[serde(default)]
    pub reviews: Vec<ReviewRow>,
}

/// A single review row.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRow {
    pub author: String,
    #[serde(default)]
    pub date_posted: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub review: String,
    #[serde(default, rename = "HTML", deserialize_with = "de::bool_like")]
    pub html: bool,
    #[serde(default)]
    pub rating: RatingRow,
}

/// Per-aspect ratings nested in review rows.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRow {
    #[serde(default)]
    pub overall: u8,
    #[serde(default)]
    pub parts: u8,
    #[serde(default)]
    pub building_experience: u8,
    #[serde(default)]
    pub playability: u8,
    #[serde(default)]
    pub value_for_money: u8,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            author: row.author,
            date_posted: row.date_posted,
            title: row.title,
            review: row.review,
            html: row.html,
            rating: ReviewRating {
                overall: row.rating.overall,
                parts: row.rating.parts,
                building_experience: row.rating.building_experience,
                playability: row.rating.playability,
                value_for_money: row.rating.value_for_money,
            },
        }
    }
}

/// Response from getYears.
#[derive(Debug, Deserialize)]
pub struct YearsResponse {
    #[serde(default)]
    pub years: Vec<YearRow>,
}

/// A per-year set count row. The year arrives as a string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRow {
    pub theme: String,
    #[serde(deserialize_with = "de::int_like")]
    pub year: u16,
    #[serde(deserialize_with = "de::int_like")]
    pub set_count: u32,
}

impl From<YearRow> for YearCount {
    fn from(row: YearRow) -> Self {
        YearCount {
            theme: row.theme,
            year: row.year,
            set_count: row.set_count,
        }
    }
}

/// Response from login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub hash: Option<String>,
}

/// Response carrying only the status envelope (checkUserHash).
#[derive(Debug, Deserialize)]
pub struct StatusOnlyResponse {}

/// Response from getMinifigCollection.
#[derive(Debug, Deserialize)]
pub struct MinifigsResponse {
    #[serde(default)]
    pub minifigs: Vec<MinifigRow>,
}

/// A single minifig row.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifigRow {
    pub minifig_number: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "de::int_like")]
    pub owned_in_sets: u32,
    #[serde(default, deserialize_with = "de::int_like")]
    pub owned_loose: u32,
    #[serde(default, deserialize_with = "de::int_like")]
    pub owned_total: u32,
    #[serde(default, deserialize_with = "de::bool_like")]
    pub wanted: bool,
}

impl From<MinifigRow> for Minifig {
    fn from(row: MinifigRow) -> Self {
        Minifig {
            minifig_id: row.minifig_number,
            name: row.name,
            category: row.category,
            owned_in_sets: row.owned_in_sets,
            owned_loose: row.owned_loose,
            owned_total: row.owned_total,
            wanted: row.wanted,
        }
    }
}

/// Response from getUserNotes.
#[derive(Debug, Deserialize)]
pub struct UserNotesResponse {
    #[serde(default, rename = "userNotes")]
    pub user_notes: Vec<SetNoteRow>,
}

/// A single set note row.
#[derive(Debug, Deserialize)]
pub struct SetNoteRow {
    #[serde(rename = "setID")]
    pub set_id: u32,
    #[serde(default)]
    pub notes: String,
}

impl From<SetNoteRow> for SetNote {
    fn from(row: SetNoteRow) -> Self {
        SetNote {
            set_id: row.set_id,
            notes: row.notes,
        }
    }
}

/// Response from getUserMinifigNotes.
#[derive(Debug, Deserialize)]
pub struct MinifigNotesResponse {
    #[serde(default, rename = "userMinifigNotes")]
    pub user_minifig_notes: Vec<MinifigNoteRow>,
}

/// A single minifig note row.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifigNoteRow {
    pub minifig_number: String,
    #[serde(default)]
    pub notes: String,
}

impl From<MinifigNoteRow> for MinifigNote {
    fn from(row: MinifigNoteRow) -> Self {
        MinifigNote {
            minifig_id: row.minifig_number,
            notes: row.notes,
        }
    }
}

// ============================================================================
// Deserialization helpers
// ============================================================================

pub(crate) mod de {
    use serde::{Deserialize, Deserializer};

    /// Accepts a JSON number or a numeric string.
    ///
    /// Counts and year bounds show up as either, depending on the endpoint.
    pub fn int_like<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(serde_json::Number),
            Str(String),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Num(n) => n.to_string(),
            Raw::Str(s) => s,
        };

        text.trim().parse::<T>().map_err(serde::de::Error::custom)
    }

    /// Accepts a JSON boolean, a 0/1 number, or a "true"/"1" string.
    pub fn bool_like<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Num(i64),
            Str(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => b,
            Raw::Num(n) => n != 0,
            Raw::Str(s) => matches!(s.trim(), "1" | "true" | "True"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_params_drop_unset_fields() {
        let query = SetQuery::new().theme("The Hobbit").year(2012u16);
        let params = SetParams::from_query(&query, 1);
        let encoded = serde_json::to_value(&params).unwrap();

        assert_eq!(
            encoded,
            json!({
                "theme": "The Hobbit",
                "year": 2012,
                "extendedData": 1,
                "pageNumber": 1
            })
        );
    }

    #[test]
    fn set_params_scoped_encodes_flags_as_ints() {
        let query = SetQuery::new();
        let params = SetParams::from_query(&query, 2).scoped(true, false);
        let encoded = serde_json::to_value(&params).unwrap();

        assert_eq!(encoded["owned"], json!(1));
        assert_eq!(encoded["wanted"], json!(0));
        assert_eq!(encoded["pageNumber"], json!(2));
    }

    #[test]
    fn set_row_maps_to_set() {
        let row: SetRow = serde_json::from_value(json!({
            "setID": 26049,
            "number": "79003",
            "numberVariant": 1,
            "name": "An Unexpected Gathering",
            "year": 2012,
            "category": "Normal",
            "themeGroup": "Licensed",
            "theme": "The Hobbit",
            "subtheme": "An Unexpected Journey",
            "released": true,
            "pieces": 652,
            "image": {
                "thumbnailURL": "https://images.brickset.com/sets/small/79003-1.jpg",
                "imageURL": "https://images.brickset.com/sets/images/79003-1.jpg"
            },
            "lastUpdated": "2019-08-30T08:34:50.26Z"
        }))
        .unwrap();

        let set = Set::from(row);
        assert_eq!(set.set_id, 26049);
        assert_eq!(set.full_number(), "79003-1");
        assert_eq!(set.group.as_deref(), Some("Licensed"));
        assert_eq!(
            set.image_url.as_deref(),
            Some("https://images.brickset.com/sets/images/79003-1.jpg")
        );
        assert!(set.last_updated.is_some());
        assert!(set.collection.is_none());
    }

    #[test]
    fn set_row_maps_ownership_block() {
        let row: SetRow = serde_json::from_value(json!({
            "setID": 1,
            "number": "9752",
            "numberVariant": 1,
            "name": "RCX",
            "year": 1998,
            "released": true,
            "collection": {"owned": true, "wanted": false, "qtyOwned": 2, "notes": "boxed"}
        }))
        .unwrap();

        let set = Set::from(row);
        let collection = set.collection.unwrap();
        assert!(collection.owned);
        assert_eq!(collection.qty_owned, 2);
        assert_eq!(collection.notes.as_deref(), Some("boxed"));
    }

    #[test]
    fn theme_row_maps_top_level_theme() {
        let row: ThemeRow = serde_json::from_value(json!({
            "theme": "Technic",
            "subthemeCount": 28,
            "setCount": "1234",
            "yearFrom": "1977",
            "yearTo": 2021
        }))
        .unwrap();

        let theme = Theme::from(row);
        assert_eq!(theme.name, "Technic");
        assert!(theme.parent.is_none());
        assert_eq!(theme.subthemes, Some(28));
        assert_eq!(theme.sets, 1234);
        assert_eq!(theme.year_from, 1977);
        assert_eq!(theme.year_to, 2021);
    }

    #[test]
    fn theme_row_maps_subtheme() {
        let row: ThemeRow = serde_json::from_value(json!({
            "theme": "The Hobbit",
            "subtheme": "An Unexpected Journey",
            "setCount": 6,
            "yearFrom": 2012,
            "yearTo": 2013
        }))
        .unwrap();

        let theme = Theme::from(row);
        assert_eq!(theme.name, "An Unexpected Journey");
        assert_eq!(theme.parent.as_deref(), Some("The Hobbit"));
        assert!(theme.is_subtheme());
    }

    #[test]
    fn year_row_parses_string_year() {
        let row: YearRow = serde_json::from_value(json!({
            "theme": "The Hobbit",
            "year": "2012",
            "setCount": 6
        }))
        .unwrap();

        let count = YearCount::from(row);
        assert_eq!(count.year, 2012);
        assert_eq!(count.set_count, 6);
    }

    #[test]
    fn minifig_row_accepts_numeric_wanted() {
        let row: MinifigRow = serde_json::from_value(json!({
            "minifigNumber": "lor020",
            "name": "Jack Sparrow",
            "category": "Pirates of the Caribbean",
            "ownedInSets": 1,
            "ownedLoose": 0,
            "ownedTotal": 1,
            "wanted": 1
        }))
        .unwrap();

        let minifig = Minifig::from(row);
        assert_eq!(minifig.minifig_id, "lor020");
        assert!(minifig.wanted);
    }
}
