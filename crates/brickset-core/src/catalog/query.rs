//! Search parameters for set queries.

use serde::Serialize;

use crate::types::SetNumber;

/// Theme or sub-theme selector: a name, or one or more internal IDs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Term {
    /// Select by name (e.g. `"Technic"`).
    Name(String),
    /// Select by a single internal ID.
    Id(u32),
    /// Select by several internal IDs.
    Ids(Vec<u32>),
}

impl From<&str> for Term {
    fn from(name: &str) -> Self {
        Term::Name(name.to_string())
    }
}

impl From<String> for Term {
    fn from(name: String) -> Self {
        Term::Name(name)
    }
}

impl From<u32> for Term {
    fn from(id: u32) -> Self {
        Term::Id(id)
    }
}

impl From<Vec<u32>> for Term {
    fn from(ids: Vec<u32>) -> Self {
        Term::Ids(ids)
    }
}

/// Release year selector: one year or several.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Years {
    One(u16),
    Many(Vec<u16>),
}

impl From<u16> for Years {
    fn from(year: u16) -> Self {
        Years::One(year)
    }
}

impl From<Vec<u16>> for Years {
    fn from(years: Vec<u16>) -> Self {
        Years::Many(years)
    }
}

/// Reference to a specific set: internal ID or full set number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetRef {
    /// BrickSet internal set ID.
    Id(u32),
    /// Full set number including variant.
    Number(SetNumber),
}

impl From<u32> for SetRef {
    fn from(id: u32) -> Self {
        SetRef::Id(id)
    }
}

impl From<SetNumber> for SetRef {
    fn from(number: SetNumber) -> Self {
        SetRef::Number(number)
    }
}

/// Search parameters for set queries.
///
/// Unset fields are omitted from the encoded request entirely.
///
/// # Example
///
/// ```
/// use brickset_core::SetQuery;
///
/// let query = SetQuery::new().theme("The Hobbit").year(2012u16);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetQuery {
    /// Search term for set number, name, theme and sub-theme.
    pub query: Option<String>,
    /// BrickSet internal set ID.
    pub set_id: Option<u32>,
    /// Full set number including variant.
    pub set_number: Option<SetNumber>,
    /// Theme selector.
    pub theme: Option<Term>,
    /// Sub-theme selector.
    pub subtheme: Option<Term>,
    /// Release year selector.
    pub year: Option<Years>,
    /// Field to order results by.
    pub order_by: Option<String>,
    /// Number of results per page.
    pub page_size: Option<u32>,
}

impl SetQuery {
    /// Create an empty query matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Restrict to a BrickSet internal set ID.
    pub fn set_id(mut self, set_id: u32) -> Self {
        self.set_id = Some(set_id);
        self
    }

    /// Restrict to a full set number.
    pub fn set_number(mut self, set_number: SetNumber) -> Self {
        self.set_number = Some(set_number);
        self
    }

    /// Restrict to a theme.
    pub fn theme(mut self, theme: impl Into<Term>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Restrict to a sub-theme.
    pub fn subtheme(mut self, subtheme: impl Into<Term>) -> Self {
        self.subtheme = Some(subtheme.into());
        self
    }

    /// Restrict to release year(s).
    pub fn year(mut self, year: impl Into<Years>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Order results by the given field.
    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(field.into());
        self
    }

    /// Request a specific page size.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_serialization() {
        assert_eq!(serde_json::to_string(&Term::from("Technic")).unwrap(), "\"Technic\"");
        assert_eq!(serde_json::to_string(&Term::from(1u32)).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Term::from(vec![1, 2])).unwrap(), "[1,2]");
    }

    #[test]
    fn years_serialization() {
        assert_eq!(serde_json::to_string(&Years::from(2012u16)).unwrap(), "2012");
        assert_eq!(
            serde_json::to_string(&Years::from(vec![2012u16, 2013])).unwrap(),
            "[2012,2013]"
        );
    }

    #[test]
    fn builder_chains() {
        let query = SetQuery::new().theme("The Hobbit").year(2012u16);
        assert_eq!(query.theme, Some(Term::Name("The Hobbit".to_string())));
        assert_eq!(query.year, Some(Years::One(2012)));
        assert!(query.query.is_none());
    }
}
