//! Set number type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A full BrickSet set number, including the variant suffix.
///
/// BrickSet identifies sets by a base number plus a variant
/// (`"79003-1"`). A number given without a variant gets the default
/// variant `1` appended.
///
/// # Example
///
/// ```
/// use brickset_core::SetNumber;
///
/// let number = SetNumber::new("79003").unwrap();
/// assert_eq!(number.as_str(), "79003-1");
///
/// let number = SetNumber::new("10179-2").unwrap();
/// assert_eq!(number.base(), "10179");
/// assert_eq!(number.variant(), "2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SetNumber(String);

impl SetNumber {
    /// Create a set number from a string, appending the default variant
    /// suffix when absent.
    ///
    /// # Errors
    ///
    /// Returns an error for empty input or embedded whitespace.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();

        if s.is_empty() {
            return Err(InvalidInputError::SetNumber {
                value: s.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidInputError::SetNumber {
                value: s.to_string(),
                reason: "must not contain whitespace".to_string(),
            }
            .into());
        }

        match s.split_once('-') {
            None => Ok(Self(format!("{}-1", s))),
            Some((base, variant)) if !base.is_empty() && !variant.is_empty() => {
                Ok(Self(s.to_string()))
            }
            Some(_) => Err(InvalidInputError::SetNumber {
                value: s.to_string(),
                reason: "variant suffix must be '<number>-<variant>'".to_string(),
            }
            .into()),
        }
    }

    /// Create a set number from a bare numeric, with the default variant.
    pub fn from_number(number: u32) -> Self {
        Self(format!("{}-1", number))
    }

    /// Returns the full number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the base number without the variant suffix.
    pub fn base(&self) -> &str {
        self.0.split_once('-').map(|(base, _)| base).unwrap_or(&self.0)
    }

    /// Returns the variant suffix.
    pub fn variant(&self) -> &str {
        self.0.split_once('-').map(|(_, variant)| variant).unwrap_or("1")
    }
}

impl fmt::Display for SetNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SetNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<u32> for SetNumber {
    fn from(number: u32) -> Self {
        Self::from_number(number)
    }
}

impl Serialize for SetNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SetNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SetNumber::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for SetNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
