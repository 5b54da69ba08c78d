//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Base URL of the public BrickSet v3 API.
pub const DEFAULT_API_URL: &str = "https://brickset.com/api/v3.asmx";

/// A validated BrickSet API base URL.
///
/// URLs must use HTTPS; plain HTTP is allowed only for localhost so that
/// tests can run against a local mock server.
///
/// # Example
///
/// ```
/// use brickset_core::ApiUrl;
///
/// let api = ApiUrl::default();
/// assert_eq!(api.endpoint_url("getSets"),
///            "https://brickset.com/api/v3.asmx/getSets");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the full URL for a given endpoint method.
    pub fn endpoint_url(&self, method: &str) -> String {
        // The URL crate renders root paths with a trailing slash,
        // so trim it before joining the method name.
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, method)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the URL scheme (e.g., "https", "http").
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        // Must be HTTPS (or HTTP for localhost)
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        if url.scheme() != "https" && !(url.scheme() == "http" && is_localhost) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL).expect("default API URL is valid")
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url() {
        let api = ApiUrl::default();
        assert_eq!(api.host(), Some("brickset.com"));
    }

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://localhost:8080").unwrap();
        assert_eq!(api.host(), Some("localhost"));
    }

    #[test]
    fn endpoint_url_construction() {
        let api = ApiUrl::new("https://brickset.com/api/v3.asmx").unwrap();
        assert_eq!(
            api.endpoint_url("getThemes"),
            "https://brickset.com/api/v3.asmx/getThemes"
        );
    }

    #[test]
    fn endpoint_url_with_trailing_slash() {
        let api = ApiUrl::new("http://127.0.0.1:9090/").unwrap();
        assert_eq!(
            api.endpoint_url("getSets"),
            "http://127.0.0.1:9090/getSets"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://brickset.com/api/v3.asmx").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/api/v3.asmx").is_err());
    }
}
