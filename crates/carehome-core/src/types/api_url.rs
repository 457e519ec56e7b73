//! Token service base URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// The token service every build talks to unless told otherwise.
pub const DEFAULT_API_URL: &str = "https://s298845-dissertation-project-on-carehome.onrender.com";

/// Path of the token-issuing endpoint, relative to the base URL.
const TOKEN_PATH: &str = "api/token/";

/// A validated base URL for the token service.
///
/// HTTPS is required; plain HTTP is accepted only for loopback hosts so the
/// client can be pointed at a local server during development.
///
/// # Example
///
/// ```
/// use carehome_core::ApiUrl;
///
/// let api = ApiUrl::new("https://carehome.example/").unwrap();
/// assert_eq!(api.token_url(), "https://carehome.example/api/token/");
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

    /// Returns the full URL of the token endpoint.
    pub fn token_url(&self) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, TOKEN_PATH)
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if url.cannot_be_a_base() {
            return Err(invalid("must be an absolute URL"));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("must not carry a query or fragment"));
        }

        let is_loopback = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        let scheme = url.scheme();
        if scheme != "https" && !(scheme == "http" && is_loopback) {
            return Err(invalid("must use HTTPS (HTTP allowed only for localhost)"));
        }

        if url.host_str().is_none() {
            return Err(invalid("must have a host"));
        }

        Ok(())
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        match Url::parse(DEFAULT_API_URL) {
            Ok(url) => Self(url),
            Err(e) => unreachable!("DEFAULT_API_URL is not a valid URL: {e}"),
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_hosted_service() {
        let api = ApiUrl::default();
        assert_eq!(
            api.token_url(),
            "https://s298845-dissertation-project-on-carehome.onrender.com/api/token/"
        );
    }

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://127.0.0.1:8000").unwrap();
        assert_eq!(api.token_url(), "http://127.0.0.1:8000/api/token/");
    }

    #[test]
    fn keeps_base_path_prefix() {
        let api = ApiUrl::new("https://carehome.example/backend/").unwrap();
        assert_eq!(api.token_url(), "https://carehome.example/backend/api/token/");
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://carehome.example").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/api/token/").is_err());
    }

    #[test]
    fn parses_from_str() {
        let api: ApiUrl = "https://carehome.example".parse().unwrap();
        assert_eq!(api.to_string(), "https://carehome.example/");
        assert!("ftp://carehome.example".parse::<ApiUrl>().is_err());
    }

    #[test]
    fn rejects_query_string() {
        assert!(ApiUrl::new("https://carehome.example/?debug=1").is_err());
    }
}
