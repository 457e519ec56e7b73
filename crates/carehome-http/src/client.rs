//! HTTP client for the token endpoint.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use carehome_core::error::{Error, NetworkError, ParseError, Rejection};
use carehome_core::{AccessToken, ApiUrl, AuthClient, Credentials, Result};

use crate::endpoints::{ACCESS_FIELD, ErrorResponse, TokenRequest};

/// Authentication client that talks to the token service over HTTPS.
///
/// Clone is cheap: `reqwest::Client` shares its connection pool internally.
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl HttpAuthClient {
    /// Create a new client for the given token service.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the TLS backend cannot be initialized.
    pub fn new(api: ApiUrl) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("carehome/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(network_error)?;

        Ok(Self { client, api })
    }

    /// Returns the token service this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    #[instrument(skip(self, credentials), fields(api = %self.api))]
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken> {
        let url = self.api.token_url();
        debug!(%url, "Requesting access token");

        let request = TokenRequest {
            username: credentials.username(),
            password: credentials.password(),
        };

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(&request)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        trace!(status = %status, "Token response");

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(rejection(status, &body).into());
        }

        let body = response.bytes().await.map_err(network_error)?;
        decode_token(&body)
    }
}

/// Decode a successful response body into the access token.
///
/// Only `access` matters; every other field, `refresh` included, is ignored.
fn decode_token(body: &[u8]) -> Result<AccessToken> {
    let value: Value = serde_json::from_slice(body).map_err(|e| ParseError::InvalidJson {
        message: e.to_string(),
    })?;

    let access = value
        .get(ACCESS_FIELD)
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingField {
            field: ACCESS_FIELD,
        })?;

    Ok(AccessToken::new(access))
}

/// Build a rejection from a non-success status, keeping the server's reason if present.
fn rejection(status: StatusCode, body: &[u8]) -> Rejection {
    let detail = serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.detail);
    Rejection::new(status.as_u16(), detail)
}

/// Map a reqwest failure onto the transport taxonomy.
fn network_error(err: reqwest::Error) -> Error {
    let message = describe(&err);
    let err = if err.is_timeout() {
        NetworkError::Timeout { message }
    } else if err.is_connect() {
        NetworkError::Connection { message }
    } else {
        NetworkError::Http { message }
    };
    Error::Network(err)
}

/// Flatten an error and its sources into one line.
fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let api = ApiUrl::new("https://carehome.example").unwrap();
        let client = HttpAuthClient::new(api.clone()).unwrap();
        assert_eq!(client.api(), &api);
    }

    #[test]
    fn decode_token_takes_access_field() {
        let token = decode_token(br#"{"access": "tok123", "refresh": "rtok456"}"#).unwrap();
        assert_eq!(token.as_str(), "tok123");
    }

    #[test]
    fn decode_token_ignores_malformed_refresh() {
        let token = decode_token(br#"{"access": "tok123", "refresh": 42}"#).unwrap();
        assert_eq!(token.as_str(), "tok123");
    }

    #[test]
    fn decode_token_rejects_non_string_access() {
        let err = decode_token(br#"{"access": 42}"#).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::MissingField { field: "access" })
        ));
    }

    #[test]
    fn decode_token_rejects_garbage() {
        let err = decode_token(b"<html>ok</html>").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::InvalidJson { .. })));
    }

    #[test]
    fn rejection_reads_detail() {
        let rejection = rejection(
            StatusCode::UNAUTHORIZED,
            br#"{"detail": "No active account found with the given credentials"}"#,
        );
        assert_eq!(rejection.status, 401);
        assert_eq!(
            rejection.detail.as_deref(),
            Some("No active account found with the given credentials")
        );
    }

    #[test]
    fn rejection_tolerates_empty_body() {
        let rejection = rejection(StatusCode::UNAUTHORIZED, b"");
        assert_eq!(rejection, Rejection::new(401, None));
    }
}
