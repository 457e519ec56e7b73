//! Token endpoint request/response types.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/token/`.
///
/// Exactly two fields go on the wire. No `Debug` so the password cannot
/// end up in a log line.
#[derive(Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Field of a successful response that carries the access token.
///
/// The service also sends `refresh`; it is never read.
pub(crate) const ACCESS_FIELD: &str = "access";

/// Error body the token service sends with a rejection.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
}
