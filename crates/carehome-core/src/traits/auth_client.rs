//! Authentication client trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{AccessToken, Credentials, Result};

/// Exchanges credentials for an access token.
///
/// Implementations issue exactly one request per call and never retry.
/// They do not persist the token; that is the caller's job.
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Authenticate and return the issued access token.
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken>;
}

#[async_trait]
impl<T: AuthClient + ?Sized> AuthClient for Arc<T> {
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken> {
        (**self).login(credentials).await
    }
}

#[async_trait]
impl<T: AuthClient + ?Sized> AuthClient for Box<T> {
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken> {
        (**self).login(credentials).await
    }
}
