//! Login flow: authenticate, then persist.
//!
//! [`LoginFlow`] is what a login screen drives. It owns an [`AuthClient`]
//! and a [`TokenStore`], and writes the token only after a successful
//! response. Attempts are serialized: a second call waits until the first
//! has finished both its request and its write.

use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::{AccessToken, AuthClient, Credentials, Result, TokenStore};

/// Drives login attempts against an injected client and store.
pub struct LoginFlow<C, S> {
    client: C,
    store: S,
    in_flight: Mutex<()>,
}

impl<C, S> LoginFlow<C, S>
where
    C: AuthClient,
    S: TokenStore,
{
    /// Create a flow over the given client and store.
    pub fn new(client: C, store: S) -> Self {
        Self {
            client,
            store,
            in_flight: Mutex::new(()),
        }
    }

    /// Returns the store this flow writes to.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Authenticate and, on success, persist the issued token.
    ///
    /// On any failure the store is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged, or [`crate::Error::Storage`] if
    /// the token was issued but could not be saved.
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn login(&self, credentials: Credentials) -> Result<AccessToken> {
        let _guard = self.in_flight.lock().await;
        debug!("Starting login attempt");

        let token = match self.client.login(&credentials).await {
            Ok(token) => token,
            Err(e) => {
                debug!(error = %e, "Login rejected");
                return Err(e);
            }
        };

        if let Err(e) = self.store.save(&token) {
            warn!(error = %e, "Token issued but not stored");
            return Err(e);
        }

        info!("Access token stored");
        Ok(token)
    }

    /// Returns the token currently held by the store.
    pub fn current_token(&self) -> Option<AccessToken> {
        self.store.get()
    }
}

impl<C, S> std::fmt::Debug for LoginFlow<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginFlow").finish_non_exhaustive()
    }
}
