//! OS credential store backend.

use keyring::Entry;
use tracing::{debug, warn};

use carehome_core::error::StorageError;
use carehome_core::{AccessToken, Result, TokenStore};

/// Keyring service the token is filed under.
pub const SERVICE_NAME: &str = "carehome";

/// Fixed account key for the single stored token.
pub const TOKEN_KEY: &str = "jwt_token";

/// Token store backed by the platform keyring.
pub struct KeyringTokenStore {
    entry: Entry,
}

impl KeyringTokenStore {
    /// Open the store under the default service name.
    pub fn new() -> Result<Self> {
        Self::with_service(SERVICE_NAME)
    }

    /// Open the store under a custom service name.
    pub fn with_service(service: &str) -> Result<Self> {
        let entry = Entry::new(service, TOKEN_KEY).map_err(keyring_error)?;
        Ok(Self { entry })
    }
}

impl TokenStore for KeyringTokenStore {
    fn save(&self, token: &AccessToken) -> Result<()> {
        self.entry
            .set_password(token.as_str())
            .map_err(keyring_write_error)?;
        debug!("Token written to keyring");
        Ok(())
    }

    fn get(&self) -> Option<AccessToken> {
        match self.entry.get_password() {
            Ok(token) => Some(AccessToken::new(token)),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!(error = %e, "Keyring read failed, treating token as absent");
                None
            }
        }
    }
}

impl std::fmt::Debug for KeyringTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyringTokenStore")
            .field("key", &TOKEN_KEY)
            .finish()
    }
}

fn keyring_error(err: keyring::Error) -> carehome_core::Error {
    StorageError::Keyring {
        message: err.to_string(),
    }
    .into()
}

/// A failed write reports `NoEntry` when no secure storage service is reachable.
fn keyring_write_error(err: keyring::Error) -> carehome_core::Error {
    match err {
        keyring::Error::NoEntry
        | keyring::Error::PlatformFailure(_)
        | keyring::Error::NoStorageAccess(_) => StorageError::Keyring {
            message: format!("no secure storage available to write the token ({})", err),
        }
        .into(),
        other => keyring_error(other),
    }
}
