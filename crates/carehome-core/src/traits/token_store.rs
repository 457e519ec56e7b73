//! Token store trait.

use std::sync::Arc;

use crate::{AccessToken, Result};

/// Local persistence for a single access token under a fixed key.
///
/// A store is either empty or holds exactly one token. `save` overwrites,
/// and nothing ever removes the token.
pub trait TokenStore: Send + Sync {
    /// Store the token, replacing any previous value.
    fn save(&self, token: &AccessToken) -> Result<()>;

    /// Returns the stored token.
    ///
    /// Storage failures are reported as `None`, the same as an empty store.
    fn get(&self) -> Option<AccessToken>;

    /// Returns true if a token is stored.
    fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn save(&self, token: &AccessToken) -> Result<()> {
        (**self).save(token)
    }

    fn get(&self) -> Option<AccessToken> {
        (**self).get()
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Box<T> {
    fn save(&self, token: &AccessToken) -> Result<()> {
        (**self).save(token)
    }

    fn get(&self) -> Option<AccessToken> {
        (**self).get()
    }
}
