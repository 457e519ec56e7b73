//! Token store selection.

use anyhow::{Context, Result, bail};

use carehome_core::TokenStore;
use carehome_store::{FileTokenStore, KeyringTokenStore};

use crate::cli::{StoreArgs, StoreKind};

/// Open the token store selected on the command line.
pub fn open(args: &StoreArgs) -> Result<Box<dyn TokenStore>> {
    match args.kind {
        StoreKind::Keyring => {
            if args.token_file.is_some() {
                bail!("--token-file requires --store file");
            }
            let store = KeyringTokenStore::new().context("Failed to open keyring")?;
            Ok(Box::new(store))
        }
        StoreKind::File => {
            let store = match &args.token_file {
                Some(path) => FileTokenStore::new(path),
                None => FileTokenStore::default_location()
                    .context("Failed to locate token file")?,
            };
            tracing::debug!(path = %store.path().display(), "Using file token store");
            Ok(Box::new(store))
        }
    }
}
