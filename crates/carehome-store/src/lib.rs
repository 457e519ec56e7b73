//! carehome-store - Access token storage backends.
//!
//! Every backend keeps at most one token under a fixed key:
//!
//! - [`KeyringTokenStore`]: the OS credential store (Keychain, Credential
//!   Manager, kernel keyring). Secure at rest; the default.
//! - [`FileTokenStore`]: a single owner-only file in the user data directory.
//! - [`MemoryTokenStore`]: process-local, for tests and throwaway sessions.

mod file;
mod keychain;
mod memory;

pub use file::FileTokenStore;
pub use keychain::{KeyringTokenStore, SERVICE_NAME, TOKEN_KEY};
pub use memory::MemoryTokenStore;
