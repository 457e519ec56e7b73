//! Single-file backend.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use carehome_core::error::StorageError;
use carehome_core::{AccessToken, Result, TokenStore};

/// File name of the token inside the data directory.
const TOKEN_FILE: &str = "access_token";

/// Token store that keeps the raw token as the entire content of one file.
///
/// Writes go to a temporary sibling that is renamed over the target, so a
/// reader sees either the old token or the new one. On Unix the file is
/// readable by its owner only.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Use the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the per-user data directory (e.g. `~/.local/share/carehome/access_token`).
    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "carehome").ok_or_else(|| {
            StorageError::Unavailable {
                message: "could not determine data directory".to_string(),
            }
        })?;
        Ok(Self::new(dirs.data_dir().join(TOKEN_FILE)))
    }

    /// Returns the path of the token file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> carehome_core::Error {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
        .into()
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, token: &AccessToken) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        // NamedTempFile is created with mode 0600 on Unix.
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(token.as_str().as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        debug!(path = %self.path.display(), "Token written to file");
        Ok(())
    }

    fn get(&self) -> Option<AccessToken> {
        match fs::read_to_string(&self.path) {
            Ok(token) => Some(AccessToken::new(token)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Token file unreadable, treating token as absent");
                None
            }
        }
    }
}
