//! Key file storage.
//!
//! Locates, reads, or generates the key file. A key file holds exactly one
//! key in its textual encoding and nothing else.
//!
//! There is no locking: two processes generating a key at the same path
//! race, and a reader concurrent with a writer may see a partial file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroize;

use crate::core::constants;
use crate::core::key::Key;
use crate::error::{Result, StoreError};

/// Resolves key paths and loads or creates key files.
#[derive(Debug, Clone)]
pub struct KeyStore {
    default_path: PathBuf,
}

impl KeyStore {
    /// Key store whose default key file is `default_path`.
    pub fn new(default_path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: default_path.into(),
        }
    }

    /// Key store whose default key file sits next to the running executable.
    pub fn beside_executable() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(constants::KEY_FILE))
    }

    /// The default key file location.
    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// The key file a request for `path` refers to.
    pub fn path_for(&self, path: Option<&Path>) -> PathBuf {
        path.unwrap_or(self.default_path.as_path()).to_path_buf()
    }

    /// Resolve the key for `path` (or the default location).
    ///
    /// An existing file is read verbatim with no validation; a bad key
    /// surfaces when it is used for decryption. A missing file is generated
    /// if `create_if_missing` is set. Parent directories are not created.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::KeyNotFound` if the file is missing and creation
    /// is not allowed, or `ReadFailed`/`WriteFailed` on I/O failure.
    pub fn resolve(&self, path: Option<&Path>, create_if_missing: bool) -> Result<Key> {
        let path = self.path_for(path);

        if path.exists() {
            return read_key(&path);
        }

        if !create_if_missing {
            return Err(StoreError::KeyNotFound(path).into());
        }

        create_key(&path)
    }

    /// Delete the key file for `path` (or the default location).
    ///
    /// Returns whether a file was removed. A missing file is not an error.
    pub fn remove(&self, path: Option<&Path>) -> Result<bool> {
        let path = self.path_for(path);
        remove_if_exists(&path).map_err(|source| {
            StoreError::WriteFailed {
                path: path.clone(),
                source,
            }
            .into()
        })
    }
}

fn read_key(path: &Path) -> Result<Key> {
    debug!(path = %path.display(), "reading key file");
    let mut bytes = fs::read(path).map_err(|source| StoreError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let key = Key::from_text(String::from_utf8_lossy(&bytes).into_owned());
    bytes.zeroize();
    Ok(key)
}

/// Generate a key and write it to a file that must not exist yet.
///
/// If another process wins the race to create the file, its key is used.
fn create_key(path: &Path) -> Result<Key> {
    let key = Key::generate();

    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = match options.open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return read_key(path),
        Err(source) => {
            return Err(StoreError::WriteFailed {
                path: path.to_path_buf(),
                source,
            }
            .into())
        }
    };

    file.write_all(key.as_text().as_bytes())
        .and_then(|_| file.flush())
        .map_err(|source| StoreError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), "generated key file");
    Ok(key)
}

pub(crate) fn remove_if_exists(path: &Path) -> std::io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
