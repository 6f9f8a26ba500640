//! Encrypted env file operations.
//!
//! Each operation resolves the key through the [`KeyStore`], converts
//! between [`EnvDocument`] and bytes, and runs the cipher.
//!
//! Writes go straight to the destination path. A failure mid-write can
//! leave a partial file, and concurrent writers to one path race with the
//! last writer winning.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::cipher;
use crate::core::env::{self, EnvDocument};
use crate::core::key::Key;
use crate::core::store::{self, KeyStore};
use crate::error::{EnvError, Error, Result};

/// Files removed by [`Pipeline::clear`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cleared {
    /// Whether the encrypted env file was removed
    pub encrypted: bool,
    /// Whether the key file was removed
    pub key: bool,
}

/// Encrypt, decrypt, load and save env files with one key.
#[derive(Debug, Clone)]
pub struct Pipeline {
    store: KeyStore,
    key_path: Option<PathBuf>,
}

impl Pipeline {
    /// Create a pipeline using `key_path`, or the store's default key file.
    pub fn new(store: KeyStore, key_path: Option<PathBuf>) -> Self {
        Self { store, key_path }
    }

    /// The key file this pipeline reads or creates.
    pub fn key_path(&self) -> PathBuf {
        self.store.path_for(self.key_path.as_deref())
    }

    fn key(&self, create_if_missing: bool) -> Result<Key> {
        self.store
            .resolve(self.key_path.as_deref(), create_if_missing)
    }

    /// Encrypt a plaintext .env file.
    ///
    /// The source is parsed and re-serialized, so comments, quoting and
    /// blank lines are not carried into the encrypted file. The key is
    /// generated if missing. `dest` is overwritten.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::MissingSourceFile` if `source` does not exist.
    pub fn encrypt_file(&self, source: &Path, dest: &Path) -> Result<EnvDocument> {
        debug!(source = %source.display(), dest = %dest.display(), "encrypting file");

        let doc = EnvDocument::load(source)?;
        let key = self.key(true)?;
        let blob = cipher::encrypt(&env::serialize(&doc), &key)?;
        write_private(dest, &blob)?;

        debug!(variables = doc.len(), "encrypted file written");
        Ok(doc)
    }

    /// Decrypt an encrypted env file and write the plaintext to `dest`.
    ///
    /// The key must already exist. Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::KeyNotFound` if there is no key file,
    /// `EnvError::MissingSourceFile` if `encrypted` does not exist, or a
    /// `CipherError` if the data does not decrypt.
    pub fn decrypt_file(&self, encrypted: &Path, dest: &Path) -> Result<usize> {
        debug!(source = %encrypted.display(), dest = %dest.display(), "decrypting file");

        let plaintext = self.decrypt_bytes(encrypted)?;
        write_private(dest, &plaintext)?;

        Ok(plaintext.len())
    }

    /// Decrypt and parse an encrypted env file without touching the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Pipeline::decrypt_file`], plus `EnvError::NotUtf8` if the
    /// plaintext is not UTF-8.
    pub fn load(&self, encrypted: &Path) -> Result<EnvDocument> {
        debug!(source = %encrypted.display(), "loading encrypted file");

        let plaintext = self.decrypt_bytes(encrypted)?;
        env::deserialize(&plaintext)
    }

    /// Decrypt an encrypted env file and set every variable in the current
    /// process environment, replacing existing values.
    ///
    /// Nothing is set unless the whole file decrypts and parses and every
    /// entry can be stored in the environment.
    ///
    /// # Errors
    ///
    /// Same as [`Pipeline::load`], plus `EnvError::InvalidVariable` if a name
    /// is empty or contains `=` or NUL, or a value contains NUL.
    pub fn load_into_env(&self, encrypted: &Path) -> Result<EnvDocument> {
        let doc = self.load(encrypted)?;

        if let Some((name, _)) = doc.iter().find(|(name, value)| !settable(name, value)) {
            return Err(EnvError::InvalidVariable(name.to_string()).into());
        }

        for (name, value) in doc.iter() {
            std::env::set_var(name, value);
        }

        debug!(variables = doc.len(), "applied to process environment");
        Ok(doc)
    }

    /// Encrypt the current values of `names` from the process environment.
    ///
    /// Variables keep the order they are given in. Every name is looked up
    /// before the key is resolved, so a missing variable leaves `dest` and
    /// the key file untouched.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::UndefinedVariable` if any name is not set.
    pub fn save_vars<S: AsRef<str>>(&self, names: &[S], dest: &Path) -> Result<EnvDocument> {
        debug!(variables = names.len(), dest = %dest.display(), "saving variables");

        let doc = names
            .iter()
            .map(|name| -> Result<(String, String)> {
                let name = name.as_ref();
                match std::env::var(name) {
                    Ok(value) => Ok((name.to_string(), value)),
                    Err(std::env::VarError::NotPresent) => {
                        Err(EnvError::UndefinedVariable(name.to_string()).into())
                    }
                    Err(std::env::VarError::NotUnicode(_)) => {
                        Err(EnvError::NotUnicode(name.to_string()).into())
                    }
                }
            })
            .collect::<Result<EnvDocument>>()?;

        let key = self.key(true)?;
        let blob = cipher::encrypt(&env::serialize(&doc), &key)?;
        write_private(dest, &blob)?;

        Ok(doc)
    }

    /// Delete the encrypted env file (if given) and the key file.
    ///
    /// Missing files are skipped, so clearing twice succeeds.
    pub fn clear(&self, encrypted: Option<&Path>) -> Result<Cleared> {
        let mut cleared = Cleared::default();

        if let Some(path) = encrypted {
            cleared.encrypted = store::remove_if_exists(path)?;
            debug!(path = %path.display(), removed = cleared.encrypted, "cleared encrypted file");
        }

        cleared.key = self.store.remove(self.key_path.as_deref())?;
        debug!(path = %self.key_path().display(), removed = cleared.key, "cleared key file");

        Ok(cleared)
    }

    fn decrypt_bytes(&self, encrypted: &Path) -> Result<Vec<u8>> {
        let blob = read_source(encrypted)?;
        let key = self.key(false)?;
        cipher::decrypt(&blob, &key)
    }
}

/// Whether `std::env::set_var` accepts this pair without panicking.
fn settable(name: &str, value: &str) -> bool {
    !name.is_empty() && !name.contains(['=', '\0']) && !value.contains('\0')
}

fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EnvError::MissingSourceFile(path.to_path_buf()).into(),
        _ => Error::Io(e),
    })
}

/// Write `contents` to `path`, truncating, with owner-only permissions on Unix.
fn write_private(path: &Path, contents: &[u8]) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(contents)?;
        file.flush()?;

        // Ensure secure permissions even when overwriting an existing file.
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        let mut file = fs::File::create(path)?;
        file.write_all(contents)?;
        file.flush()?;
    }

    Ok(())
}
