//! Symmetric key type.
//!
//! A key is stored as URL-safe base64 text (44 characters for 32 bytes).
//! The text is kept as read from the key file and only decoded when the
//! cipher needs the raw bytes.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use rand::RngCore;
use zeroize::{Zeroize, Zeroizing};

use crate::core::constants::KEY_SIZE;
use crate::error::{CipherError, Result};

/// A symmetric encryption key in its textual encoding. Zeroized on drop.
#[derive(Clone)]
pub struct Key {
    text: Zeroizing<String>,
}

impl Key {
    /// Generate a fresh random key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        rand::thread_rng().fill_bytes(&mut bytes);
        let text = URL_SAFE.encode(bytes);
        bytes.zeroize();
        Self {
            text: Zeroizing::new(text),
        }
    }

    /// Wrap key text without checking it.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Zeroizing::new(text.into()),
        }
    }

    /// The textual encoding, as written to a key file.
    pub fn as_text(&self) -> &str {
        &self.text
    }

    /// Decode into raw key bytes.
    ///
    /// Surrounding whitespace is ignored so a trailing newline in a
    /// hand-edited key file still works.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the text is not URL-safe base64
    /// of exactly 32 bytes.
    pub fn to_bytes(&self) -> Result<Zeroizing<[u8; KEY_SIZE]>> {
        let decoded = Zeroizing::new(
            URL_SAFE
                .decode(self.text.trim())
                .map_err(|e| CipherError::InvalidKey(format!("not url-safe base64: {}", e)))?,
        );

        if decoded.len() != KEY_SIZE {
            return Err(CipherError::InvalidKey(format!(
                "expected {} bytes, got {}",
                KEY_SIZE,
                decoded.len()
            ))
            .into());
        }

        let mut bytes = Zeroizing::new([0u8; KEY_SIZE]);
        bytes.copy_from_slice(&decoded);
        Ok(bytes)
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key").field("text", &"[REDACTED]").finish()
    }
}
