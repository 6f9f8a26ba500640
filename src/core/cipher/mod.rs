//! Authenticated encryption.
//!
//! Provides the encryption/decryption abstraction and its implementation.
//!
//! ## Backends
//!
//! - **XChaCha20-Poly1305**: Default. 256-bit key, random 192-bit nonce per
//!   message, 128-bit Poly1305 tag.
//!
//! Every backend must verify the authentication tag before returning any
//! plaintext, and must use fresh randomness per call so encrypting the same
//! plaintext twice gives different output.

use crate::core::key::Key;
use crate::error::Result;

mod xchacha;

pub use xchacha::XChaCha;

/// Authenticated symmetric encryption backend.
pub trait Cipher {
    /// Encrypt plaintext into a self-contained blob.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the key cannot be decoded.
    fn encrypt(&self, plaintext: &[u8], key: &Key) -> Result<Vec<u8>>;

    /// Verify and decrypt a blob.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MalformedBlob` if the blob is structurally
    /// invalid, `CipherError::Authentication` if the tag does not verify
    /// (wrong key or tampered data), or `CipherError::InvalidKey` if the key
    /// cannot be decoded.
    fn decrypt(&self, blob: &[u8], key: &Key) -> Result<Vec<u8>>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Encrypt with the default backend.
pub fn encrypt(plaintext: &[u8], key: &Key) -> Result<Vec<u8>> {
    XChaCha.encrypt(plaintext, key)
}

/// Decrypt with the default backend.
pub fn decrypt(blob: &[u8], key: &Key) -> Result<Vec<u8>> {
    XChaCha.decrypt(blob, key)
}
