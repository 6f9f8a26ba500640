//! XChaCha20-Poly1305 backend.
//!
//! Blob format (binary):
//! ```text
//! [24 bytes: random nonce][N bytes: ciphertext][16 bytes: Poly1305 tag]
//! ```
//!
//! The nonce is an input to the keystream and the tag covers the
//! ciphertext, so a change to any byte of a blob fails authentication.

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    Key as AeadKey, XChaCha20Poly1305, XNonce,
};
use rand::RngCore;
use tracing::trace;

use super::Cipher;
use crate::core::constants::{NONCE_SIZE, TAG_SIZE};
use crate::core::key::Key;
use crate::error::{CipherError, Result};

/// XChaCha20-Poly1305 with a random nonce per message.
pub struct XChaCha;

impl XChaCha {
    /// Smallest valid blob: nonce and tag around an empty message.
    pub const MIN_BLOB_LEN: usize = NONCE_SIZE + TAG_SIZE;
}

impl Cipher for XChaCha {
    fn name(&self) -> &'static str {
        "xchacha20poly1305"
    }

    fn encrypt(&self, plaintext: &[u8], key: &Key) -> Result<Vec<u8>> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let key_bytes = key.to_bytes()?;
        let cipher = XChaCha20Poly1305::new(AeadKey::from_slice(&key_bytes[..]));

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = XNonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let mut blob = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&ciphertext);

        trace!(blob_len = blob.len(), "encrypted");
        Ok(blob)
    }

    fn decrypt(&self, blob: &[u8], key: &Key) -> Result<Vec<u8>> {
        trace!(blob_len = blob.len(), "decrypting");

        if blob.len() < Self::MIN_BLOB_LEN {
            return Err(CipherError::MalformedBlob(format!(
                "{} bytes (minimum {})",
                blob.len(),
                Self::MIN_BLOB_LEN
            ))
            .into());
        }

        let key_bytes = key.to_bytes()?;
        let cipher = XChaCha20Poly1305::new(AeadKey::from_slice(&key_bytes[..]));

        let (nonce_bytes, ciphertext) = blob.split_at(NONCE_SIZE);
        let nonce = XNonce::from_slice(nonce_bytes);

        let plaintext = cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| CipherError::Authentication)?;

        trace!(plaintext_len = plaintext.len(), "decrypted");
        Ok(plaintext)
    }
}
