//! Encryption key generation and transport encoding.
//!
//! Keys are 256-bit random secrets generated once per encode operation.
//! They are surfaced to the user as an opaque base64 string and are never
//! written into the carrier image.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// Key length in bytes (ChaCha20-Poly1305).
pub const KEY_SIZE: usize = 32;

/// Errors that can occur during key operations.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("Base64 decode error: {0}")]
    Base64Error(#[from] base64::DecodeError),
}

/// A symmetric encryption key.
///
/// Freshly generated per encode operation, never derived from user input.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionKey([u8; KEY_SIZE]);

impl std::fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Don't expose key material in debug output
        f.debug_tuple("EncryptionKey").field(&"[REDACTED]").finish()
    }
}

impl EncryptionKey {
    /// Generates a new random key from the OS RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Encodes the key as base64 for display and copy-paste transport.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }

    /// Decodes a key from its base64 transport form.
    pub fn from_base64(encoded: &str) -> Result<Self, KeyError> {
        let bytes = BASE64.decode(encoded.trim())?;
        let bytes: [u8; KEY_SIZE] =
            bytes
                .try_into()
                .map_err(|v: Vec<u8>| KeyError::InvalidKeyLength {
                    expected: KEY_SIZE,
                    got: v.len(),
                })?;
        Ok(Self(bytes))
    }
}
