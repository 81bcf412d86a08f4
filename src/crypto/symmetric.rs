//! Authenticated symmetric encryption with ChaCha20-Poly1305.
//!
//! The ciphertext is self-contained: a random nonce is prepended, and the
//! Poly1305 tag rejects wrong keys and tampered or truncated data before
//! any plaintext is released.

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

use crate::crypto::keys::EncryptionKey;

/// Nonce size for ChaCha20Poly1305.
const NONCE_SIZE: usize = 12;

/// Poly1305 authentication tag size.
const TAG_SIZE: usize = 16;

/// Errors that can occur during symmetric encryption.
#[derive(Error, Debug)]
pub enum SymmetricError {
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Authentication failed: wrong key or corrupted ciphertext")]
    AuthenticationFailed,

    #[error("Invalid ciphertext: too short")]
    CiphertextTooShort,

    #[error("Decrypted payload is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Encrypts a message with authenticated encryption.
///
/// The output format is: nonce (12 bytes) || ciphertext (variable, includes auth tag)
pub fn encrypt(message: &str, key: &EncryptionKey) -> Result<Vec<u8>, SymmetricError> {
    // Generate random nonce
    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let cipher = ChaCha20Poly1305::new_from_slice(key.as_bytes())
        .map_err(|e| SymmetricError::EncryptionFailed(e.to_string()))?;

    let ciphertext = cipher
        .encrypt(nonce, message.as_bytes())
        .map_err(|e| SymmetricError::EncryptionFailed(e.to_string()))?;

    // Prepend nonce to ciphertext
    let mut result = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    result.extend_from_slice(&nonce_bytes);
    result.extend_from_slice(&ciphertext);

    Ok(result)
}

/// Decrypts a message produced by [`encrypt`].
///
/// Expects input format: nonce (12 bytes) || ciphertext (variable, includes auth tag)
///
/// Fails with [`SymmetricError::AuthenticationFailed`] when the key is wrong
/// or the ciphertext has been altered or truncated. No partial plaintext is
/// ever returned.
pub fn decrypt(data: &[u8], key: &EncryptionKey) -> Result<String, SymmetricError> {
    if data.len() < NONCE_SIZE + TAG_SIZE {
        return Err(SymmetricError::CiphertextTooShort);
    }

    let nonce = Nonce::from_slice(&data[..NONCE_SIZE]);
    let ciphertext = &data[NONCE_SIZE..];

    let cipher = ChaCha20Poly1305::new_from_slice(key.as_bytes())
        .map_err(|_| SymmetricError::AuthenticationFailed)?;

    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| SymmetricError::AuthenticationFailed)?;

    Ok(String::from_utf8(plaintext)?)
}
