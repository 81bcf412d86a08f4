//! Message embedding for Stealthify.
//!
//! This module orchestrates the encode path:
//! 1. Optionally encrypt the message under a freshly generated key
//! 2. Embed the resulting bytes in the carrier's LSBs
//! 3. Return the mutated image (and the key, if encryption was requested)
//!
//! The key is handed back to the caller as an out-of-band secret; it is
//! never written into the image or any file.

use image::DynamicImage;
use thiserror::Error;

use crate::crypto::{encrypt, EncryptionKey, SymmetricError};
use crate::stego::{ImageStego, ImageStegoError};

/// Errors that can occur during encoding.
#[derive(Error, Debug)]
pub enum EncoderError {
    #[error("Steganography error: {0}")]
    Stego(#[from] ImageStegoError),

    #[error("Encryption error: {0}")]
    Crypto(#[from] SymmetricError),
}

/// Embeds a plaintext message in the carrier image.
///
/// The carrier is not modified; a new image with the hidden message is
/// returned. Empty messages are allowed and round-trip to an empty string.
pub fn embed(image: &DynamicImage, message: &str) -> Result<DynamicImage, EncoderError> {
    let stego = ImageStego::from_image(image.clone());
    Ok(stego.hide(message.as_bytes())?)
}

/// Encrypts a message under a freshly generated key, then embeds the
/// ciphertext in the carrier image.
///
/// # Returns
/// The image with the hidden ciphertext, and the generated key. The caller
/// owns the key; without it the payload cannot be recovered.
pub fn embed_encrypted(
    image: &DynamicImage,
    message: &str,
) -> Result<(DynamicImage, EncryptionKey), EncoderError> {
    let key = EncryptionKey::generate();
    let ciphertext = encrypt(message, &key)?;

    let stego = ImageStego::from_image(image.clone());
    let hidden = stego.hide(&ciphertext)?;

    Ok((hidden, key))
}
