//! Message extraction for Stealthify.
//!
//! This module orchestrates the decode path: extract the hidden bytes from
//! the image's LSBs, then either validate them as UTF-8 text or decrypt them
//! with the caller-supplied key.

use image::DynamicImage;
use thiserror::Error;

use crate::crypto::{decrypt, EncryptionKey, SymmetricError};
use crate::stego::{ImageStego, ImageStegoError};

/// Errors that can occur during decoding.
#[derive(Error, Debug)]
pub enum DecoderError {
    #[error("Steganography error: {0}")]
    Stego(#[from] ImageStegoError),

    #[error("Decryption error: {0}")]
    Crypto(#[from] SymmetricError),

    #[error("Hidden payload is not valid UTF-8 text (was it encrypted?)")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Reveals a plaintext message hidden in the image.
///
/// Fails with [`ImageStegoError::NoHiddenMessage`] if the image carries no
/// payload, and with [`DecoderError::InvalidUtf8`] if the payload is not
/// text - typically because it was encrypted and needs
/// [`reveal_encrypted`] with the right key.
pub fn reveal(image: &DynamicImage) -> Result<String, DecoderError> {
    let stego = ImageStego::from_image(image.clone());
    let payload = stego.extract()?;
    Ok(String::from_utf8(payload)?)
}

/// Reveals an encrypted message hidden in the image and decrypts it.
///
/// Fails with [`SymmetricError::AuthenticationFailed`] when the key is wrong
/// or the payload was corrupted (for example by lossy re-encoding of the
/// carrier).
pub fn reveal_encrypted(
    image: &DynamicImage,
    key: &EncryptionKey,
) -> Result<String, DecoderError> {
    let stego = ImageStego::from_image(image.clone());
    let ciphertext = stego.extract()?;
    Ok(decrypt(&ciphertext, key)?)
}
