//! # Stealthify - Hide text inside images
//!
//! Stealthify embeds a UTF-8 message in the least significant bits of an
//! image's pixel channels (LSB steganography) and recovers it later, with an
//! optional authenticated-encryption layer on top.
//!
//! ## Overview
//!
//! - The message (or its ciphertext) is expanded to a bitstream, MSB-first,
//!   and written into the LSB of each R, G and B channel in row-major pixel
//!   order. Alpha is never touched.
//! - A fixed terminator sequence marks the end of the payload, so extraction
//!   needs no stored length.
//! - Encryption is optional: a fresh random key is generated per encode and
//!   handed back to the caller. The key is never written into the image.
//! - Carriers must stay lossless after embedding (PNG). Lossy re-encoding
//!   destroys the hidden bitstream.
//!
//! ## Example Usage
//!
//! ```rust
//! use image::{DynamicImage, ImageBuffer, Rgb};
//! use stealthify::{embed_encrypted, reveal_encrypted};
//!
//! let carrier = DynamicImage::ImageRgb8(
//!     ImageBuffer::from_pixel(64, 64, Rgb([120, 90, 33])),
//! );
//!
//! // Encrypt and embed - the key is returned, never stored in the image
//! let (secret, key) = embed_encrypted(&carrier, "meet at dawn").unwrap();
//!
//! // Give the recipient the image and (out of band) the key
//! println!("Key: {}", key.to_base64());
//!
//! let message = reveal_encrypted(&secret, &key).unwrap();
//! assert_eq!(message, "meet at dawn");
//! ```
//!
//! ## Modules
//!
//! - [`stego`]: LSB embedding and extraction ([`ImageStego`])
//! - [`crypto`]: Key generation and authenticated encryption
//! - [`encoder`]: Embed orchestration (plain and encrypted)
//! - [`decoder`]: Reveal orchestration (plain and encrypted)

pub mod crypto;
pub mod decoder;
pub mod encoder;
pub mod stego;

// Re-export commonly used types at the crate root
pub use crypto::{decrypt, encrypt, EncryptionKey, KeyError, SymmetricError};
pub use decoder::{reveal, reveal_encrypted, DecoderError};
pub use encoder::{embed, embed_encrypted, EncoderError};
pub use stego::{ImageStego, ImageStegoError};
