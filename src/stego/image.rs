//! LSB (Least Significant Bit) steganography for images.
//!
//! Hides data in the least significant bits of pixel color values.
//! Carriers must be lossless (PNG, BMP) - lossy re-encoding destroys the payload.
//!
//! Format: [data bytes] + [8-byte terminator], each byte written MSB-first.
//! Pixels are walked in row-major order, channels R, G, B within a pixel;
//! alpha is never touched.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

/// Marks the end of the hidden payload so extraction needs no stored length.
///
/// Every byte is either 0x00 or one that can never occur in well-formed UTF-8
/// (0xC0, 0xC1, 0xF5..=0xFF), so a plaintext payload cannot contain the
/// sequence. For random ciphertext the false-match chance is ~2^-64 per
/// byte offset.
const TERMINATOR: [u8; 8] = [0x00, 0xC0, 0xC1, 0xF5, 0xF6, 0xFE, 0xFF, 0x00];

/// Channels used per pixel (R, G, B - alpha is skipped).
const CHANNELS_PER_PIXEL: usize = 3;

/// Errors that can occur during image steganography.
#[derive(Error, Debug)]
pub enum ImageStegoError {
    #[error("Message too large for carrier: need {needed_bits} bits, image has {capacity_bits}")]
    CapacityExceeded {
        needed_bits: usize,
        capacity_bits: usize,
    },

    #[error("Carrier image has no pixels")]
    EmptyImage,

    #[error("No hidden message found in image")]
    NoHiddenMessage,

    #[error("Image load error: {0}")]
    ImageLoadError(String),

    #[error("Image save error: {0}")]
    ImageSaveError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Image steganography handler.
///
/// Owns the carrier image for the duration of a hide or extract call;
/// operations either complete or fail without touching the carrier.
pub struct ImageStego {
    image: DynamicImage,
}

impl ImageStego {
    /// Creates a new ImageStego from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ImageStegoError> {
        let image = image::open(path).map_err(|e| ImageStegoError::ImageLoadError(e.to_string()))?;
        Ok(Self { image })
    }

    /// Creates a new ImageStego from encoded image bytes (PNG, BMP, ...).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageStegoError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| ImageStegoError::ImageLoadError(e.to_string()))?;
        Ok(Self { image })
    }

    /// Creates a new ImageStego from a DynamicImage.
    pub fn from_image(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Returns the total number of LSB slots in this image.
    ///
    /// One slot per R, G and B channel of every pixel.
    pub fn capacity_bits(&self) -> usize {
        let (width, height) = self.image.dimensions();
        (width as usize) * (height as usize) * CHANNELS_PER_PIXEL
    }

    /// Returns the capacity in payload bytes, after terminator overhead.
    pub fn capacity(&self) -> usize {
        (self.capacity_bits() / 8).saturating_sub(TERMINATOR.len())
    }

    /// Hides data in the image using LSB steganography.
    ///
    /// The payload may be empty: the terminator alone is embedded, and
    /// extraction returns empty bytes. Capacity is validated before any
    /// channel is written, so failure leaves no partial mutation.
    ///
    /// # Returns
    /// A new image with the data hidden inside. Dimensions are unchanged and
    /// every channel differs from the original by at most its LSB.
    pub fn hide(&self, data: &[u8]) -> Result<DynamicImage, ImageStegoError> {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageStegoError::EmptyImage);
        }

        let needed_bits = (data.len() + TERMINATOR.len()) * 8;
        let capacity_bits = self.capacity_bits();
        if needed_bits > capacity_bits {
            return Err(ImageStegoError::CapacityExceeded {
                needed_bits,
                capacity_bits,
            });
        }

        let mut payload = Vec::with_capacity(data.len() + TERMINATOR.len());
        payload.extend_from_slice(data);
        payload.extend_from_slice(&TERMINATOR);

        let mut output = self.image.to_rgba8();
        let total_bits = payload.len() * 8;
        let mut bit_index = 0;

        'outer: for y in 0..height {
            for x in 0..width {
                if bit_index >= total_bits {
                    break 'outer;
                }

                let pixel = output.get_pixel_mut(x, y);

                // Modify RGB channels (not alpha)
                for channel in 0..CHANNELS_PER_PIXEL {
                    if bit_index >= total_bits {
                        break;
                    }

                    // MSB-first within each byte
                    let byte = payload[bit_index / 8];
                    let bit = (byte >> (7 - bit_index % 8)) & 1;

                    pixel.0[channel] = (pixel.0[channel] & 0xFE) | bit;
                    bit_index += 1;
                }
            }
        }

        Ok(DynamicImage::ImageRgba8(output))
    }

    /// Extracts hidden data from the image.
    ///
    /// Walks the same scan order as [`hide`](Self::hide), accumulating LSBs
    /// into bytes until the terminator appears. The terminator is stripped
    /// from the returned data.
    pub fn extract(&self) -> Result<Vec<u8>, ImageStegoError> {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageStegoError::EmptyImage);
        }

        let rgba = self.image.to_rgba8();
        let mut data: Vec<u8> = Vec::new();
        let mut current: u8 = 0;
        let mut bits_in_current = 0;

        for y in 0..height {
            for x in 0..width {
                let pixel = rgba.get_pixel(x, y);

                for channel in 0..CHANNELS_PER_PIXEL {
                    current = (current << 1) | (pixel.0[channel] & 1);
                    bits_in_current += 1;

                    if bits_in_current == 8 {
                        data.push(current);
                        current = 0;
                        bits_in_current = 0;

                        if data.ends_with(&TERMINATOR) {
                            data.truncate(data.len() - TERMINATOR.len());
                            return Ok(data);
                        }
                    }
                }
            }
        }

        // Every slot read, terminator never seen: either no payload or an
        // incompatible scan order produced this image.
        Err(ImageStegoError::NoHiddenMessage)
    }

    /// Saves the image to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageStegoError> {
        self.image
            .save(path)
            .map_err(|e| ImageStegoError::ImageSaveError(e.to_string()))
    }

    /// Returns the image as PNG bytes (lossless, safe for embedded payloads).
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, ImageStegoError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| ImageStegoError::ImageSaveError(e.to_string()))?;
        Ok(bytes)
    }

    /// Returns a reference to the underlying image.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Consumes self and returns the underlying image.
    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}
