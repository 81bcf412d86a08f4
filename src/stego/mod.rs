//! Steganography module for hiding data in image carriers.
//!
//! Image LSB steganography over lossless formats (PNG, BMP).

pub mod image;

pub use image::{ImageStego, ImageStegoError};
