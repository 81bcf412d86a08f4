//! Cryptographic operations for Stealthify.
//!
//! This module provides:
//! - Random key generation with base64 transport encoding
//! - Authenticated symmetric encryption (ChaCha20-Poly1305)
//!
//! The steganography codec never sees key material; it receives ciphertext
//! as plain bytes. That separation keeps the codec testable without any
//! cryptography and lets the cipher be swapped without touching embedding.

pub mod keys;
pub mod symmetric;

pub use keys::{EncryptionKey, KeyError, KEY_SIZE};
pub use symmetric::{decrypt, encrypt, SymmetricError};
