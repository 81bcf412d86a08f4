//! Integration tests for Stealthify
//!
//! End-to-end scenarios covering:
//! - Plain embed/reveal round-trips
//! - Encrypt-then-embed round-trips with out-of-band keys
//! - Capacity validation (all-or-nothing embedding)
//! - No-payload detection on clean images
//! - PNG re-encode survival (lossless carrier requirement)

use image::{DynamicImage, GenericImageView, ImageBuffer, Rgb, Rgba};
use stealthify::{
    embed, embed_encrypted, reveal, reveal_encrypted, DecoderError, EncoderError, EncryptionKey,
    ImageStego, ImageStegoError, SymmetricError,
};

fn create_test_image(width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([
            ((x * 13 + 7) % 256) as u8,
            ((y * 29 + 3) % 256) as u8,
            (((x ^ y) * 41) % 256) as u8,
        ])
    });
    DynamicImage::ImageRgb8(img)
}

/// Test basic embed/reveal roundtrip
#[test]
fn test_embed_reveal_roundtrip() {
    let carrier = create_test_image(100, 100);
    let message = "The quick brown fox jumps over the lazy dog";

    let hidden = embed(&carrier, message).unwrap();
    let revealed = reveal(&hidden).unwrap();

    assert_eq!(revealed, message);
}

/// 10x10 RGB carrier has 300 LSB slots; "HELLO" (40 bits) plus the 8-byte
/// terminator (64 bits) is 104 bits and fits
#[test]
fn test_hello_in_ten_by_ten() {
    let carrier = create_test_image(10, 10);

    let hidden = embed(&carrier, "HELLO").unwrap();
    let revealed = reveal(&hidden).unwrap();

    assert_eq!(revealed, "HELLO");
}

/// The same 10x10 carrier rejects a 40-character message (320 + 64 bits
/// against 300 slots) and stays untouched
#[test]
fn test_forty_chars_exceed_ten_by_ten() {
    let carrier = create_test_image(10, 10);
    let message = "x".repeat(40);

    let result = embed(&carrier, &message);
    assert!(matches!(
        result,
        Err(EncoderError::Stego(ImageStegoError::CapacityExceeded {
            needed_bits: 384,
            capacity_bits: 300,
        }))
    ));
}

/// Test multi-byte UTF-8 content
#[test]
fn test_utf8_roundtrip() {
    let carrier = create_test_image(80, 80);
    let message = "héllo wörld — 秘密のメッセージ 🦀";

    let hidden = embed(&carrier, message).unwrap();
    let revealed = reveal(&hidden).unwrap();

    assert_eq!(revealed, message);
}

/// Empty messages are allowed and round-trip to an empty string
#[test]
fn test_empty_message_roundtrip() {
    let carrier = create_test_image(20, 20);

    let hidden = embed(&carrier, "").unwrap();
    let revealed = reveal(&hidden).unwrap();

    assert_eq!(revealed, "");
}

/// Embedding is deterministic: same carrier + same message = same bits
#[test]
fn test_embedding_is_deterministic() {
    let carrier = create_test_image(64, 64);

    let first = embed(&carrier, "determinism").unwrap();
    let second = embed(&carrier, "determinism").unwrap();

    assert_eq!(first.to_rgba8().as_raw(), second.to_rgba8().as_raw());
}

/// A carrier that never had a message embedded yields NoHiddenMessage
#[test]
fn test_clean_image_has_no_message() {
    let clean = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(40, 40, Rgb([10, 20, 30])));

    let result = reveal(&clean);
    assert!(matches!(
        result,
        Err(DecoderError::Stego(ImageStegoError::NoHiddenMessage))
    ));
}

/// Encrypt "SECRET", embed, decode, decrypt with the right key
#[test]
fn test_encrypted_embed_reveal_roundtrip() {
    let carrier = create_test_image(100, 100);

    let (hidden, key) = embed_encrypted(&carrier, "SECRET").unwrap();
    let revealed = reveal_encrypted(&hidden, &key).unwrap();

    assert_eq!(revealed, "SECRET");
}

/// Decrypting with a freshly generated key must fail authentication
#[test]
fn test_wrong_key_authentication_failure() {
    let carrier = create_test_image(100, 100);

    let (hidden, _key) = embed_encrypted(&carrier, "SECRET").unwrap();
    let wrong_key = EncryptionKey::generate();

    let result = reveal_encrypted(&hidden, &wrong_key);
    assert!(matches!(
        result,
        Err(DecoderError::Crypto(SymmetricError::AuthenticationFailed))
    ));
}

/// The key survives its base64 transport form (display, copy, paste)
#[test]
fn test_key_transport_roundtrip() {
    let carrier = create_test_image(100, 100);

    let (hidden, key) = embed_encrypted(&carrier, "out of band").unwrap();

    let pasted = EncryptionKey::from_base64(&key.to_base64()).unwrap();
    let revealed = reveal_encrypted(&hidden, &pasted).unwrap();

    assert_eq!(revealed, "out of band");
}

/// The payload survives PNG re-encoding (the collaborator's save path)
#[test]
fn test_payload_survives_png_reencode() {
    let carrier = create_test_image(100, 100);

    let (hidden, key) = embed_encrypted(&carrier, "lossless only").unwrap();

    let png_bytes = ImageStego::from_image(hidden).to_png_bytes().unwrap();
    let reloaded = ImageStego::from_bytes(&png_bytes).unwrap().into_image();

    let revealed = reveal_encrypted(&reloaded, &key).unwrap();
    assert_eq!(revealed, "lossless only");
}

/// RGBA carriers work and alpha stays untouched
#[test]
fn test_rgba_carrier_preserves_alpha() {
    let img = ImageBuffer::from_fn(50, 50, |x, y| {
        Rgba([
            (x % 256) as u8,
            (y % 256) as u8,
            ((x + y) % 256) as u8,
            ((x * y) % 256) as u8,
        ])
    });
    let carrier = DynamicImage::ImageRgba8(img);

    let hidden = embed(&carrier, "alpha untouched").unwrap();

    let before = carrier.to_rgba8();
    let after = hidden.to_rgba8();
    for (a, b) in before.pixels().zip(after.pixels()) {
        assert_eq!(a.0[3], b.0[3]);
    }

    assert_eq!(reveal(&hidden).unwrap(), "alpha untouched");
}

/// Dimensions never change and channels shift by at most one
#[test]
fn test_minimal_distortion() {
    let carrier = create_test_image(60, 60);
    let hidden = embed(&carrier, "barely visible").unwrap();

    assert_eq!(hidden.dimensions(), carrier.dimensions());

    let before = carrier.to_rgba8();
    let after = hidden.to_rgba8();
    for (a, b) in before.pixels().zip(after.pixels()) {
        for channel in 0..4 {
            let diff = (a.0[channel] as i16 - b.0[channel] as i16).abs();
            assert!(diff <= 1);
        }
    }
}

/// Near-capacity messages still round-trip
#[test]
fn test_near_capacity_roundtrip() {
    let carrier = create_test_image(30, 30);
    let stego = ImageStego::from_image(carrier.clone());

    let message = "a".repeat(stego.capacity());
    let hidden = embed(&carrier, &message).unwrap();

    assert_eq!(reveal(&hidden).unwrap(), message);
}
