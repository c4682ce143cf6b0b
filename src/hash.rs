//! Seed Derivation - SHA-256 over the input text
//!
//! The seed is the only bridge between text and pattern, so it has to be
//! stable across platforms and releases.

use sha2::{Digest, Sha256};

/// Hash the text into a 64-bit seed.
///
/// The seed is the first 8 bytes of the SHA-256 digest of the UTF-8 bytes,
/// interpreted as a big-endian signed integer.
pub fn seed(text: &str) -> i64 {
    let digest = Sha256::digest(text.as_bytes());

    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);

    i64::from_be_bytes(head)
}
