//! secp256k1 key handling and the Keccak-256 primitive.
//!
//! This module provides:
//! - Private key decoding and validation
//! - Public key derivation (compressed and uncompressed SEC1 forms)
//! - Keccak-256 hashing shared by address encoding and checksumming

mod private_key;
mod public_key;

pub use private_key::{DecodeError, PrivateKey, PRIVATE_KEY_LENGTH};
pub use public_key::{
    EncodeError, PublicKey, COMPRESSED_LENGTH, UNCOMPRESSED_LENGTH, UNCOMPRESSED_MARKER,
};

use tiny_keccak::{Hasher, Keccak};

/// Keccak-256 of arbitrary bytes (output 32 bytes).
pub fn keccak256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(input);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}

/// Trims surrounding whitespace and an optional `0x` / `0X` prefix.
pub(crate) fn strip_hex_prefix(input: &str) -> &str {
    let trimmed = input.trim();
    trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_strip_hex_prefix() {
        assert_eq!(strip_hex_prefix(" 0xabcd\n"), "abcd");
        assert_eq!(strip_hex_prefix("0XABCD"), "ABCD");
        assert_eq!(strip_hex_prefix("abcd"), "abcd");
    }

    #[test]
    fn test_keccak256_is_not_sha3() {
        // SHA3-256("") starts with a7ffc6f8; Keccak-256 uses the original padding.
        assert!(!hex::encode(keccak256(b"")).starts_with("a7ffc6f8"));
    }
}
