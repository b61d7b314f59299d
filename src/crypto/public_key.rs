//! secp256k1 public key in SEC1 encoding.

use std::fmt;

use super::strip_hex_prefix;

/// Length of a compressed SEC1 public key.
pub const COMPRESSED_LENGTH: usize = 33;
/// Length of an uncompressed SEC1 public key.
pub const UNCOMPRESSED_LENGTH: usize = 65;
/// Marker byte of an uncompressed SEC1 public key.
pub const UNCOMPRESSED_MARKER: u8 = 0x04;

/// Errors raised while turning public key bytes into an address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),
}

/// A secp256k1 public key, derived from a [`PrivateKey`](super::PrivateKey)
/// or parsed from SEC1 bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKey {
    /// `0x02 | 0x03` followed by the X coordinate.
    Compressed([u8; COMPRESSED_LENGTH]),
    /// `0x04` followed by the X and Y coordinates.
    Uncompressed([u8; UNCOMPRESSED_LENGTH]),
}

impl PublicKey {
    /// Parses a 33- or 65-byte SEC1 public key, checking that it lies on the curve.
    ///
    /// Only `0x02 | 0x03` (33 bytes) and `0x04` (65 bytes) markers are accepted;
    /// hybrid `0x06 | 0x07` keys are rejected.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, EncodeError> {
        match (bytes.len(), bytes.first()) {
            (COMPRESSED_LENGTH, Some(0x02 | 0x03)) => {}
            (UNCOMPRESSED_LENGTH, Some(&UNCOMPRESSED_MARKER)) => {}
            (len, marker) => {
                return Err(EncodeError::InvalidPublicKey(format!(
                    "unsupported SEC1 encoding: {} bytes, marker {:02x?}",
                    len, marker
                )));
            }
        }

        let point = secp256k1::PublicKey::from_slice(bytes)
            .map_err(|e| EncodeError::InvalidPublicKey(e.to_string()))?;

        // Keep the caller's encoding.
        Ok(if bytes.len() == COMPRESSED_LENGTH {
            PublicKey::Compressed(point.serialize())
        } else {
            PublicKey::Uncompressed(point.serialize_uncompressed())
        })
    }

    /// Parses a hex-encoded SEC1 public key, with or without a `0x` prefix.
    pub fn from_hex(input: &str) -> Result<Self, EncodeError> {
        let digits = strip_hex_prefix(input);
        let bytes =
            hex::decode(digits).map_err(|e| EncodeError::InvalidPublicKey(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Returns the uncompressed (65-byte) form, decompressing if needed.
    pub fn to_uncompressed(&self) -> Result<[u8; UNCOMPRESSED_LENGTH], EncodeError> {
        match self {
            PublicKey::Uncompressed(bytes) => Ok(*bytes),
            PublicKey::Compressed(bytes) => secp256k1::PublicKey::from_slice(bytes)
                .map(|point| point.serialize_uncompressed())
                .map_err(|e| EncodeError::InvalidPublicKey(e.to_string())),
        }
    }

    /// Returns the SEC1 bytes in their current encoding.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PublicKey::Compressed(bytes) => bytes,
            PublicKey::Uncompressed(bytes) => bytes,
        }
    }

    #[inline]
    pub fn is_compressed(&self) -> bool {
        matches!(self, PublicKey::Compressed(_))
    }

    /// Returns the key as a lowercase hex string (without 0x prefix).
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
