//! secp256k1 private key decoding.

use std::fmt;

use secp256k1::SecretKey;
use tracing::trace;
use zeroize::Zeroizing;

use super::{strip_hex_prefix, PublicKey};

/// Length of a secp256k1 secret scalar in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Errors raised while decoding a private key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),
    #[error("Invalid private key length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Private key is not a valid secp256k1 scalar")]
    InvalidScalar,
}

/// A secp256k1 private key (32-byte secret scalar).
///
/// The scalar is always in `[1, n - 1]` where `n` is the curve order.
/// The secret is erased when the key is dropped.
#[derive(Clone)]
pub struct PrivateKey {
    secret: SecretKey,
}

impl PrivateKey {
    /// Decodes a private key from a hex string, with or without a `0x` prefix.
    pub fn from_hex(input: &str) -> Result<Self, DecodeError> {
        let digits = strip_hex_prefix(input);

        let bytes = Zeroizing::new(
            hex::decode(digits).map_err(|e| DecodeError::InvalidHex(e.to_string()))?,
        );

        Self::from_slice(&bytes)
    }

    /// Creates a private key from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != PRIVATE_KEY_LENGTH {
            return Err(DecodeError::InvalidLength {
                expected: PRIVATE_KEY_LENGTH,
                actual: bytes.len(),
            });
        }

        // Rejects zero and anything at or above the curve order.
        let secret = SecretKey::from_slice(bytes).map_err(|_| DecodeError::InvalidScalar)?;
        trace!("decoded secp256k1 private key");

        Ok(Self { secret })
    }

    /// Creates a private key from a fixed-size byte array.
    pub fn from_bytes(bytes: &[u8; PRIVATE_KEY_LENGTH]) -> Result<Self, DecodeError> {
        Self::from_slice(bytes)
    }

    /// Generates a new random private key.
    ///
    /// Uses a cryptographically secure random number generator.
    pub fn generate() -> Self {
        Self {
            secret: SecretKey::new(&mut rand::thread_rng()),
        }
    }

    /// Derives the public key by multiplying the base point by this scalar.
    ///
    /// Returns the 33-byte SEC1 form when `compressed` is set, otherwise the
    /// 65-byte form (`0x04 || X || Y`).
    pub fn public_key(&self, compressed: bool) -> PublicKey {
        let point = secp256k1::PublicKey::from_secret_key_global(&self.secret);
        if compressed {
            PublicKey::Compressed(point.serialize())
        } else {
            PublicKey::Uncompressed(point.serialize_uncompressed())
        }
    }

    /// Returns the secret scalar bytes.
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_LENGTH]> {
        Zeroizing::new(self.secret.secret_bytes())
    }

    /// Returns the private key as a hex string (without 0x prefix).
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.to_bytes().as_slice()))
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.secret.non_secure_erase();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}
