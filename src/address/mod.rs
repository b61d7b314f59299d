//! Chain-tagged account addresses.
//!
//! An address is the low 20 bytes of `keccak256(X || Y)` of a secp256k1
//! public key, displayed through the chain's [`AddressScheme`].

pub mod checksum;
mod compare;

pub use compare::{display_equals, equals};

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::chain::{ChainId, ParseError};
use crate::crypto::{
    keccak256, EncodeError, PublicKey, UNCOMPRESSED_LENGTH, UNCOMPRESSED_MARKER,
};

/// Length of an address payload in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// An address on a specific chain.
///
/// Equality and hashing use the payload and chain only; the display string
/// keeps whatever casing it was created with.
#[derive(Clone)]
pub struct Address {
    payload: [u8; ADDRESS_LENGTH],
    chain: ChainId,
    display: String,
}

impl Address {
    /// Creates an address with the chain's canonical display string.
    pub fn from_payload(payload: [u8; ADDRESS_LENGTH], chain: ChainId) -> Self {
        let display = chain.scheme().format(&payload);
        Self {
            payload,
            chain,
            display,
        }
    }

    /// Derives an address from a secp256k1 public key.
    ///
    /// Compressed keys are decompressed first.
    pub fn from_public_key(public_key: &PublicKey, chain: ChainId) -> Result<Self, EncodeError> {
        let uncompressed = public_key.to_uncompressed()?;
        Self::from_public_key_bytes(&uncompressed, chain)
    }

    /// Derives an address from a raw 65-byte uncompressed public key.
    ///
    /// Process:
    /// 1. Check the length and the 0x04 marker byte
    /// 2. Hash the remaining 64 bytes (X || Y) with Keccak-256
    /// 3. Take the last 20 bytes of the hash
    /// 4. Format the payload with the chain's scheme
    pub fn from_public_key_bytes(bytes: &[u8], chain: ChainId) -> Result<Self, EncodeError> {
        if bytes.len() != UNCOMPRESSED_LENGTH {
            return Err(EncodeError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                UNCOMPRESSED_LENGTH,
                bytes.len()
            )));
        }
        if bytes[0] != UNCOMPRESSED_MARKER {
            return Err(EncodeError::InvalidPublicKey(format!(
                "expected marker byte 0x{:02x}, got 0x{:02x}",
                UNCOMPRESSED_MARKER, bytes[0]
            )));
        }

        let hash = keccak256(&bytes[1..]);

        let mut payload = [0u8; ADDRESS_LENGTH];
        payload.copy_from_slice(&hash[12..]);

        let address = Self::from_payload(payload, chain);
        debug!(chain = %chain, address = %address, "encoded address");
        Ok(address)
    }

    /// Parses an address string for `chain`, keeping its casing as the display string.
    ///
    /// Mixed-case input must carry a valid checksum.
    pub fn parse(input: &str, chain: ChainId) -> Result<Self, ParseError> {
        let payload = chain.scheme().parse(input)?;
        Ok(Self {
            payload,
            chain,
            display: input.to_string(),
        })
    }

    /// Returns whether `input` is a valid address string for `chain`.
    pub fn is_valid(input: &str, chain: ChainId) -> bool {
        chain.scheme().parse(input).is_ok()
    }

    /// Returns the same address with the canonical display string.
    pub fn normalized(&self) -> Self {
        Self::from_payload(self.payload, self.chain)
    }

    /// Returns the raw 20-byte payload.
    #[inline]
    pub const fn payload(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.payload
    }

    /// Returns the payload as a byte vector (the key hash).
    pub fn data(&self) -> Vec<u8> {
        self.payload.to_vec()
    }

    #[inline]
    pub const fn chain(&self) -> ChainId {
        self.chain
    }

    /// Returns the display string.
    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the payload as a lowercase hex string (without 0x prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.payload)
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.payload.hash(state);
        self.chain.hash(state);
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({}, {})", self.chain, self.display)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}
