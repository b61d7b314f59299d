//! # evm_address
//!
//! Derives checksummed EVM account addresses from secp256k1 private keys.
//!
//! ## Architecture
//!
//! - `crypto`: Private key decoding, public key derivation, Keccak-256
//! - `chain`: Chain identifiers and their per-chain address schemes
//! - `address`: Address encoding, parsing and comparison
//! - `batch`: Parallel derivation of many keys
//! - `config`: Command line configuration
//!
//! ```
//! use evm_address::{derive_address, ChainId};
//!
//! let address = derive_address(
//!     "727f677b390c151caf9c206fd77f77918f56904b5504243db9b21e51182c4c06",
//!     ChainId::BinanceSmartChain,
//! )
//! .unwrap();
//! assert_eq!(address.display(), "0xf3d468DBb386aaD46E92FF222adDdf872C8CC064");
//! ```

pub mod address;
pub mod batch;
pub mod chain;
pub mod config;
pub mod crypto;

pub use address::{display_equals, equals, Address};
pub use batch::{BatchDeriver, BatchEntry};
pub use chain::{AddressScheme, ChainId, ParseError};
pub use config::Config;
pub use crypto::{keccak256, DecodeError, EncodeError, PrivateKey, PublicKey};

/// Errors from the full key-to-address pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Decodes a hex-encoded private key.
pub fn decode_private_key(hex: &str) -> Result<PrivateKey, DecodeError> {
    PrivateKey::from_hex(hex)
}

/// Derives the public key of `key`.
pub fn derive_public_key(key: &PrivateKey, compressed: bool) -> PublicKey {
    key.public_key(compressed)
}

/// Encodes `public_key` as an address on `chain`.
pub fn encode_address(public_key: &PublicKey, chain: ChainId) -> Result<Address, EncodeError> {
    Address::from_public_key(public_key, chain)
}

/// Runs the whole pipeline: decode, derive (uncompressed), encode.
pub fn derive_address(private_key_hex: &str, chain: ChainId) -> Result<Address, Error> {
    let key = decode_private_key(private_key_hex)?;
    let public_key = derive_public_key(&key, false);
    Ok(encode_address(&public_key, chain)?)
}
