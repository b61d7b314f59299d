//! EIP-55 mixed-case checksum encoding.

use crate::crypto::keccak256;

/// Number of hex characters in a 20-byte address payload.
pub const ADDRESS_HEX_LENGTH: usize = 40;

/// Returns the EIP-55 checksummed hex of `payload` (without 0x prefix).
///
/// Each letter is uppercased when the matching nibble of
/// `keccak256(lowercase_hex)` is 8 or above. Digits are left as they are.
pub fn to_checksum_hex(payload: &[u8; 20]) -> String {
    let hex_addr = hex::encode(payload);
    let hash = keccak256(hex_addr.as_bytes());

    let mut checksum = String::with_capacity(ADDRESS_HEX_LENGTH);

    for (i, c) in hex_addr.chars().enumerate() {
        if c.is_ascii_digit() {
            checksum.push(c);
        } else if hash_nibble(&hash, i) >= 8 {
            checksum.push(c.to_ascii_uppercase());
        } else {
            checksum.push(c);
        }
    }

    checksum
}

/// Checks the casing of a 40-character hex string against EIP-55.
///
/// All-lowercase and all-uppercase strings carry no checksum and are accepted.
pub fn verify_checksum(hex_addr: &str) -> bool {
    if hex_addr.len() != ADDRESS_HEX_LENGTH || !hex_addr.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    let has_lower = hex_addr.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex_addr.chars().any(|c| c.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return true;
    }

    let hash = keccak256(hex_addr.to_ascii_lowercase().as_bytes());
    hex_addr
        .chars()
        .enumerate()
        .filter(|(_, c)| c.is_ascii_alphabetic())
        .all(|(i, c)| c.is_ascii_uppercase() == (hash_nibble(&hash, i) >= 8))
}

#[inline]
fn hash_nibble(hash: &[u8; 32], index: usize) -> u8 {
    let hash_byte = hash[index / 2];
    if index % 2 == 0 {
        hash_byte >> 4
    } else {
        hash_byte & 0x0f
    }
}
