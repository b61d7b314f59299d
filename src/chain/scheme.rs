//! Per-chain address formats.

use crate::address::checksum::{to_checksum_hex, verify_checksum, ADDRESS_HEX_LENGTH};

/// Errors raised while parsing an address string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Address must start with {expected:?}")]
    MissingPrefix { expected: &'static str },
    #[error("Address contains non-hex characters")]
    InvalidHex,
    #[error("Invalid address length: expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Address checksum casing does not match")]
    InvalidChecksum,
}

/// Formats and parses the display string of a 20-byte address payload.
pub trait AddressScheme: Send + Sync {
    /// Short name used in logs and listings.
    fn name(&self) -> &'static str;

    /// Returns the canonical (checksummed) display string.
    fn format(&self, payload: &[u8; 20]) -> String;

    /// Parses a display string back into its payload.
    fn parse(&self, input: &str) -> Result<[u8; 20], ParseError>;
}

/// `0x` followed by EIP-55 checksummed hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eip55;

/// `ronin:` followed by EIP-55 checksummed hex. Also parses the `0x` form.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoninScheme;

pub(crate) const EIP55: Eip55 = Eip55;
pub(crate) const RONIN: RoninScheme = RoninScheme;

const HEX_PREFIX: &str = "0x";
const RONIN_PREFIX: &str = "ronin:";

impl AddressScheme for Eip55 {
    fn name(&self) -> &'static str {
        "eip55"
    }

    fn format(&self, payload: &[u8; 20]) -> String {
        format!("{}{}", HEX_PREFIX, to_checksum_hex(payload))
    }

    fn parse(&self, input: &str) -> Result<[u8; 20], ParseError> {
        let hex_part = input
            .strip_prefix(HEX_PREFIX)
            .ok_or(ParseError::MissingPrefix {
                expected: HEX_PREFIX,
            })?;
        decode_checksummed(hex_part)
    }
}

impl AddressScheme for RoninScheme {
    fn name(&self) -> &'static str {
        "ronin"
    }

    fn format(&self, payload: &[u8; 20]) -> String {
        format!("{}{}", RONIN_PREFIX, to_checksum_hex(payload))
    }

    fn parse(&self, input: &str) -> Result<[u8; 20], ParseError> {
        let hex_part = input
            .strip_prefix(RONIN_PREFIX)
            .or_else(|| input.strip_prefix(HEX_PREFIX))
            .ok_or(ParseError::MissingPrefix {
                expected: RONIN_PREFIX,
            })?;
        decode_checksummed(hex_part)
    }
}

fn decode_checksummed(hex_part: &str) -> Result<[u8; 20], ParseError> {
    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidHex);
    }
    if hex_part.len() != ADDRESS_HEX_LENGTH {
        return Err(ParseError::InvalidLength {
            expected: ADDRESS_HEX_LENGTH,
            actual: hex_part.len(),
        });
    }
    if !verify_checksum(hex_part) {
        return Err(ParseError::InvalidChecksum);
    }

    let mut payload = [0u8; 20];
    hex::decode_to_slice(hex_part, &mut payload).map_err(|_| ParseError::InvalidHex)?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD_HEX: &str = "7e5f4552091a69125d5dfcb7b8c2659029395bdf";

    fn payload() -> [u8; 20] {
        hex::decode(PAYLOAD_HEX).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_eip55_format() {
        assert_eq!(
            Eip55.format(&payload()),
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
        );
    }

    #[test]
    fn test_eip55_parse() {
        assert_eq!(
            Eip55.parse("0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"),
            Ok(payload())
        );
        assert_eq!(Eip55.parse(&format!("0x{}", PAYLOAD_HEX)), Ok(payload()));
    }

    #[test]
    fn test_eip55_parse_errors() {
        assert_eq!(
            Eip55.parse(PAYLOAD_HEX),
            Err(ParseError::MissingPrefix { expected: "0x" })
        );
        assert_eq!(
            Eip55.parse("0x7e5f"),
            Err(ParseError::InvalidLength {
                expected: 40,
                actual: 4
            })
        );
        assert_eq!(
            Eip55.parse("0x7e5f4552091a69125d5dfcb7b8c2659029395bdz"),
            Err(ParseError::InvalidHex)
        );
        assert_eq!(
            Eip55.parse("0x7e5F4552091A69125d5DfCb7b8C2659029395Bdf"),
            Err(ParseError::InvalidChecksum)
        );
    }

    #[test]
    fn test_ronin_format_and_parse() {
        let display = RoninScheme.format(&payload());
        assert_eq!(display, "ronin:7E5F4552091A69125d5DfCb7b8C2659029395Bdf");
        assert_eq!(RoninScheme.parse(&display), Ok(payload()));
        assert_eq!(
            RoninScheme.parse("0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"),
            Ok(payload())
        );
        assert_eq!(
            RoninScheme.parse(PAYLOAD_HEX),
            Err(ParseError::MissingPrefix { expected: "ronin:" })
        );
    }
}
