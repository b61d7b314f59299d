//! Address comparison.

use super::Address;

/// Semantic equality: same payload on the same chain, casing ignored.
#[inline]
pub fn equals(a: &Address, b: &Address) -> bool {
    a.payload == b.payload && a.chain == b.chain
}

/// Strict equality of the display strings, casing included.
#[inline]
pub fn display_equals(a: &Address, b: &Address) -> bool {
    a.display == b.display
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainId;

    const CHECKSUMMED: &str = "0xf3d468DBb386aaD46E92FF222adDdf872C8CC064";
    const LOWERCASE: &str = "0xf3d468dbb386aad46e92ff222adddf872c8cc064";

    #[test]
    fn test_equals_ignores_casing() {
        let a = Address::parse(CHECKSUMMED, ChainId::BinanceSmartChain).unwrap();
        let b = Address::parse(LOWERCASE, ChainId::BinanceSmartChain).unwrap();
        assert!(equals(&a, &b));
        assert_eq!(a, b);
        assert!(!display_equals(&a, &b));
    }

    #[test]
    fn test_equals_checks_chain() {
        let bsc = Address::parse(CHECKSUMMED, ChainId::BinanceSmartChain).unwrap();
        let eth = Address::parse(CHECKSUMMED, ChainId::Ethereum).unwrap();
        assert!(!equals(&bsc, &eth));
        // Same display, different chain.
        assert!(display_equals(&bsc, &eth));
    }

    #[test]
    fn test_display_equals_canonical() {
        let parsed = Address::parse(LOWERCASE, ChainId::BinanceSmartChain).unwrap();
        let canonical = Address::parse(CHECKSUMMED, ChainId::BinanceSmartChain).unwrap();
        assert!(display_equals(&parsed.normalized(), &canonical));
    }
}
