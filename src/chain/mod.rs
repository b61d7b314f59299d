//! Chain identifiers and their address schemes.
//!
//! Every supported chain shares the secp256k1 + Keccak-256 payload; they
//! differ only in how the payload is displayed. [`ChainId::scheme`] maps each
//! tag to its [`AddressScheme`] at compile time.

mod scheme;

pub use scheme::{AddressScheme, Eip55, ParseError, RoninScheme};

use std::fmt;
use std::str::FromStr;

/// An EVM-compatible chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChainId {
    Ethereum,
    BinanceSmartChain,
    Polygon,
    AvalancheCChain,
    Arbitrum,
    Optimism,
    Ronin,
}

impl ChainId {
    /// All supported chains.
    pub const ALL: [ChainId; 7] = [
        ChainId::Ethereum,
        ChainId::BinanceSmartChain,
        ChainId::Polygon,
        ChainId::AvalancheCChain,
        ChainId::Arbitrum,
        ChainId::Optimism,
        ChainId::Ronin,
    ];

    /// Canonical lowercase name, accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            ChainId::Ethereum => "ethereum",
            ChainId::BinanceSmartChain => "smartchain",
            ChainId::Polygon => "polygon",
            ChainId::AvalancheCChain => "avalanchec",
            ChainId::Arbitrum => "arbitrum",
            ChainId::Optimism => "optimism",
            ChainId::Ronin => "ronin",
        }
    }

    /// EIP-155 chain id of the network's mainnet.
    pub const fn evm_chain_id(self) -> u64 {
        match self {
            ChainId::Ethereum => 1,
            ChainId::BinanceSmartChain => 56,
            ChainId::Polygon => 137,
            ChainId::AvalancheCChain => 43114,
            ChainId::Arbitrum => 42161,
            ChainId::Optimism => 10,
            ChainId::Ronin => 2020,
        }
    }

    /// Returns the address scheme used by this chain.
    pub fn scheme(self) -> &'static dyn AddressScheme {
        match self {
            ChainId::Ronin => &scheme::RONIN,
            ChainId::Ethereum
            | ChainId::BinanceSmartChain
            | ChainId::Polygon
            | ChainId::AvalancheCChain
            | ChainId::Arbitrum
            | ChainId::Optimism => &scheme::EIP55,
        }
    }

    /// Looks a chain up by its EIP-155 chain id.
    pub fn from_evm_chain_id(id: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|chain| chain.evm_chain_id() == id)
    }
}

impl FromStr for ChainId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "ethereum" | "eth" => Ok(ChainId::Ethereum),
            "smartchain" | "binancesmartchain" | "bsc" | "bnb" => Ok(ChainId::BinanceSmartChain),
            "polygon" | "matic" => Ok(ChainId::Polygon),
            "avalanchec" | "avalanchecchain" | "avalanche" | "avax" => {
                Ok(ChainId::AvalancheCChain)
            }
            "arbitrum" | "arb" => Ok(ChainId::Arbitrum),
            "optimism" | "op" => Ok(ChainId::Optimism),
            "ronin" | "ron" => Ok(ChainId::Ronin),
            _ => normalized
                .parse::<u64>()
                .ok()
                .and_then(ChainId::from_evm_chain_id)
                .ok_or_else(|| format!("Unknown chain: {}", s)),
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("bsc".parse::<ChainId>(), Ok(ChainId::BinanceSmartChain));
        assert_eq!(
            "BINANCESMARTCHAIN".parse::<ChainId>(),
            Ok(ChainId::BinanceSmartChain)
        );
        assert_eq!(
            "binance_smart_chain".parse::<ChainId>(),
            Ok(ChainId::BinanceSmartChain)
        );
        assert_eq!("ETH".parse::<ChainId>(), Ok(ChainId::Ethereum));
        assert_eq!("56".parse::<ChainId>(), Ok(ChainId::BinanceSmartChain));
        assert!("bitcoin".parse::<ChainId>().is_err());
        assert!("999999".parse::<ChainId>().is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for chain in ChainId::ALL {
            assert_eq!(chain.name().parse::<ChainId>(), Ok(chain));
            assert_eq!(
                ChainId::from_evm_chain_id(chain.evm_chain_id()),
                Some(chain)
            );
        }
    }

    #[test]
    fn test_scheme_lookup() {
        assert_eq!(ChainId::BinanceSmartChain.scheme().name(), "eip55");
        assert_eq!(ChainId::Ethereum.scheme().name(), "eip55");
        assert_eq!(ChainId::Ronin.scheme().name(), "ronin");
    }
}
