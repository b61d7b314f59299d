//! Command line configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::chain::ChainId;

/// EVM address derivation tool
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Derive the public key and address of a private key
    Derive {
        /// Private key as 64 hex characters (optional 0x prefix)
        #[arg(short, long)]
        key: String,

        /// Chain whose address format to use
        #[arg(short, long, default_value = "smartchain")]
        chain: ChainId,

        /// Print the compressed public key (the address is the same)
        #[arg(long, default_value = "false")]
        compressed: bool,
    },

    /// Check that an address string is valid for a chain
    Validate {
        #[arg(short, long)]
        address: String,

        #[arg(short, long, default_value = "smartchain")]
        chain: ChainId,
    },

    /// Print the canonical (checksummed) form of an address
    Normalize {
        #[arg(short, long)]
        address: String,

        #[arg(short, long, default_value = "smartchain")]
        chain: ChainId,
    },

    /// Derive addresses for a file of private keys, one per line ("-" for stdin)
    Batch {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, default_value = "smartchain")]
        chain: ChainId,

        /// Number of worker threads (default: number of CPU cores)
        #[arg(short = 'w', long)]
        workers: Option<usize>,
    },

    /// List supported chains
    Chains,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.command {
            Command::Derive { key, .. } => {
                if key.trim().is_empty() {
                    return Err(ConfigError::InvalidArgument(
                        "Private key cannot be empty".into(),
                    ));
                }
            }
            Command::Validate { address, .. } | Command::Normalize { address, .. } => {
                if address.trim().is_empty() {
                    return Err(ConfigError::InvalidArgument(
                        "Address cannot be empty".into(),
                    ));
                }
            }
            Command::Batch { workers, .. } => {
                if *workers == Some(0) {
                    return Err(ConfigError::InvalidArgument(
                        "Worker count must be at least 1".into(),
                    ));
                }
            }
            Command::Chains => {}
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_derive() {
        let config = Config::try_parse_from([
            "evm_address",
            "derive",
            "--key",
            "727f677b390c151caf9c206fd77f77918f56904b5504243db9b21e51182c4c06",
            "--chain",
            "bsc",
        ])
        .unwrap();
        assert!(config.validate().is_ok());
        assert!(matches!(
            config.command,
            Command::Derive {
                chain: ChainId::BinanceSmartChain,
                compressed: false,
                ..
            }
        ));
    }

    #[test]
    fn test_default_chain() {
        let config =
            Config::try_parse_from(["evm_address", "validate", "--address", "0x00"]).unwrap();
        assert!(matches!(
            config.command,
            Command::Validate {
                chain: ChainId::BinanceSmartChain,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_chain_rejected() {
        assert!(Config::try_parse_from([
            "evm_address",
            "normalize",
            "--address",
            "0x00",
            "--chain",
            "bitcoin",
        ])
        .is_err());
    }

    #[test]
    fn test_batch_workers_default_unset() {
        let config =
            Config::try_parse_from(["evm_address", "batch", "--input", "keys.txt"]).unwrap();
        assert!(config.validate().is_ok());
        assert!(matches!(config.command, Command::Batch { workers: None, .. }));
    }

    #[test]
    fn test_invalid_worker_count() {
        let config = Config::try_parse_from([
            "evm_address",
            "batch",
            "--input",
            "keys.txt",
            "--workers",
            "0",
        ])
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_key() {
        let config = Config::try_parse_from(["evm_address", "derive", "--key", " "]).unwrap();
        assert!(config.validate().is_err());
    }
}
