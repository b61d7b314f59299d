//! EVM Address Derivation CLI
//!
//! Usage:
//!   evm_address derive -k 727f...4c06                 # BSC address of a key
//!   evm_address derive -k 727f...4c06 -c ethereum     # Same key on Ethereum
//!   evm_address validate -a 0xf3d4...C064 -c bsc      # Exit 1 if invalid
//!   evm_address batch -i keys.txt -w 8                # One key per line

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use evm_address::config::Command;
use evm_address::{Address, BatchDeriver, ChainId, Config, PrivateKey};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    let code = match config.command {
        Command::Derive {
            key,
            chain,
            compressed,
        } => derive(&key, chain, compressed),
        Command::Validate { address, chain } => validate(&address, chain),
        Command::Normalize { address, chain } => normalize(&address, chain),
        Command::Batch {
            input,
            chain,
            workers,
        } => batch(&input, chain, workers.unwrap_or(0)),
        Command::Chains => {
            print_chains();
            0
        }
    };

    process::exit(code);
}

fn derive(key_hex: &str, chain: ChainId, compressed: bool) -> i32 {
    let key = match PrivateKey::from_hex(key_hex) {
        Ok(key) => key,
        Err(e) => {
            eprintln!("Invalid private key: {}", e);
            return 1;
        }
    };

    let public_key = key.public_key(compressed);
    match Address::from_public_key(&public_key, chain) {
        Ok(address) => {
            println!("Chain:       {} (chain id {})", chain, chain.evm_chain_id());
            println!("Public Key:  {}", public_key);
            println!("Address:     {}", address);
            0
        }
        Err(e) => {
            eprintln!("Address encoding failed: {}", e);
            1
        }
    }
}

fn validate(address: &str, chain: ChainId) -> i32 {
    match Address::parse(address, chain) {
        Ok(_) => {
            println!("valid");
            0
        }
        Err(e) => {
            println!("invalid: {}", e);
            1
        }
    }
}

fn normalize(address: &str, chain: ChainId) -> i32 {
    match Address::parse(address, chain) {
        Ok(parsed) => {
            println!("{}", parsed.normalized());
            0
        }
        Err(e) => {
            eprintln!("Invalid address: {}", e);
            1
        }
    }
}

fn batch(input: &Path, chain: ChainId, workers: usize) -> i32 {
    let contents = match read_input(input) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to read {}: {}", input.display(), e);
            return 1;
        }
    };

    let keys: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let deriver = match BatchDeriver::new(workers) {
        Ok(deriver) => deriver,
        Err(e) => {
            error!("failed to start worker pool: {}", e);
            return 1;
        }
    };

    info!(keys = keys.len(), workers = deriver.num_workers(), "starting batch");

    let mut failed = 0;
    for entry in deriver.derive_all(&keys, chain) {
        match entry.result {
            Ok(address) => println!("{}", address),
            Err(e) => {
                failed += 1;
                eprintln!("key #{}: {}", entry.index + 1, e);
            }
        }
    }

    if failed > 0 {
        1
    } else {
        0
    }
}

fn read_input(input: &Path) -> io::Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(input)
    }
}

fn print_chains() {
    println!("{:<12} {:>8}  {}", "Chain", "Chain ID", "Scheme");
    for chain in ChainId::ALL {
        println!(
            "{:<12} {:>8}  {}",
            chain.name(),
            chain.evm_chain_id(),
            chain.scheme().name()
        );
    }
}
