//! Parallel address derivation for many private keys.
//!
//! Every derivation is independent, so keys are spread across a rayon
//! thread pool without any shared state. Results come back in input order.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use tracing::{debug, warn};

use crate::{derive_address, Address, ChainId, Error};

/// Result of deriving one key of a batch.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    /// Position of the key in the input (0-based)
    pub index: usize,
    /// The derived address, or why the key was rejected
    pub result: Result<Address, Error>,
}

impl BatchEntry {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Derives addresses for batches of keys on a dedicated thread pool.
pub struct BatchDeriver {
    /// Number of worker threads
    num_workers: usize,
    pool: ThreadPool,
}

impl BatchDeriver {
    /// Creates a deriver with `workers` threads (0 = one per CPU core).
    pub fn new(workers: usize) -> Result<Self, ThreadPoolBuildError> {
        let num_workers = if workers == 0 {
            num_cpus::get()
        } else {
            workers
        };

        let pool = ThreadPoolBuilder::new()
            .num_threads(num_workers)
            .thread_name(|i| format!("address-worker-{}", i))
            .build()?;

        Ok(Self { num_workers, pool })
    }

    /// Returns the number of worker threads.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Derives the address of every key. A bad key fails only its own entry.
    pub fn derive_all<S>(&self, keys: &[S], chain: ChainId) -> Vec<BatchEntry>
    where
        S: AsRef<str> + Sync,
    {
        debug!(keys = keys.len(), workers = self.num_workers, chain = %chain, "deriving batch");

        let entries: Vec<BatchEntry> = self.pool.install(|| {
            keys.par_iter()
                .enumerate()
                .map(|(index, key)| BatchEntry {
                    index,
                    result: derive_address(key.as_ref(), chain),
                })
                .collect()
        });

        let failed = entries.iter().filter(|entry| !entry.is_ok()).count();
        if failed > 0 {
            warn!(failed, total = entries.len(), "some keys could not be derived");
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeError;

    #[test]
    fn test_batch_preserves_order() {
        let deriver = BatchDeriver::new(2).unwrap();
        let keys = [
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0000000000000000000000000000000000000000000000000000000000000002",
        ];

        let entries = deriver.derive_all(&keys, ChainId::Ethereum);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].index, 0);
        assert_eq!(
            entries[0].result.as_ref().unwrap().display(),
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
        );
        assert_eq!(
            entries[1].result.as_ref().unwrap().display(),
            "0x2B5AD5c4795c026514f8317c7a215E218DcCD6cF"
        );
    }

    #[test]
    fn test_bad_key_does_not_abort_batch() {
        let deriver = BatchDeriver::new(0).unwrap();
        assert_eq!(deriver.num_workers(), num_cpus::get());

        let keys = vec![
            "not hex".to_string(),
            "727f677b390c151caf9c206fd77f77918f56904b5504243db9b21e51182c4c06".to_string(),
        ];
        let entries = deriver.derive_all(&keys, ChainId::BinanceSmartChain);

        assert!(matches!(
            entries[0].result,
            Err(Error::Decode(DecodeError::InvalidHex(_)))
        ));
        assert!(entries[1].is_ok());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let deriver = BatchDeriver::new(4).unwrap();
        let keys: Vec<String> = (0..64)
            .map(|_| crate::PrivateKey::generate().to_hex().to_string())
            .collect();

        let entries = deriver.derive_all(&keys, ChainId::Polygon);
        for (key, entry) in keys.iter().zip(&entries) {
            let expected = derive_address(key, ChainId::Polygon).unwrap();
            assert_eq!(entry.result.as_ref().unwrap(), &expected);
        }
    }
}
