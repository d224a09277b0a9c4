//! Avantis trading client on Base.
//!
//! [`TraderClient`] bundles a provider-bound [`PairStorage`] with a
//! [`PairsCache`] in front of it.

mod cache;
mod storage;

pub use cache::PairsCache;
pub use storage::PairStorage;

#[cfg(test)]
pub(crate) use cache::tests::StaticPairs;

use crate::config::PairsConfig;
use crate::error::Result;

/// Read-only client for Avantis trading contracts.
pub struct TraderClient {
    pub pairs_cache: PairsCache<PairStorage>,
}

impl TraderClient {
    /// Build a client against `provider_url` using the default pair storage
    /// contract on Base mainnet.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn new(provider_url: &str) -> Result<Self> {
        Self::with_pair_storage(provider_url, crate::config::PAIR_STORAGE_BASE)
    }

    /// Build a client against an explicit pair storage contract.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL or the address cannot be parsed.
    pub fn with_pair_storage(provider_url: &str, pair_storage: &str) -> Result<Self> {
        let storage = PairStorage::connect(provider_url, pair_storage)?;
        Ok(Self {
            pairs_cache: PairsCache::new(storage),
        })
    }

    /// Build a client from the `[pairs]` config section.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL or address is invalid.
    pub fn from_config(config: &PairsConfig) -> Result<Self> {
        Self::with_pair_storage(&config.provider_url, &config.pair_storage)
    }
}
