//! Pairs probe configuration.

use serde::Deserialize;

/// Public Base mainnet RPC endpoint.
pub const BASE_MAINNET_RPC: &str = "https://mainnet.base.org";

/// Avantis pair storage contract on Base mainnet.
pub const PAIR_STORAGE_BASE: &str = "0x5db3772136e5557EFE028Db05EE95C84D76faEC4";

/// Number of pairs printed by default.
pub const DEFAULT_PAIR_LIMIT: usize = 5;

/// Settings for `defi-probe pairs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PairsConfig {
    /// JSON-RPC endpoint of the chain hosting the trading contracts.
    pub provider_url: String,
    /// Address of the pair storage contract.
    pub pair_storage: String,
    /// Maximum number of pairs to print.
    pub limit: usize,
}

impl Default for PairsConfig {
    fn default() -> Self {
        Self {
            provider_url: BASE_MAINNET_RPC.into(),
            pair_storage: PAIR_STORAGE_BASE.into(),
            limit: DEFAULT_PAIR_LIMIT,
        }
    }
}
