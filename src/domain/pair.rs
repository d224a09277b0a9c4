//! Perpetual pair metadata as stored by the trading contracts.
//!
//! - [`PairInfo`] - One tradable pair with its oracle feeds, spreads and limits
//! - [`PairsInfo`] - Pairs keyed by symbol, in source order

use std::fmt;

use alloy_primitives::{Address, B256, U256};

/// Primary Pyth price feed of a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFeed {
    pub max_open_deviation_p: U256,
    pub max_close_deviation_p: U256,
    /// Pyth price feed id.
    pub feed_id: B256,
}

/// Fallback Chainlink feed used when the primary price deviates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFeed {
    pub max_deviation_p: U256,
    /// Chainlink aggregator address.
    pub feed_id: Address,
}

/// Leverage bounds, for regular and zero-fee (pnl) trades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leverages {
    pub min_leverage: U256,
    pub max_leverage: U256,
    pub pnl_min_leverage: U256,
    pub pnl_max_leverage: U256,
}

/// Metadata for a single perpetual pair.
///
/// Values are carried as returned by the pair storage contract, in its
/// fixed-point units; nothing here is validated or rescaled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairInfo {
    pub from: String,
    pub to: String,
    pub feed: PriceFeed,
    pub backup_feed: BackupFeed,
    pub spread_p: U256,
    pub pnl_spread_p: U256,
    pub leverages: Leverages,
    pub price_impact_multiplier: U256,
    pub skew_impact_multiplier: U256,
    pub group_index: U256,
    pub fee_index: U256,
    pub group_open_interest_p: U256,
    pub max_wallet_oi: U256,
    pub is_usdc_aligned: bool,
}

impl PairInfo {
    /// Trading symbol, e.g. `ETH/USD`.
    #[must_use]
    pub fn symbol(&self) -> String {
        format!("{}/{}", self.from, self.to)
    }
}

impl fmt::Display for PairInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "from={} to={} feed_id={} max_open_deviation_p={} max_close_deviation_p={} \
             backup_feed={} backup_max_deviation_p={} spread_p={} pnl_spread_p={} \
             leverage={}..{} pnl_leverage={}..{} price_impact={} skew_impact={} \
             group_index={} fee_index={} group_oi_p={} max_wallet_oi={} usdc_aligned={}",
            self.from,
            self.to,
            self.feed.feed_id,
            self.feed.max_open_deviation_p,
            self.feed.max_close_deviation_p,
            self.backup_feed.feed_id,
            self.backup_feed.max_deviation_p,
            self.spread_p,
            self.pnl_spread_p,
            self.leverages.min_leverage,
            self.leverages.max_leverage,
            self.leverages.pnl_min_leverage,
            self.leverages.pnl_max_leverage,
            self.price_impact_multiplier,
            self.skew_impact_multiplier,
            self.group_index,
            self.fee_index,
            self.group_open_interest_p,
            self.max_wallet_oi,
            self.is_usdc_aligned,
        )
    }
}

/// Pairs keyed by symbol.
///
/// Iteration follows insertion order, which is the order the source
/// returned the pairs in. Nothing is sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairsInfo {
    entries: Vec<(String, PairInfo)>,
}

impl PairsInfo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair under its own symbol.
    pub fn push(&mut self, info: PairInfo) {
        self.entries.push((info.symbol(), info));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(symbol, info)` entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PairInfo)> {
        self.entries.iter().map(|(key, info)| (key.as_str(), info))
    }
}

impl FromIterator<PairInfo> for PairsInfo {
    fn from_iter<I: IntoIterator<Item = PairInfo>>(iter: I) -> Self {
        let mut pairs = Self::new();
        for info in iter {
            pairs.push(info);
        }
        pairs
    }
}
