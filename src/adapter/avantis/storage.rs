//! On-chain pair storage reader.
//!
//! Reads every listed pair from the Avantis pair storage contract through a
//! JSON-RPC provider. Pairs are fetched one index at a time, in index order.

use std::str::FromStr;

use alloy_primitives::{Address, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_sol_types::sol;
use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::{BackupFeed, Leverages, PairInfo, PairsInfo, PriceFeed};
use crate::error::{ConfigError, Error, Result};
use crate::port::PairsSource;

// Pair storage interface (read-only subset). The `pairs` getter returns the
// stored pair struct flattened into its members, in declaration order.
sol! {
    #[sol(rpc)]
    interface IPairStorage {
        struct Feed {
            uint256 maxOpenDeviationP;
            uint256 maxCloseDeviationP;
            bytes32 feedId;
        }

        struct BackupFeed {
            uint256 maxDeviationP;
            address feedId;
        }

        struct Leverage {
            uint256 minLeverage;
            uint256 maxLeverage;
            uint256 pnlMinLeverage;
            uint256 pnlMaxLeverage;
        }

        function pairsCount() external view returns (uint256);
        function pairs(uint256 index) external view returns (
            string memory from,
            string memory to,
            Feed memory feed,
            BackupFeed memory backupFeed,
            uint256 spreadP,
            uint256 pnlSpreadP,
            Leverage memory leverages,
            uint256 priceImpactMultiplier,
            uint256 skewImpactMultiplier,
            uint256 groupIndex,
            uint256 feeIndex,
            uint256 groupOpenInterestPecentage,
            uint256 maxWalletOI,
            bool isUSDCAligned
        );
    }
}

/// Pair storage contract bound to an HTTP provider.
#[derive(Clone)]
pub struct PairStorage {
    provider: DynProvider,
    address: Address,
}

impl PairStorage {
    /// Bind to the contract at `address` through `provider_url`.
    ///
    /// No request is made until pairs are fetched.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL or the address cannot be parsed.
    pub fn connect(provider_url: &str, address: &str) -> Result<Self> {
        let rpc_url: url::Url = provider_url.parse()?;
        let address = Address::from_str(address).map_err(|e| ConfigError::InvalidValue {
            field: "pair_storage",
            reason: e.to_string(),
        })?;
        let provider = ProviderBuilder::new().connect_http(rpc_url).erased();

        Ok(Self { provider, address })
    }

    /// Contract address being read.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }
}

fn pair_from_return(ret: IPairStorage::pairsReturn) -> PairInfo {
    PairInfo {
        from: ret.from,
        to: ret.to,
        feed: PriceFeed {
            max_open_deviation_p: ret.feed.maxOpenDeviationP,
            max_close_deviation_p: ret.feed.maxCloseDeviationP,
            feed_id: ret.feed.feedId,
        },
        backup_feed: BackupFeed {
            max_deviation_p: ret.backupFeed.maxDeviationP,
            feed_id: ret.backupFeed.feedId,
        },
        spread_p: ret.spreadP,
        pnl_spread_p: ret.pnlSpreadP,
        leverages: Leverages {
            min_leverage: ret.leverages.minLeverage,
            max_leverage: ret.leverages.maxLeverage,
            pnl_min_leverage: ret.leverages.pnlMinLeverage,
            pnl_max_leverage: ret.leverages.pnlMaxLeverage,
        },
        price_impact_multiplier: ret.priceImpactMultiplier,
        skew_impact_multiplier: ret.skewImpactMultiplier,
        group_index: ret.groupIndex,
        fee_index: ret.feeIndex,
        group_open_interest_p: ret.groupOpenInterestPecentage,
        max_wallet_oi: ret.maxWalletOI,
        is_usdc_aligned: ret.isUSDCAligned,
    }
}

#[async_trait]
impl PairsSource for PairStorage {
    async fn fetch_pairs(&self) -> Result<PairsInfo> {
        let storage = IPairStorage::new(self.address, &self.provider);

        let count: U256 = storage
            .pairsCount()
            .call()
            .await
            .map_err(|e| Error::Rpc(format!("Failed to read pairs count: {e}")))?;
        let count = u64::try_from(count)
            .map_err(|e| Error::Rpc(format!("Pairs count out of range: {e}")))?;
        debug!(count, contract = %self.address, "reading pairs");

        let mut pairs = PairsInfo::new();
        for index in 0..count {
            let ret = storage
                .pairs(U256::from(index))
                .call()
                .await
                .map_err(|e| Error::Rpc(format!("Failed to read pair {index}: {e}")))?;
            pairs.push(pair_from_return(ret));
        }

        info!(pairs = pairs.len(), "pairs fetched");
        Ok(pairs)
    }
}
