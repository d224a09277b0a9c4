//! Transport-agnostic domain types.

pub mod locator;
pub mod pair;

pub use locator::Locator;
pub use pair::{BackupFeed, Leverages, PairInfo, PairsInfo, PriceFeed};
