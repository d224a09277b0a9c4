//! Pairs source port.

use async_trait::async_trait;

use crate::domain::PairsInfo;
use crate::error::Result;

/// Port for reading perpetual pair metadata.
///
/// # Errors
///
/// Transport and decoding failures are returned unchanged; implementations
/// neither retry nor time out on their own.
#[async_trait]
pub trait PairsSource: Send + Sync {
    /// Fetch every pair, in the order the source stores them.
    async fn fetch_pairs(&self) -> Result<PairsInfo>;
}
