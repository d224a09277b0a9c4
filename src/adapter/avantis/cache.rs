//! Lazily populated pairs cache.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::PairsInfo;
use crate::error::Result;
use crate::port::PairsSource;

/// Caches the pairs read from a [`PairsSource`].
///
/// The first call fetches; later calls reuse the stored value unless a
/// refresh is forced. Concurrent callers wait for a single in-flight fetch.
pub struct PairsCache<S> {
    source: S,
    pairs: Mutex<Option<Arc<PairsInfo>>>,
}

impl<S: PairsSource> PairsCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pairs: Mutex::new(None),
        }
    }

    /// Return the cached pairs, fetching them first if needed.
    ///
    /// # Errors
    ///
    /// Returns the source error unchanged. A failed fetch leaves any
    /// previously cached value in place.
    pub async fn get_pairs_info(&self, force_update: bool) -> Result<Arc<PairsInfo>> {
        let mut guard = self.pairs.lock().await;
        if !force_update {
            if let Some(pairs) = guard.as_ref() {
                debug!(pairs = pairs.len(), "pairs cache hit");
                return Ok(Arc::clone(pairs));
            }
        }

        let pairs = Arc::new(self.source.fetch_pairs().await?);
        *guard = Some(Arc::clone(&pairs));
        Ok(pairs)
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
