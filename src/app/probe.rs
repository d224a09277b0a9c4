//! Pairs probe: fetch once, print the first few pairs.

use std::io::Write;

use tracing::info;

use crate::adapter::avantis::PairsCache;
use crate::error::Result;
use crate::port::PairsSource;

/// Line printed before the fetch starts.
pub const FETCH_BANNER: &str = "Fetching Avantis perp pairs via SDK...";

/// Fetch pairs through `cache` and print at most `limit` of them to `out`.
///
/// Each pair is one line, `"{symbol} {info}"`, in source order. Returns
/// the number of pair lines written.
///
/// # Errors
///
/// Source failures propagate untouched; no pair lines are written then.
pub async fn run<S, W>(cache: &PairsCache<S>, limit: usize, out: &mut W) -> Result<usize>
where
    S: PairsSource,
    W: Write,
{
    writeln!(out, "{FETCH_BANNER}")?;
    out.flush()?;

    let pairs = cache.get_pairs_info(false).await?;

    let mut printed = 0;
    for (symbol, info) in pairs.iter().take(limit) {
        writeln!(out, "{symbol} {info}")?;
        printed += 1;
    }

    info!(total = pairs.len(), printed, "pairs probe finished");
    Ok(printed)
}
