//! Bounded waits on page state.

use std::time::Duration;

use tokio::time::{sleep, timeout_at, Instant};
use tracing::debug;

use crate::domain::Locator;
use crate::error::{Error, RenderError, Result};
use crate::port::BrowserSession;

/// Poll until `locator` is visible or `timeout` elapses.
///
/// The locator is checked at least once, even with a zero timeout. Each
/// check is itself bounded by the deadline. A check that fails to evaluate
/// (for example while the page navigates or hydrates) counts as not yet
/// visible.
///
/// # Errors
///
/// Returns [`RenderError::Timeout`] when the deadline passes. Session errors
/// other than [`RenderError::Evaluate`] propagate immediately.
pub async fn expect_visible<B>(
    session: &mut B,
    locator: &Locator,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<()>
where
    B: BrowserSession + ?Sized,
{
    let deadline = Instant::now() + timeout;
    loop {
        match timeout_at(deadline, session.is_visible(locator)).await {
            Ok(Ok(true)) => {
                debug!(%locator, "visible");
                return Ok(());
            }
            Ok(Ok(false)) => {}
            Ok(Err(Error::Render(RenderError::Evaluate { reason, .. }))) => {
                debug!(%locator, %reason, "visibility check failed, retrying");
            }
            Ok(Err(e)) => return Err(e),
            Err(_) => debug!(%locator, "visibility check did not return before deadline"),
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(RenderError::Timeout {
                locator: locator.to_string(),
                timeout,
            }
            .into());
        }
        sleep(poll_interval.min(deadline - now)).await;
    }
}
