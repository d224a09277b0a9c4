//! Browser session port for rendered page checks.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::Locator;
use crate::error::Result;

/// A live browser with one open page.
///
/// Launching is the adapter's concern; a session handed to the
/// verification flow is already running and must be closed by it.
///
/// # Errors
///
/// Every method returns [`Result`] for engine and I/O failures.
#[async_trait]
pub trait BrowserSession: Send {
    /// Navigate the page to `url` and wait for the load to finish.
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// Whether an element matching `locator` is currently visible.
    ///
    /// No waiting happens here; callers poll.
    async fn is_visible(&mut self, locator: &Locator) -> Result<bool>;

    /// Capture the viewport as PNG into `path`.
    async fn screenshot(&mut self, path: &Path) -> Result<()>;

    /// Shut the browser down and release its process.
    async fn close(&mut self) -> Result<()>;
}
