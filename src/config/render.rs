//! Render verification configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Settings for `defi-probe verify`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Frontend address to load.
    pub url: String,
    /// Accessible name of the heading that marks the page as rendered.
    pub heading: String,
    pub heading_timeout_ms: u64,
    /// Text that appears once the data has loaded.
    pub text: String,
    pub text_timeout_ms: u64,
    /// How often visibility is re-checked while waiting.
    pub poll_interval_ms: u64,
    /// Directory receiving both screenshots.
    pub screenshot_dir: PathBuf,
    pub success_file: String,
    pub error_file: String,
    /// Run without a visible window.
    pub headless: bool,
    /// Chrome sandboxing; disable when running as root in containers.
    pub sandbox: bool,
    /// Explicit Chrome/Chromium binary. Auto-detected when unset.
    pub chrome_executable: Option<PathBuf>,
}

impl RenderConfig {
    #[must_use]
    pub fn heading_timeout(&self) -> Duration {
        Duration::from_millis(self.heading_timeout_ms)
    }

    #[must_use]
    pub fn text_timeout(&self) -> Duration {
        Duration::from_millis(self.text_timeout_ms)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    #[must_use]
    pub fn success_screenshot(&self) -> PathBuf {
        self.screenshot_dir.join(&self.success_file)
    }

    #[must_use]
    pub fn error_screenshot(&self) -> PathBuf {
        self.screenshot_dir.join(&self.error_file)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000".into(),
            heading: "DeFi Borrowed Positions".into(),
            heading_timeout_ms: 30_000,
            text: "Total Borrowed (All Chains)".into(),
            text_timeout_ms: 60_000,
            poll_interval_ms: 100,
            screenshot_dir: PathBuf::from("/app/jules-scratch/verification"),
            success_file: "verification.png".into(),
            error_file: "error.png".into(),
            headless: true,
            sandbox: true,
            chrome_executable: None,
        }
    }
}
