//! Headless Chromium driven over the DevTools protocol.
//!
//! [`ChromiumSession::launch`] starts the browser, spawns the protocol
//! handler on the tokio runtime, and opens a single blank page.

mod script;

use std::path::Path;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::RenderConfig;
use crate::domain::Locator;
use crate::error::{RenderError, Result};
use crate::port::BrowserSession;

pub use script::visibility_check;

/// A running browser with one page.
pub struct ChromiumSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl ChromiumSession {
    /// Launch the browser and open a blank page.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Launch`] if the browser binary cannot be found
    /// or started, or the first page cannot be opened.
    pub async fn launch(config: &RenderConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder();
        if !config.headless {
            builder = builder.with_head();
        }
        if !config.sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(path) = &config.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        let browser_config = builder.build().map_err(RenderError::Launch)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| RenderError::Launch(e.to_string()))?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!(error = %e, "browser handler stopped");
                    break;
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                handler.abort();
                return Err(RenderError::Launch(format!("failed to open page: {e}")).into());
            }
        };

        info!(headless = config.headless, "browser launched");
        Ok(Self {
            browser,
            page,
            handler,
        })
    }
}

#[async_trait]
impl BrowserSession for ChromiumSession {
    async fn goto(&mut self, url: &str) -> Result<()> {
        debug!(url, "navigating");
        self.page
            .goto(url)
            .await
            .map_err(|e| RenderError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    async fn is_visible(&mut self, locator: &Locator) -> Result<bool> {
        let evaluate_error = |reason: String| RenderError::Evaluate {
            locator: locator.to_string(),
            reason,
        };

        let result = self
            .page
            .evaluate(visibility_check(locator))
            .await
            .map_err(|e| evaluate_error(e.to_string()))?;
        let visible = result
            .into_value::<bool>()
            .map_err(|e| evaluate_error(e.to_string()))?;
        Ok(visible)
    }

    async fn screenshot(&mut self, path: &Path) -> Result<()> {
        let screenshot_error = |reason: String| RenderError::Screenshot {
            path: path.to_path_buf(),
            reason,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| screenshot_error(e.to_string()))?;
        }

        self.page
            .save_screenshot(ScreenshotParams::builder().build(), path)
            .await
            .map_err(|e| screenshot_error(e.to_string()))?;
        debug!(path = %path.display(), "screenshot saved");
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        let closed = self.browser.close().await;
        if let Err(e) = self.browser.wait().await {
            warn!(error = %e, "failed to reap browser process");
        }
        self.handler.abort();

        closed.map_err(|e| RenderError::Close(e.to_string()))?;
        info!("browser closed");
        Ok(())
    }
}
