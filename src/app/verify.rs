//! Render verification: load the frontend, wait for it to show data, and
//! keep a screenshot as evidence either way.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use super::expect::expect_visible;
use crate::config::RenderConfig;
use crate::domain::Locator;
use crate::error::Result;
use crate::port::BrowserSession;

pub const SUCCESS_MESSAGE: &str = "Screenshot taken successfully.";

/// What to load, what to wait for, and where to write evidence.
#[derive(Debug, Clone)]
pub struct VerificationPlan {
    pub url: String,
    pub heading: Locator,
    pub heading_timeout: Duration,
    pub text: Locator,
    pub text_timeout: Duration,
    pub poll_interval: Duration,
    pub success_screenshot: PathBuf,
    pub error_screenshot: PathBuf,
}

impl VerificationPlan {
    #[must_use]
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            url: config.url.clone(),
            heading: Locator::role("heading", config.heading.clone()),
            heading_timeout: config.heading_timeout(),
            text: Locator::text(config.text.clone()),
            text_timeout: config.text_timeout(),
            poll_interval: config.poll_interval(),
            success_screenshot: config.success_screenshot(),
            error_screenshot: config.error_screenshot(),
        }
    }
}

/// Outcome of a verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Verified {
        screenshot: PathBuf,
    },
    Failed {
        message: String,
        /// Diagnostic screenshot, if one could be captured.
        screenshot: Option<PathBuf>,
    },
}

impl Verification {
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        matches!(self, Self::Verified { .. })
    }
}

/// Run the verification against an open session, then close it.
///
/// Any failure while navigating, waiting, or taking the success screenshot
/// is reported on `out` and answered with a screenshot at
/// `plan.error_screenshot`; it never escapes as an error. The session is
/// closed exactly once on every path, and a failing close is only logged.
///
/// # Errors
///
/// Only failures to write to `out` are returned. The error screenshot is
/// taken before the report is written, and the session is still closed.
pub async fn run<B, W>(session: &mut B, plan: &VerificationPlan, out: &mut W) -> Result<Verification>
where
    B: BrowserSession + ?Sized,
    W: Write,
{
    let outcome = attempt(session, plan, out).await;

    if let Err(e) = session.close().await {
        warn!(error = %e, "failed to close browser");
    }

    outcome
}

async fn attempt<B, W>(session: &mut B, plan: &VerificationPlan, out: &mut W) -> Result<Verification>
where
    B: BrowserSession + ?Sized,
    W: Write,
{
    match steps(session, plan).await {
        Ok(()) => {
            writeln!(out, "{SUCCESS_MESSAGE}")?;
            info!(path = %plan.success_screenshot.display(), "render verified");
            Ok(Verification::Verified {
                screenshot: plan.success_screenshot.clone(),
            })
        }
        Err(e) => {
            let message = e.to_string();
            warn!(error = %message, "render verification failed");

            let screenshot = match session.screenshot(&plan.error_screenshot).await {
                Ok(()) => Some(plan.error_screenshot.clone()),
                Err(e) => {
                    warn!(error = %e, "failed to capture error screenshot");
                    None
                }
            };
            writeln!(out, "An error occurred: {message}")?;
            Ok(Verification::Failed {
                message,
                screenshot,
            })
        }
    }
}

async fn steps<B>(session: &mut B, plan: &VerificationPlan) -> Result<()>
where
    B: BrowserSession + ?Sized,
{
    session.goto(&plan.url).await?;
    expect_visible(session, &plan.heading, plan.heading_timeout, plan.poll_interval).await?;
    expect_visible(session, &plan.text, plan.text_timeout, plan.poll_interval).await?;
    session.screenshot(&plan.success_screenshot).await?;
    Ok(())
}
