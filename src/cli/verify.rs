use std::io;

use tracing::info;

use crate::adapter::chromium::ChromiumSession;
use crate::app::verify::{self, Verification, VerificationPlan};
use crate::config::RenderConfig;
use crate::error::{Error, Result};

/// Launch a browser and verify the frontend renders.
///
/// A failed verification still exits cleanly unless `strict` is set; the
/// printed message and the error screenshot are the report. Failing to
/// launch the browser is always an error.
pub async fn execute(config: &RenderConfig, strict: bool) -> Result<()> {
    let plan = VerificationPlan::from_config(config);
    info!(url = %plan.url, "render verification starting");

    let mut session = ChromiumSession::launch(config).await?;
    let mut stdout = io::stdout();
    let outcome = verify::run(&mut session, &plan, &mut stdout).await?;

    if !strict || outcome.is_verified() {
        return Ok(());
    }
    match outcome {
        Verification::Failed { message, .. } => Err(Error::VerificationFailed(message)),
        Verification::Verified { .. } => Ok(()),
    }
}
