use std::io;

use tracing::info;

use crate::adapter::avantis::TraderClient;
use crate::app::probe;
use crate::config::PairsConfig;
use crate::error::Result;

/// Fetch pairs from the configured provider and print the first `limit`.
pub async fn execute(config: &PairsConfig) -> Result<()> {
    let client = TraderClient::from_config(config)?;
    info!(
        provider = %config.provider_url,
        contract = %client.pairs_cache.source().address(),
        "pairs probe starting"
    );

    let mut stdout = io::stdout();
    probe::run(&client.pairs_cache, config.limit, &mut stdout).await?;
    Ok(())
}
