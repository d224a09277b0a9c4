//! Command-line interface definitions.

pub mod config;
pub mod output;
pub mod pairs;
pub mod verify;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::{Config, PairsConfig, RenderConfig};
use crate::error::Result;

/// defi-probe - Avantis pairs probe and frontend render check.
#[derive(Parser, Debug)]
#[command(name = "defi-probe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to ./defi-probe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch Avantis perp pairs and print the first few
    Pairs(PairsArgs),

    /// Load the frontend headlessly and screenshot the rendered positions page
    Verify(VerifyArgs),

    /// Validate configuration and show effective settings
    Config,
}

/// Arguments for the `pairs` subcommand.
#[derive(Parser, Debug, Default)]
pub struct PairsArgs {
    /// Override the JSON-RPC provider URL
    #[arg(long)]
    pub provider_url: Option<String>,

    /// Override the pair storage contract address
    #[arg(long)]
    pub pair_storage: Option<String>,

    /// Override how many pairs to print
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

impl PairsArgs {
    fn apply(&self, config: &mut PairsConfig) {
        if let Some(url) = &self.provider_url {
            config.provider_url.clone_from(url);
        }
        if let Some(address) = &self.pair_storage {
            config.pair_storage.clone_from(address);
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
    }
}

/// Arguments for the `verify` subcommand.
#[derive(Parser, Debug, Default)]
pub struct VerifyArgs {
    /// Override the frontend URL
    #[arg(long)]
    pub url: Option<String>,

    /// Override the screenshot directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Show the browser window
    #[arg(long)]
    pub headed: bool,

    /// Disable the Chrome sandbox (needed when running as root)
    #[arg(long)]
    pub no_sandbox: bool,

    /// Exit nonzero when verification fails
    #[arg(long)]
    pub strict: bool,
}

impl VerifyArgs {
    fn apply(&self, config: &mut RenderConfig) {
        if let Some(url) = &self.url {
            config.url.clone_from(url);
        }
        if let Some(dir) = &self.out_dir {
            config.screenshot_dir.clone_from(dir);
        }
        if self.headed {
            config.headless = false;
        }
        if self.no_sandbox {
            config.sandbox = false;
        }
    }
}

/// Load configuration, apply overrides, and run the selected command.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the command fails.
pub async fn execute(cli: Cli) -> Result<()> {
    let (mut config, source) = Config::discover(cli.config.as_deref())?;

    match &cli.command {
        Commands::Pairs(args) => args.apply(&mut config.pairs),
        Commands::Verify(args) => args.apply(&mut config.render),
        Commands::Config => {}
    }
    config.validate()?;
    config.init_logging();

    match &source {
        Some(path) => debug!(path = %path.display(), "configuration loaded"),
        None => debug!("no config file found, using defaults"),
    }

    match cli.command {
        Commands::Pairs(_) => pairs::execute(&config.pairs).await,
        Commands::Verify(args) => verify::execute(&config.render, args.strict).await,
        Commands::Config => {
            config::execute(&config, source.as_deref());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_overrides_replace_config_values() {
        let mut config = PairsConfig::default();
        let args = PairsArgs {
            provider_url: Some("http://127.0.0.1:8545".into()),
            pair_storage: None,
            limit: Some(2),
        };

        args.apply(&mut config);

        assert_eq!(config.provider_url, "http://127.0.0.1:8545");
        assert_eq!(config.pair_storage, crate::config::PAIR_STORAGE_BASE);
        assert_eq!(config.limit, 2);
    }

    #[test]
    fn verify_flags_only_touch_what_they_name() {
        let mut config = RenderConfig::default();
        let args = VerifyArgs {
            out_dir: Some(PathBuf::from("/tmp/shots")),
            headed: true,
            ..VerifyArgs::default()
        };

        args.apply(&mut config);

        assert!(!config.headless);
        assert!(config.sandbox);
        assert_eq!(config.url, "http://localhost:3000");
        assert_eq!(
            config.success_screenshot(),
            PathBuf::from("/tmp/shots/verification.png")
        );
    }

    #[test]
    fn parses_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["defi-probe", "pairs", "--config", "x.toml", "-n", "3"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        match cli.command {
            Commands::Pairs(args) => assert_eq!(args.limit, Some(3)),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
