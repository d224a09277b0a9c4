//! defi-probe - diagnostics for Avantis pairs on Base and a DeFi frontend.
//!
//! Two independent checks share this crate:
//!
//! - **Pairs probe** - read the perpetual pairs from the Avantis pair
//!   storage contract and print the first few.
//! - **Render verification** - load the frontend in headless Chromium,
//!   wait for the positions page to render its totals, and keep a
//!   screenshot as evidence whether or not it did.
//!
//! # Modules
//!
//! - [`config`] - Optional TOML configuration with built-in defaults
//! - [`domain`] - Pair metadata and page locators
//! - [`port`] - Traits for pair sources and browser sessions
//! - [`adapter`] - Alloy-backed pair storage and chromiumoxide sessions
//! - [`app`] - The probe and verification flows
//! - [`cli`] - Command-line entry points
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use defi_probe::adapter::avantis::TraderClient;
//!
//! # async fn example() -> defi_probe::error::Result<()> {
//! let client = TraderClient::new("https://mainnet.base.org")?;
//! let pairs = client.pairs_cache.get_pairs_info(false).await?;
//! for (symbol, info) in pairs.iter().take(5) {
//!     println!("{symbol} {info}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
