//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`PairsSource`] - Perpetual pair metadata (on-chain pair storage)
//! - [`BrowserSession`] - Headless browser driving one page

mod browser;
mod pairs;

pub use browser::BrowserSession;
pub use pairs::PairsSource;
