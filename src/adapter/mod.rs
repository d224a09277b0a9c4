//! Implementations of ports (hexagonal adapters).

pub mod avantis;
pub mod chromium;
