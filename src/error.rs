use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Browser automation errors raised while verifying a rendered page.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to launch browser: {0}")]
    Launch(String),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error(
        "Timed out {}ms waiting for expect({locator}).to_be_visible()",
        .timeout.as_millis()
    )]
    Timeout { locator: String, timeout: Duration },

    #[error("failed to evaluate {locator}: {reason}")]
    Evaluate { locator: String, reason: String },

    #[error("failed to save screenshot to {}: {reason}", .path.display())]
    Screenshot { path: PathBuf, reason: String },

    #[error("failed to close browser: {0}")]
    Close(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("verification failed: {0}")]
    VerificationFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
