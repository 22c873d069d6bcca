//! Error types for the Dendrite CLI.

use std::io;

use thiserror::Error;

use dendrite::ConfigError;

/// Failures the CLI can hit before or after the layout itself; placement
/// never fails, so everything here is I/O or input-format trouble.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid layout configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("could not parse configuration file: {0}")]
    ConfigFormat(#[from] toml::de::Error),

    #[error("could not parse outline: {0}")]
    OutlineFormat(#[from] serde_json::Error),
}
