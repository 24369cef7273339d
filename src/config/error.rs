//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating a [`MachineConfig`](super::MachineConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Bounded actions must last at least one tick
    #[error("Action duration must be at least one tick")]
    ZeroTicks,

    /// Abort and start signals must be distinct, case-insensitively
    #[error("Abort key '{0}' collides with start key")]
    KeyCollision(char),

    /// Key bindings must be visible ASCII letters or digits
    #[error("Invalid key binding '{0}'")]
    InvalidKey(char),
}
