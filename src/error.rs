//! Crate error type

use thiserror::Error;

/// Errors raised while building or driving a simulation
#[derive(Debug, Error)]
pub enum WaveError {
    /// A scene parameter that would break the kernel math (zero-length wave, empty field, ...)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Display sink or config file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed or serialized
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WaveError>;

impl WaveError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        WaveError::InvalidConfiguration(msg.into())
    }
}
