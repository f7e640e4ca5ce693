//! Runner error type.

use thiserror::Error;

use chainhome_core::error::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("station already running")]
    AlreadyRunning,
    #[error("station not started")]
    NotStarted,
    #[error("station loop has stopped")]
    LoopStopped,
    #[error("shared state lock poisoned")]
    Poisoned,
    #[error("invalid argument `{0}`")]
    InvalidArgument(String),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to spawn station loop: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::Poisoned
    }
}
