//! Error types for training-core.

use thiserror::Error;

/// Result type alias using TrainingError.
pub type Result<T> = std::result::Result<T, TrainingError>;

/// Errors raised while setting up a training run.
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("no cards to train")]
    EmptyQueue,

    #[error("unknown direction: {0}")]
    UnknownDirection(String),
}
