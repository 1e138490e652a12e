//! Error types for the trainer.

use thiserror::Error;

use crate::config::ConfigError;
use crate::source::SourceError;

#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Card source error: {0}")]
    Source(#[from] SourceError),

    #[error("Training error: {0}")]
    Training(#[from] training_core::TrainingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Progress reporter needs a running Tokio runtime")]
    NoRuntime,
}

pub type Result<T> = std::result::Result<T, TrainerError>;
