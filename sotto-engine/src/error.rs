//! Error types for engine operations

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    /// Model loading error
    #[error("Model loading error: {0}")]
    ModelLoad(String),

    /// Inference error
    #[error("Inference error: {0}")]
    Inference(String),
}

impl EngineError {
    pub fn model_load<S: Into<String>>(msg: S) -> Self {
        Self::ModelLoad(msg.into())
    }

    pub fn inference<S: Into<String>>(msg: S) -> Self {
        Self::Inference(msg.into())
    }
}
