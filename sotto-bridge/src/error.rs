//! Error types for session operations

use thiserror::Error;

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Session error types.
///
/// Every failure is recovered at the operation boundary and reported as a
/// value; nothing in this crate panics across the public API. Inference
/// failures are deliberately absent here: a transient engine hiccup is
/// surfaced as an empty [`Transcript`](crate::Transcript) so it never tears
/// down the session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Bad model path or engine load failure; fatal to that session,
    /// no session object is produced
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// Unknown language code; session state is left unchanged
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// Empty audio buffer or similar caller mistake; the operation is a
    /// no-op besides reporting the failure
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Push without an active streaming session
    #[error("Streaming session is not active")]
    NotStreaming,

    /// Audio file could not be read or has the wrong format
    #[error("Audio load error: {0}")]
    AudioLoad(String),
}

impl SessionError {
    pub fn initialization<S: Into<String>>(msg: S) -> Self {
        Self::Initialization(msg.into())
    }

    pub fn invalid_language<S: Into<String>>(code: S) -> Self {
        Self::InvalidLanguage(code.into())
    }

    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn audio_load<S: Into<String>>(msg: S) -> Self {
        Self::AudioLoad(msg.into())
    }
}
