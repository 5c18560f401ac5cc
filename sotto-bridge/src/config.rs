//! Session configuration

use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};

/// Default number of inference threads
pub const DEFAULT_THREADS: i32 = 4;

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path to the model file consumed by the engine backend.
    /// Only [`Session::open`](crate::Session::open) reads this; sessions
    /// built over a caller-supplied engine ignore it.
    pub model_path: String,

    /// Language code ("auto" for detection, default: "auto")
    pub language: String,

    /// Number of inference threads (default: 4)
    /// Non-positive values are clamped to the default
    pub n_threads: i32,

    /// Request GPU acceleration when loading the engine (default: true).
    /// The engine falls back to CPU on its own; this is only a hint.
    pub use_gpu: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            model_path: String::new(),
            language: "auto".to_string(),
            n_threads: DEFAULT_THREADS,
            use_gpu: true,
        }
    }
}

impl SessionConfig {
    /// Create config with model path
    pub fn with_model<S: Into<String>>(model_path: S) -> Self {
        Self {
            model_path: model_path.into(),
            ..Default::default()
        }
    }

    /// Set the language code
    pub fn language<S: Into<String>>(mut self, code: S) -> Self {
        self.language = code.into();
        self
    }

    /// Set the number of inference threads
    pub fn threads(mut self, n_threads: i32) -> Self {
        self.n_threads = n_threads;
        self
    }

    /// Set the GPU acceleration hint
    pub fn use_gpu(mut self, use_gpu: bool) -> Self {
        self.use_gpu = use_gpu;
        self
    }

    /// Validate configuration for engine loading
    pub(crate) fn validate(&self) -> Result<()> {
        if self.model_path.is_empty() {
            return Err(SessionError::initialization("model path is required"));
        }
        Ok(())
    }
}

/// Clamp a requested thread count to something usable
pub(crate) fn clamp_threads(n_threads: i32) -> i32 {
    if n_threads > 0 {
        n_threads
    } else {
        DEFAULT_THREADS
    }
}
