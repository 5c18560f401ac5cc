//! Speech engine capability interface for the sotto transcription bridge
//!
//! The bridge treats the recognition engine as an opaque collaborator: it
//! hands over a window of 16kHz mono f32 samples plus per-call parameters,
//! and reads back segment texts and a detected-language id. Everything else
//! (model weights, decoding, GPU scheduling) stays behind this trait.
//!
//! The optional `whisper` feature provides a whisper.cpp backend via
//! `whisper-rs`. Default builds carry no backend at all; hosts and tests
//! supply their own [`SpeechEngine`] implementation.
//!
//! # Example
//!
//! ```
//! use sotto_engine::{EngineError, InferenceParams, SpeechEngine};
//!
//! /// An engine that hears nothing.
//! struct Silent;
//!
//! impl SpeechEngine for Silent {
//!     fn run_inference(&mut self, _samples: &[f32], _params: &InferenceParams)
//!         -> Result<(), EngineError> { Ok(()) }
//!     fn segment_count(&self) -> usize { 0 }
//!     fn segment_text(&self, _index: usize) -> Option<String> { None }
//!     fn detected_language_id(&self) -> i32 { -1 }
//!     fn language_id(&self, code: &str) -> Option<i32> {
//!         (code == "en").then_some(0)
//!     }
//! }
//!
//! let mut engine = Silent;
//! engine.run_inference(&[0.0; 16_000], &InferenceParams::default()).unwrap();
//! assert_eq!(engine.segment_count(), 0);
//! ```

pub mod error;

#[cfg(feature = "whisper")]
pub mod whisper;

pub use error::{EngineError, Result};

#[cfg(feature = "whisper")]
pub use whisper::WhisperEngine;

/// Sample rate every engine input must use (16kHz mono)
pub const SAMPLE_RATE: u32 = 16_000;

/// Per-call inference parameters.
///
/// The session derives a fresh value from its current configuration for
/// every inference pass: greedy decoding with a single best candidate, no
/// prior-context conditioning, no timestamps. Only the fields below vary.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceParams {
    /// Language code to decode in; `None` asks the engine to detect it
    pub language: Option<String>,
    /// Number of inference threads
    pub n_threads: i32,
    /// Force the engine to emit at most one segment for this window
    pub single_segment: bool,
    /// Translate to English instead of transcribing
    pub translate: bool,
}

impl Default for InferenceParams {
    fn default() -> Self {
        Self {
            language: None,
            n_threads: 4,
            single_segment: false,
            translate: false,
        }
    }
}

/// Capability interface consumed by the transcription session.
///
/// One implementation instance backs exactly one session; the session owns
/// it exclusively and serializes every call, so implementations see a
/// strictly alternating `run_inference` / accessor sequence from a single
/// thread at a time. Accessors refer to the most recent successful
/// `run_inference` call.
pub trait SpeechEngine: Send {
    /// Run one inference pass over a window of 16kHz mono f32 samples.
    ///
    /// On success the segment accessors below describe the produced output
    /// until the next call.
    fn run_inference(&mut self, samples: &[f32], params: &InferenceParams) -> Result<()>;

    /// Number of segments produced by the last successful inference pass
    fn segment_count(&self) -> usize;

    /// Text of segment `index`, or `None` if out of range
    fn segment_text(&self, index: usize) -> Option<String>;

    /// Language id detected by the last inference pass, `-1` if unknown
    fn detected_language_id(&self) -> i32;

    /// Map a language code to the engine's language id, `None` if the
    /// engine does not know the code
    fn language_id(&self, code: &str) -> Option<i32>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = InferenceParams::default();
        assert_eq!(params.language, None);
        assert_eq!(params.n_threads, 4);
        assert!(!params.single_segment);
        assert!(!params.translate);
    }

    #[test]
    fn test_engine_is_object_safe() {
        struct Stub;

        impl SpeechEngine for Stub {
            fn run_inference(&mut self, _samples: &[f32], _params: &InferenceParams) -> Result<()> {
                Err(EngineError::inference("stub"))
            }
            fn segment_count(&self) -> usize {
                0
            }
            fn segment_text(&self, _index: usize) -> Option<String> {
                None
            }
            fn detected_language_id(&self) -> i32 {
                -1
            }
            fn language_id(&self, _code: &str) -> Option<i32> {
                None
            }
        }

        let mut boxed: Box<dyn SpeechEngine> = Box::new(Stub);
        assert!(boxed.run_inference(&[], &InferenceParams::default()).is_err());
    }

    #[test]
    fn test_error_helpers() {
        let err = EngineError::model_load("no such file");
        assert!(err.to_string().contains("no such file"));

        let err = EngineError::inference("decode failed");
        assert!(err.to_string().contains("decode failed"));
    }
}
