//! Sotto transcription bridge
//!
//! Thread-safe batch and streaming transcription sessions over an opaque
//! speech engine. The hard part lives here: accumulating unbounded audio
//! into bounded memory, deciding when enough has arrived to run inference,
//! carrying short-term acoustic context across windows, and keeping every
//! configure/push/stop call safe to issue from any thread.
//!
//! ## Architecture
//!
//! ```text
//! host audio (16kHz mono f32)
//!   │
//!   ├─> Session::transcribe ──────────> Transcript        (batch, one pass)
//!   │
//!   └─> Session::push_audio
//!         │
//!         └─> StreamingBuffer ── step reached? ──> SpeechEngine
//!               │                                    │
//!               │   keep 0.5s overlap                └─> SegmentSink
//!               │
//!         Session::stop_stream ── final pass ──────> Transcript
//! ```
//!
//! Everything runs under one per-session mutex: inference, buffer mutation
//! and sink delivery for a given call execute sequentially on the calling
//! thread. See [`Session`] for the blocking caveats.
//!
//! ## Quick Start
//!
//! ```
//! use sotto_bridge::{Session, SessionConfig};
//! use sotto_engine::{EngineError, InferenceParams, SpeechEngine};
//!
//! // Hosts bring their own engine; the `whisper` feature provides a
//! // whisper.cpp backend and `Session::open(config)`.
//! struct Silent;
//!
//! impl SpeechEngine for Silent {
//!     fn run_inference(&mut self, _samples: &[f32], _params: &InferenceParams)
//!         -> Result<(), EngineError> { Ok(()) }
//!     fn segment_count(&self) -> usize { 0 }
//!     fn segment_text(&self, _index: usize) -> Option<String> { None }
//!     fn detected_language_id(&self) -> i32 { -1 }
//!     fn language_id(&self, _code: &str) -> Option<i32> { None }
//! }
//!
//! let session = Session::with_engine(Silent, SessionConfig::default())?;
//!
//! session.start_stream(|text: &str, _is_partial: bool| {
//!     println!("segment: {text}");
//! });
//! session.push_audio(&vec![0.0; 16_000])?;
//! let final_result = session.stop_stream();
//! assert_eq!(final_result.segments, 0);
//! # Ok::<(), sotto_bridge::SessionError>(())
//! ```

pub mod config;
pub mod error;
pub mod pcm;
pub mod result;
pub mod session;
pub mod sink;
pub mod wav;

mod streaming;

pub use config::{SessionConfig, DEFAULT_THREADS};
pub use error::{Result, SessionError};
pub use result::Transcript;
pub use session::{Language, Session};
pub use sink::SegmentSink;
pub use streaming::{OVERLAP_SAMPLES, STEP_SAMPLES};

// Engine-facing types hosts need to implement or configure
pub use sotto_engine::{EngineError, InferenceParams, SpeechEngine, SAMPLE_RATE};

/// Bridge version string
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
