//! Transcription result record

use serde::{Deserialize, Serialize};

/// Result of one transcription pass (batch call or final streaming pass).
///
/// The text is an owned copy; holding on to it never races with later calls
/// on the same session. The session additionally remembers the most recent
/// joined text, queryable via
/// [`Session::last_transcript`](crate::Session::last_transcript).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Joined text of all produced segments
    pub text: String,
    /// Number of segments produced
    pub segments: usize,
    /// Detected language id, `-1` if unknown
    pub lang_id: i32,
    /// Language detection probability. Always `0.0`: the engine contract
    /// does not surface a usable confidence score. Known limitation, kept
    /// so the record shape stays stable.
    pub lang_prob: f32,
    /// Wall-clock duration of the inference pass in milliseconds
    pub duration_ms: u64,
}

impl Transcript {
    /// The empty sentinel returned when there was nothing to transcribe or
    /// the engine failed to produce output
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            segments: 0,
            lang_id: -1,
            lang_prob: 0.0,
            duration_ms: 0,
        }
    }

    /// True if this is the empty sentinel
    pub fn is_empty(&self) -> bool {
        self.segments == 0 && self.text.is_empty()
    }
}
