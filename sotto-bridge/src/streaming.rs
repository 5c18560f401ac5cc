//! Real-time accumulation buffer and flush policy

use std::time::Instant;

use sotto_engine::{InferenceParams, SpeechEngine, SAMPLE_RATE};
use tracing::{debug, warn};

use crate::error::{Result, SessionError};
use crate::result::Transcript;
use crate::sink::SegmentSink;

/// Accumulated sample count that triggers an inference pass (2s at 16kHz)
pub const STEP_SAMPLES: usize = SAMPLE_RATE as usize * 2;

/// Trailing samples kept after a flush as acoustic context (0.5s at 16kHz)
pub const OVERLAP_SAMPLES: usize = SAMPLE_RATE as usize / 2;

/// Append-only accumulation buffer with a step-triggered flush policy.
///
/// Not a true ring buffer: a growable vector truncated from the front after
/// each flush, keeping the last [`OVERLAP_SAMPLES`] so the next window can
/// reference recent audio without re-transcribing already-consumed input.
/// The 2s step / 0.5s overlap trade transcription latency against inference
/// cost and continuity.
pub(crate) struct StreamingBuffer {
    active: bool,
    buffer: Vec<f32>,
    sink: Option<Box<dyn SegmentSink>>,
}

impl StreamingBuffer {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            buffer: Vec::new(),
            sink: None,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Begin a streaming session, discarding any abandoned previous state.
    /// Starting twice in a row is a restart, not an error.
    pub(crate) fn start(&mut self, sink: Box<dyn SegmentSink>) {
        self.buffer.clear();
        self.sink = Some(sink);
        self.active = true;
    }

    /// Append samples; flush through the engine once the step threshold is
    /// reached.
    ///
    /// A flush runs over the entire accumulator (not just the new chunk) so
    /// the engine sees enough acoustic context for usable greedy decoding,
    /// and delivers every produced segment to the sink in order before this
    /// call returns. The accumulator is truncated to its trailing overlap
    /// whether or not inference succeeded: a failed window drops its output
    /// but never stalls the stream.
    pub(crate) fn push(
        &mut self,
        engine: &mut dyn SpeechEngine,
        params: &InferenceParams,
        samples: &[f32],
    ) -> Result<()> {
        if !self.active {
            return Err(SessionError::NotStreaming);
        }
        if samples.is_empty() {
            return Err(SessionError::invalid_argument("audio buffer is empty"));
        }

        self.buffer.extend_from_slice(samples);

        if self.buffer.len() >= STEP_SAMPLES {
            match engine.run_inference(&self.buffer, params) {
                Ok(()) => {
                    let (_, segments) = deliver_segments(engine, self.sink.as_mut());
                    debug!(
                        window = self.buffer.len(),
                        segments, "streaming window flushed"
                    );
                }
                Err(e) => {
                    warn!(error = %e, window = self.buffer.len(), "streaming window dropped");
                }
            }

            let keep = self.buffer.len().min(OVERLAP_SAMPLES);
            self.buffer.drain(..self.buffer.len() - keep);
        }

        Ok(())
    }

    /// End the streaming session.
    ///
    /// Deactivates first, so a concurrent push queued behind the lock
    /// observes `NotStreaming`. Runs one final inference pass over whatever
    /// remains (multi-segment allowed), then releases the buffer and sink.
    /// Returns `None` when there was nothing to transcribe or the final
    /// pass failed.
    pub(crate) fn finish(
        &mut self,
        engine: &mut dyn SpeechEngine,
        params: &InferenceParams,
    ) -> Option<Transcript> {
        self.active = false;

        let result = if self.buffer.is_empty() {
            None
        } else {
            let started = Instant::now();
            match engine.run_inference(&self.buffer, params) {
                Ok(()) => {
                    let duration_ms = started.elapsed().as_millis() as u64;
                    let (text, segments) = deliver_segments(engine, self.sink.as_mut());
                    Some(Transcript {
                        text,
                        segments,
                        lang_id: engine.detected_language_id(),
                        lang_prob: 0.0,
                        duration_ms,
                    })
                }
                Err(e) => {
                    warn!(error = %e, remainder = self.buffer.len(), "final streaming pass failed");
                    None
                }
            }
        };

        self.buffer.clear();
        self.sink = None;
        result
    }
}

/// Join segment texts from the engine's last pass, forwarding each one to
/// the sink (when present) in segment order.
pub(crate) fn deliver_segments(
    engine: &dyn SpeechEngine,
    mut sink: Option<&mut Box<dyn SegmentSink>>,
) -> (String, usize) {
    let count = engine.segment_count();
    let mut joined = String::new();

    for index in 0..count {
        let Some(text) = engine.segment_text(index) else {
            continue;
        };
        if let Some(sink) = sink.as_deref_mut() {
            sink.on_segment(&text, false);
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(&text);
    }

    (joined, count)
}
