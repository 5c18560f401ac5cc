//! Segment delivery sink for streaming sessions

/// Receiver for transcribed segments during a streaming session.
///
/// The session invokes the sink synchronously on the thread that triggered
/// the flush, while holding the session lock: deliveries for one flush are
/// in segment order and never interleave with another flush. A sink must
/// not call back into the session (the lock is not reentrant).
///
/// Any `FnMut(&str, bool) + Send` closure is a sink:
///
/// ```
/// use sotto_bridge::SegmentSink;
///
/// let mut lines: Vec<String> = Vec::new();
/// let mut sink = |text: &str, _is_partial: bool| lines.push(text.to_string());
/// sink.on_segment("hello", false);
/// assert_eq!(lines, ["hello"]);
/// ```
pub trait SegmentSink: Send {
    /// Called once per produced segment.
    ///
    /// `is_partial` mirrors the engine's finalize semantics; the current
    /// engine contract only ever delivers finalized segments (`false`).
    fn on_segment(&mut self, text: &str, is_partial: bool);
}

impl<F> SegmentSink for F
where
    F: FnMut(&str, bool) + Send,
{
    fn on_segment(&mut self, text: &str, is_partial: bool) {
        self(text, is_partial)
    }
}
