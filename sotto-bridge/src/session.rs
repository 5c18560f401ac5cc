//! Transcription session: configuration, batch path, streaming control

use std::time::Instant;

use parking_lot::Mutex;
use sotto_engine::{InferenceParams, SpeechEngine};
use tracing::{debug, info, warn};

use crate::config::{clamp_threads, SessionConfig};
use crate::error::{Result, SessionError};
use crate::result::Transcript;
use crate::sink::SegmentSink;
use crate::streaming::{deliver_segments, StreamingBuffer};

/// Transcription language selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Language {
    /// Let the engine detect the language on each inference pass
    Auto,
    /// A code validated against the engine's language table
    Code(String),
}

/// A transcription session over an exclusively-owned speech engine.
///
/// One engine instance backs one session. The session is a single-threaded
/// critical section behind one mutex: every public operation holds the lock
/// for its full duration, inference and sink delivery included. It can be
/// driven from any number of threads, and concurrent calls are totally
/// ordered. Note that [`transcribe`](Self::transcribe),
/// [`push_audio`](Self::push_audio) and [`stop_stream`](Self::stop_stream)
/// block for the length of an inference pass, so latency-sensitive hosts
/// must drive them from a dedicated worker thread, not an event thread.
///
/// # Example
///
/// ```no_run
/// use sotto_bridge::{Session, SessionConfig};
/// use sotto_engine::{EngineError, InferenceParams, SpeechEngine};
///
/// struct Silent;
///
/// impl SpeechEngine for Silent {
///     fn run_inference(&mut self, _samples: &[f32], _params: &InferenceParams)
///         -> Result<(), EngineError> { Ok(()) }
///     fn segment_count(&self) -> usize { 0 }
///     fn segment_text(&self, _index: usize) -> Option<String> { None }
///     fn detected_language_id(&self) -> i32 { -1 }
///     fn language_id(&self, code: &str) -> Option<i32> {
///         (code == "en").then_some(0)
///     }
/// }
///
/// let session = Session::with_engine(Silent, SessionConfig::default())?;
/// session.set_language("en")?;
/// let result = session.transcribe(&vec![0.0; 16_000])?;
/// println!("{}", result.text);
/// # Ok::<(), sotto_bridge::SessionError>(())
/// ```
pub struct Session {
    inner: Mutex<SessionInner>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

struct SessionInner {
    engine: Box<dyn SpeechEngine>,
    language: Language,
    n_threads: i32,
    // most recent joined transcript, overwritten by batch and final
    // streaming passes
    last_text: String,
    stream: StreamingBuffer,
}

impl Session {
    /// Open a session over a whisper.cpp model.
    ///
    /// Fails without producing a session if the model path is empty or the
    /// engine cannot load it. GPU acceleration is requested per the config
    /// hint; the engine falls back to CPU on its own.
    #[cfg(feature = "whisper")]
    pub fn open(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let engine = sotto_engine::WhisperEngine::load(&config.model_path, config.use_gpu)
            .map_err(|e| SessionError::initialization(e.to_string()))?;
        Self::with_engine(engine, config)
    }

    /// Create a session over a caller-supplied engine.
    ///
    /// The config language is applied through the same validation path as
    /// [`set_language`](Self::set_language); `config.model_path` is ignored
    /// (the engine is already loaded).
    pub fn with_engine<E>(engine: E, config: SessionConfig) -> Result<Self>
    where
        E: SpeechEngine + 'static,
    {
        let engine: Box<dyn SpeechEngine> = Box::new(engine);
        let language = resolve_language(engine.as_ref(), &config.language)?;
        let n_threads = clamp_threads(config.n_threads);

        info!(language = ?language, n_threads, "transcription session ready");

        Ok(Self {
            inner: Mutex::new(SessionInner {
                engine,
                language,
                n_threads,
                last_text: String::new(),
                stream: StreamingBuffer::new(),
            }),
        })
    }

    /// Set the transcription language.
    ///
    /// `"auto"` always succeeds and switches the engine into detect mode.
    /// Any other code is validated against the engine's language table; on
    /// failure the stored language is left unchanged. Affects subsequent
    /// inference calls only.
    pub fn set_language(&self, code: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        let language = resolve_language(inner.engine.as_ref(), code)?;
        debug!(language = ?language, "language changed");
        inner.language = language;
        Ok(())
    }

    /// Set the number of inference threads.
    ///
    /// Never fails; non-positive values are clamped to the default (4).
    /// Effective for subsequent inference calls.
    pub fn set_threads(&self, n_threads: i32) {
        let mut inner = self.inner.lock();
        inner.n_threads = clamp_threads(n_threads);
    }

    /// Current language selection
    pub fn language(&self) -> Language {
        self.inner.lock().language.clone()
    }

    /// Most recent joined transcript produced by a batch call or a final
    /// streaming pass; empty until one succeeds
    pub fn last_transcript(&self) -> String {
        self.inner.lock().last_text.clone()
    }

    /// Transcribe a complete audio clip (16kHz mono f32) in one pass.
    ///
    /// An engine failure folds into the empty sentinel rather than an
    /// error: a transient inference hiccup never tears down the session.
    pub fn transcribe(&self, samples: &[f32]) -> Result<Transcript> {
        if samples.is_empty() {
            return Err(SessionError::invalid_argument("audio buffer is empty"));
        }

        let mut inner = self.inner.lock();
        let params = inner.params(false);

        let started = Instant::now();
        if let Err(e) = inner.engine.run_inference(samples, &params) {
            warn!(error = %e, samples = samples.len(), "batch inference failed");
            return Ok(Transcript::empty());
        }
        let duration_ms = started.elapsed().as_millis() as u64;

        let (text, segments) = deliver_segments(inner.engine.as_ref(), None);
        let lang_id = inner.engine.detected_language_id();

        inner.last_text.clear();
        inner.last_text.push_str(&text);

        debug!(segments, lang_id, duration_ms, "batch transcription done");

        Ok(Transcript {
            text,
            segments,
            lang_id,
            lang_prob: 0.0,
            duration_ms,
        })
    }

    /// Begin a streaming session with the given segment sink.
    ///
    /// Resets the accumulator; starting over an abandoned stream is a
    /// restart, not an error.
    pub fn start_stream<S>(&self, sink: S)
    where
        S: SegmentSink + 'static,
    {
        let mut inner = self.inner.lock();
        inner.stream.start(Box::new(sink));
        info!("streaming session started");
    }

    /// Push a chunk of audio (16kHz mono f32) into the streaming buffer.
    ///
    /// May trigger one inference pass over the accumulated audio; every
    /// produced segment is delivered to the sink before this call returns.
    pub fn push_audio(&self, samples: &[f32]) -> Result<()> {
        let mut inner = self.inner.lock();
        let params = inner.params(true);

        let SessionInner { engine, stream, .. } = &mut *inner;
        stream.push(engine.as_mut(), &params, samples)
    }

    /// End the streaming session and transcribe whatever remains buffered.
    ///
    /// Always deactivates the stream and releases its sink. Returns the
    /// final pass result, or the empty sentinel when nothing was buffered
    /// or the final pass failed.
    pub fn stop_stream(&self) -> Transcript {
        let mut inner = self.inner.lock();
        let params = inner.params(false);

        let SessionInner {
            engine,
            stream,
            last_text,
            ..
        } = &mut *inner;

        match stream.finish(engine.as_mut(), &params) {
            Some(result) => {
                last_text.clear();
                last_text.push_str(&result.text);
                info!(
                    segments = result.segments,
                    duration_ms = result.duration_ms,
                    "streaming session stopped"
                );
                result
            }
            None => {
                info!("streaming session stopped with no output");
                Transcript::empty()
            }
        }
    }

    /// True while a streaming session is active
    pub fn is_streaming(&self) -> bool {
        self.inner.lock().stream.is_active()
    }

    /// Number of samples currently held in the streaming accumulator
    pub fn buffered_samples(&self) -> usize {
        self.inner.lock().stream.buffered()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let inner = self.inner.get_mut();
        if inner.stream.is_active() {
            debug!("session dropped while streaming; discarding buffered audio");
        }
        info!("transcription session closed");
    }
}

impl SessionInner {
    /// Fresh inference parameters from current session state: greedy
    /// decoding, single best candidate, no prior-context conditioning, no
    /// timestamps. Streaming step flushes force single-segment mode.
    fn params(&self, single_segment: bool) -> InferenceParams {
        InferenceParams {
            language: match &self.language {
                Language::Auto => None,
                Language::Code(code) => Some(code.clone()),
            },
            n_threads: self.n_threads,
            single_segment,
            translate: false,
        }
    }
}

fn resolve_language(engine: &dyn SpeechEngine, code: &str) -> Result<Language> {
    if code == "auto" {
        return Ok(Language::Auto);
    }
    if engine.language_id(code).is_some() {
        Ok(Language::Code(code.to_string()))
    } else {
        Err(SessionError::invalid_language(code))
    }
}
