//! whisper.cpp backend via whisper-rs

use tracing::{debug, info};
use whisper_rs::{
    FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, WhisperState,
};

use crate::error::{EngineError, Result};
use crate::{InferenceParams, SpeechEngine};

/// Speech engine backed by a whisper.cpp model (GGML format).
///
/// GPU acceleration is requested opportunistically; whisper.cpp falls back
/// to CPU on its own when no device is available.
pub struct WhisperEngine {
    // state must not outlive the context it was created from
    _ctx: WhisperContext,
    state: WhisperState,
    n_segments: usize,
}

impl WhisperEngine {
    /// Load a whisper.cpp model from a GGML file.
    pub fn load(model_path: &str, use_gpu: bool) -> Result<Self> {
        if model_path.is_empty() {
            return Err(EngineError::model_load("model path is empty"));
        }

        info!(model_path, use_gpu, "loading whisper model");

        let mut ctx_params = WhisperContextParameters::default();
        ctx_params.use_gpu(use_gpu);

        let ctx = WhisperContext::new_with_params(model_path, ctx_params)
            .map_err(|e| EngineError::model_load(format!("{model_path}: {e}")))?;

        let state = ctx
            .create_state()
            .map_err(|e| EngineError::model_load(format!("failed to create state: {e}")))?;

        Ok(Self {
            _ctx: ctx,
            state,
            n_segments: 0,
        })
    }

    fn full_params<'a>(&self, params: &'a InferenceParams) -> FullParams<'a, 'a> {
        let mut full = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });

        full.set_n_threads(params.n_threads.max(1));
        full.set_translate(params.translate);
        full.set_no_context(true);
        full.set_single_segment(params.single_segment);
        full.set_print_special(false);
        full.set_print_progress(false);
        full.set_print_realtime(false);
        full.set_print_timestamps(false);
        full.set_token_timestamps(false);

        match params.language.as_deref() {
            Some(code) => {
                full.set_language(Some(code));
                full.set_detect_language(false);
            }
            None => {
                full.set_language(None);
                full.set_detect_language(true);
            }
        }

        full
    }
}

impl SpeechEngine for WhisperEngine {
    fn run_inference(&mut self, samples: &[f32], params: &InferenceParams) -> Result<()> {
        let full = self.full_params(params);

        self.state
            .full(full, samples)
            .map_err(|e| EngineError::inference(format!("whisper full() failed: {e}")))?;

        self.n_segments = self
            .state
            .full_n_segments()
            .map_err(|e| EngineError::inference(format!("segment count unavailable: {e}")))?
            .max(0) as usize;

        debug!(samples = samples.len(), segments = self.n_segments, "inference pass done");
        Ok(())
    }

    fn segment_count(&self) -> usize {
        self.n_segments
    }

    fn segment_text(&self, index: usize) -> Option<String> {
        if index >= self.n_segments {
            return None;
        }
        self.state.full_get_segment_text(index as i32).ok()
    }

    fn detected_language_id(&self) -> i32 {
        self.state.full_lang_id().unwrap_or(-1)
    }

    fn language_id(&self, code: &str) -> Option<i32> {
        (0..=whisper_rs::get_lang_max_id())
            .find(|&id| whisper_rs::get_lang_str(id) == Some(code))
    }
}
