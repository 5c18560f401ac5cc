//! WAV file loading for the batch path

use std::path::Path;

use hound::{SampleFormat, WavReader};
use tracing::debug;

use crate::error::{Result, SessionError};
use crate::pcm;
use sotto_engine::SAMPLE_RATE;

/// Read a 16kHz mono 16-bit PCM WAV file into f32 samples.
///
/// The engine consumes exactly this format; anything else is rejected
/// rather than silently resampled.
pub fn read_wav_16k_mono<P: AsRef<Path>>(path: P) -> Result<Vec<f32>> {
    let path = path.as_ref();
    let mut reader = WavReader::open(path)
        .map_err(|e| SessionError::audio_load(format!("failed to open {}: {e}", path.display())))?;

    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(SessionError::audio_load(format!(
            "expected mono audio, got {} channels",
            spec.channels
        )));
    }
    if spec.sample_rate != SAMPLE_RATE {
        return Err(SessionError::audio_load(format!(
            "expected {SAMPLE_RATE}Hz audio, got {}Hz",
            spec.sample_rate
        )));
    }
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(SessionError::audio_load(format!(
            "expected 16-bit PCM, got {}-bit {:?}",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    let samples: Vec<i16> = reader
        .samples::<i16>()
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| SessionError::audio_load(format!("failed to read samples: {e}")))?;

    debug!(path = %path.display(), samples = samples.len(), "loaded WAV file");
    Ok(pcm::pcm16_to_f32(&samples))
}
