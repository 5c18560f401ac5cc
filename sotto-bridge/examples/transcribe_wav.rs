//! Transcribe a WAV file in one batch pass
//!
//! Usage:
//!   cargo run --release --features whisper --example transcribe_wav -- <model.bin> <audio.wav> [lang]

use anyhow::{bail, Context, Result};
use sotto_bridge::{wav, Session, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        bail!("usage: {} <model.bin> <audio.wav> [lang]", args[0]);
    }

    let session = Session::open(SessionConfig::with_model(&args[1]))
        .context("failed to open transcription session")?;

    if let Some(lang) = args.get(3) {
        session
            .set_language(lang)
            .with_context(|| format!("unsupported language: {lang}"))?;
    }

    let samples = wav::read_wav_16k_mono(&args[2]).context("failed to load audio")?;
    println!(
        "Loaded {} samples ({:.1}s)",
        samples.len(),
        samples.len() as f32 / 16_000.0
    );

    let result = session
        .transcribe(&samples)
        .context("transcription failed")?;

    println!(
        "Transcribed {} segment(s) in {}ms (lang id {})",
        result.segments, result.duration_ms, result.lang_id
    );
    println!("{}", result.text);

    Ok(())
}
