//! Simulate a live stream by feeding a WAV file in 100ms chunks
//!
//! Segments print as they are produced; the joined final result prints
//! after the stream stops.
//!
//! Usage:
//!   cargo run --release --features whisper --example stream_wav -- <model.bin> <audio.wav>

use anyhow::{bail, Context, Result};
use sotto_bridge::{wav, Session, SessionConfig};

// 100ms of 16kHz mono audio per push
const CHUNK_SAMPLES: usize = 1_600;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        bail!("usage: {} <model.bin> <audio.wav>", args[0]);
    }

    let session = Session::open(SessionConfig::with_model(&args[1]))
        .context("failed to open transcription session")?;

    let samples = wav::read_wav_16k_mono(&args[2]).context("failed to load audio")?;
    println!(
        "Streaming {} samples ({:.1}s) in {}-sample chunks",
        samples.len(),
        samples.len() as f32 / 16_000.0,
        CHUNK_SAMPLES
    );

    session.start_stream(|text: &str, _is_partial: bool| {
        println!("  >> {text}");
    });

    for chunk in samples.chunks(CHUNK_SAMPLES) {
        session.push_audio(chunk)?;
    }

    let result = session.stop_stream();
    println!(
        "\nFinal pass: {} segment(s) in {}ms",
        result.segments, result.duration_ms
    );
    println!("{}", result.text);

    Ok(())
}
