//! Session configuration and batch-path scenarios


use sotto_bridge::{wav, Language, Session, SessionConfig, SessionError};
use test_helpers::*;

#[test]
fn test_batch_result_fields() {
    let (records, engine) = ScriptedEngine::new(vec![
        Pass::segments(&["the quick", "brown fox"]).lang(1),
    ]);
    let session = Session::with_engine(engine, SessionConfig::default()).unwrap();

    let result = session.transcribe(&[0.0; 16_000]).unwrap();

    assert_eq!(result.text, "the quick brown fox");
    assert_eq!(result.segments, 2);
    assert_eq!(result.lang_id, 1);
    assert_eq!(result.lang_prob, 0.0, "engine surfaces no confidence score");
    assert_eq!(records.lock().unwrap()[0].window, 16_000);
    assert_eq!(session.last_transcript(), "the quick brown fox");
}

#[test]
fn test_language_configuration_drives_params() {
    let (records, engine) = ScriptedEngine::repeating("ok");
    let session = Session::with_engine(engine, SessionConfig::default()).unwrap();

    // default is auto-detect
    session.transcribe(&[0.0; 100]).unwrap();

    session.set_language("pt").unwrap();
    session.transcribe(&[0.0; 100]).unwrap();

    session.set_language("auto").unwrap();
    session.transcribe(&[0.0; 100]).unwrap();

    let records = records.lock().unwrap();
    assert_eq!(records[0].params.language, None);
    assert_eq!(records[1].params.language.as_deref(), Some("pt"));
    assert_eq!(records[2].params.language, None);
}

#[test]
fn test_unknown_language_is_rejected_without_mutation() {
    let (records, engine) = ScriptedEngine::repeating("ok");
    let session = Session::with_engine(engine, SessionConfig::default()).unwrap();

    session.set_language("de").unwrap();
    let err = session.set_language("klingon").unwrap_err();
    assert!(matches!(err, SessionError::InvalidLanguage(_)));
    assert_eq!(session.language(), Language::Code("de".to_string()));

    // the previous language still drives inference
    session.transcribe(&[0.0; 100]).unwrap();
    assert_eq!(records.lock().unwrap()[0].params.language.as_deref(), Some("de"));
}

#[test]
fn test_thread_count_clamps_silently() {
    let (records, engine) = ScriptedEngine::repeating("ok");
    let session = Session::with_engine(
        engine,
        SessionConfig::default().threads(0),
    )
    .unwrap();

    session.transcribe(&[0.0; 100]).unwrap();
    session.set_threads(12);
    session.transcribe(&[0.0; 100]).unwrap();
    session.set_threads(-7);
    session.transcribe(&[0.0; 100]).unwrap();

    let records = records.lock().unwrap();
    assert_eq!(records[0].params.n_threads, 4);
    assert_eq!(records[1].params.n_threads, 12);
    assert_eq!(records[2].params.n_threads, 4);
}

#[test]
fn test_batch_rejects_empty_clip() {
    let (records, engine) = ScriptedEngine::repeating("ok");
    let session = Session::with_engine(engine, SessionConfig::default()).unwrap();

    let err = session.transcribe(&[]).unwrap_err();
    assert!(matches!(err, SessionError::InvalidArgument(_)));
    assert!(records.lock().unwrap().is_empty());
}

#[test]
fn test_engine_failure_yields_empty_result() {
    let (_, engine) = ScriptedEngine::new(vec![Pass::failure(), Pass::segments(&["back"])]);
    let session = Session::with_engine(engine, SessionConfig::default()).unwrap();

    let result = session.transcribe(&[0.0; 1_000]).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.lang_id, -1);

    // the session survives the hiccup
    let result = session.transcribe(&[0.0; 1_000]).unwrap();
    assert_eq!(result.text, "back");
}

#[test]
fn test_wav_clip_through_batch_path() {
    use hound::{SampleFormat, WavSpec, WavWriter};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.wav");
    let spec = WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(&path, spec).unwrap();
    for i in 0..16_000i32 {
        let sample = ((i as f32 * 0.05).sin() * 8_000.0) as i16;
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();

    let samples = wav::read_wav_16k_mono(&path).unwrap();
    assert_eq!(samples.len(), 16_000);

    let (records, engine) = ScriptedEngine::new(vec![Pass::segments(&["a test tone"])]);
    let session = Session::with_engine(engine, SessionConfig::default()).unwrap();
    let result = session.transcribe(&samples).unwrap();

    assert_eq!(result.text, "a test tone");
    assert_eq!(records.lock().unwrap()[0].window, 16_000);
}

#[cfg(feature = "whisper")]
#[test]
fn test_open_with_bad_model_path_fails() {
    let err = Session::open(SessionConfig::with_model("/nonexistent/ggml-model.bin"))
        .unwrap_err();
    assert!(matches!(err, SessionError::Initialization(_)));

    // empty path is rejected before touching the engine
    let err = Session::open(SessionConfig::default()).unwrap_err();
    assert!(matches!(err, SessionError::Initialization(_)));
}
