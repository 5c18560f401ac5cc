//! PCM format conversion

/// Convert int16 PCM samples to f32 (element-wise `v / 32768.0`).
///
/// No clamping or rounding beyond the division: `-32768` maps to exactly
/// `-1.0`, `32767` to just under `1.0`.
pub fn pcm16_to_f32(samples: &[i16]) -> Vec<f32> {
    samples.iter().map(|&v| v as f32 / 32768.0).collect()
}

/// Convert int16 PCM samples into a reusable output buffer.
///
/// Clears `dst` and fills it with the converted samples; the buffer's
/// capacity is reused across calls on a hot path.
pub fn pcm16_to_f32_into(src: &[i16], dst: &mut Vec<f32>) {
    dst.clear();
    dst.reserve(src.len());
    dst.extend(src.iter().map(|&v| v as f32 / 32768.0));
}
