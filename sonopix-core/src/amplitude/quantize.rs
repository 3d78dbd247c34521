use crate::foundation::{error::SonopixResult, grid::PixelGrid};

/// Assumed square image side when decoding audio that carries no geometry.
///
/// The amplitude profile records neither dimensions nor sample count; when
/// the true sample count does not factor into this guessed grid, decode
/// silently truncates or zero-pads. That is an accepted lossiness of the
/// profile, not a defect to reconcile.
pub const DEFAULT_DECODE_SIDE: u32 = 500;

/// Default sample rate for amplitude-profile WAV output. The profile never
/// encodes a rate; this is what callers assume when they track nothing else.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Map one amplitude in [-1, 1] to a pixel channel byte.
///
/// `byte = round(((s + 1) / 2) * 255)`, clamped to [0, 255]. Rounds to
/// nearest, so 0.0 maps to 128; the same rounding is assumed both ways.
pub fn sample_to_byte(s: f32) -> u8 {
    let v = ((s + 1.0) / 2.0 * 255.0).round();
    v.clamp(0.0, 255.0) as u8
}

/// Inverse of [`sample_to_byte`]: `s = (byte / 255) * 2 - 1`.
///
/// Reconstruction error is bounded by one quantization step (~1/255 of full
/// scale).
pub fn byte_to_sample(b: u8) -> f32 {
    (f32::from(b) / 255.0) * 2.0 - 1.0
}

/// Downmix interleaved multi-channel samples to mono by arithmetic mean.
///
/// Already-mono input comes back unchanged. A short trailing frame is
/// averaged over the channels it actually has.
pub fn downmix_mono(interleaved: &[f32], channels: u16) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks(usize::from(channels))
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}

/// Quantize a mono sample sequence into pixel channel bytes, in order.
pub fn encode_samples(samples: &[f32]) -> Vec<u8> {
    samples.iter().copied().map(sample_to_byte).collect()
}

/// Dequantize pixel channel bytes back into amplitudes, in order.
pub fn decode_samples(bytes: &[u8]) -> Vec<f32> {
    bytes.iter().copied().map(byte_to_sample).collect()
}

/// Quantize `samples` and lay them out as a `width x height` RGB grid.
///
/// Unlike the container profile, no header and no length are recorded:
/// samples beyond the grid capacity are dropped and missing channels are
/// zero-filled. Dimensions are the caller's to supply and to remember.
#[tracing::instrument(skip(samples), fields(sample_count = samples.len()))]
pub fn samples_to_grid(samples: &[f32], width: u32, height: u32) -> SonopixResult<PixelGrid> {
    let capacity = width as usize * height as usize * 3;
    let mut rgb = encode_samples(samples);
    rgb.truncate(capacity);
    rgb.resize(capacity, 0);
    PixelGrid::from_rgb(width, height, rgb)
}

/// Flatten a grid into amplitudes: row-major, channel order R, G, B.
///
/// Yields exactly `width * height * 3` samples; the original sample count,
/// channel count, and rate are not recoverable from the grid.
pub fn grid_to_samples(grid: &PixelGrid) -> Vec<f32> {
    decode_samples(grid.as_rgb())
}

#[cfg(test)]
#[path = "../../tests/unit/amplitude/quantize.rs"]
mod tests;
