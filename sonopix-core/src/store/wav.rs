use std::path::Path;

use anyhow::Context;

use crate::foundation::error::SonopixResult;

/// Decoded PCM with its source geometry.
///
/// Sample rate and channel count are metadata the codec itself never encodes;
/// they exist only for callers that track them separately.
#[derive(Clone, Debug)]
pub struct AudioPcm {
    /// Interleaved samples, full scale [-1, 1].
    pub interleaved_f32: Vec<f32>,
    /// Source sample rate in Hz.
    pub sample_rate: u32,
    /// Source channel count.
    pub channels: u16,
}

/// Read a WAV file into interleaved f32 samples.
///
/// Integer formats are normalized to [-1, 1] full scale; float formats pass
/// through unchanged.
pub fn read_wav(path: &Path) -> SonopixResult<AudioPcm> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("open wav '{}'", path.display()))?;
    let spec = reader.spec();

    let interleaved_f32 = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .context("read f32 samples")?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<Vec<_>, _>>()
                .context("read int samples")?
        }
    };

    Ok(AudioPcm {
        interleaved_f32,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}

/// Write mono samples as a 32-bit float WAV at `sample_rate`.
pub fn write_wav_mono(path: &Path, samples: &[f32], sample_rate: u32) -> SonopixResult<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("create wav '{}'", path.display()))?;
    for &s in samples {
        writer.write_sample(s).context("write sample")?;
    }
    writer.finalize().context("finalize wav")?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/store/wav.rs"]
mod tests;
