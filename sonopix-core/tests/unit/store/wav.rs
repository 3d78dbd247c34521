use super::*;

#[test]
fn mono_f32_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mono.wav");
    let samples = vec![0.0f32, 0.25, -0.25, 1.0, -1.0];

    write_wav_mono(&path, &samples, 44_100).unwrap();
    let pcm = read_wav(&path).unwrap();

    assert_eq!(pcm.channels, 1);
    assert_eq!(pcm.sample_rate, 44_100);
    assert_eq!(pcm.interleaved_f32, samples);
}

#[test]
fn int16_input_is_normalized_to_full_scale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("int16.wav");

    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 22_050,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for s in [i16::MIN, 0, i16::MAX, -16_384] {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();

    let pcm = read_wav(&path).unwrap();
    assert_eq!(pcm.channels, 2);
    assert_eq!(pcm.sample_rate, 22_050);
    assert_eq!(pcm.interleaved_f32.len(), 4);
    assert!((pcm.interleaved_f32[0] + 1.0).abs() < 1e-6);
    assert!(pcm.interleaved_f32[1].abs() < 1e-6);
    assert!((pcm.interleaved_f32[2] - (32_767.0 / 32_768.0)).abs() < 1e-6);
    assert!((pcm.interleaved_f32[3] + 0.5).abs() < 1e-6);
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.wav");
    assert!(read_wav(&path).is_err());
}
