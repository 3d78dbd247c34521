use super::*;

#[test]
fn full_scale_maps_to_channel_extremes() {
    assert_eq!(sample_to_byte(-1.0), 0);
    assert_eq!(sample_to_byte(0.0), 128);
    assert_eq!(sample_to_byte(1.0), 255);
}

#[test]
fn out_of_range_samples_clamp() {
    assert_eq!(sample_to_byte(-2.0), 0);
    assert_eq!(sample_to_byte(2.0), 255);
    assert_eq!(sample_to_byte(f32::NEG_INFINITY), 0);
    assert_eq!(sample_to_byte(f32::INFINITY), 255);
}

#[test]
fn quantization_error_is_bounded() {
    let step = 1.0 / 255.0;
    let mut s = -1.0f32;
    while s <= 1.0 {
        let back = byte_to_sample(sample_to_byte(s));
        assert!(
            (back - s).abs() <= step + 1e-6,
            "sample {s} came back as {back}"
        );
        s += 0.001;
    }
}

#[test]
fn concrete_triple_roundtrip() {
    let bytes = encode_samples(&[-1.0, 0.0, 1.0]);
    assert_eq!(bytes, vec![0, 128, 255]);
    let back = decode_samples(&bytes);
    for (orig, got) in [-1.0f32, 0.0, 1.0].iter().zip(&back) {
        assert!((orig - got).abs() <= 1.0 / 255.0 + 1e-6);
    }
}

#[test]
fn downmix_averages_channels() {
    let stereo = [1.0f32, 0.0, -1.0, 0.0, 0.5, -0.5];
    assert_eq!(downmix_mono(&stereo, 2), vec![0.5, -0.5, 0.0]);
}

#[test]
fn downmix_of_mono_is_identity() {
    let mono = [0.1f32, -0.2, 0.3];
    assert_eq!(downmix_mono(&mono, 1), mono.to_vec());
    // Downmixing an already-downmixed stream changes nothing either.
    let once = downmix_mono(&mono, 1);
    assert_eq!(downmix_mono(&once, 1), once);
}

#[test]
fn downmix_handles_short_trailing_frame() {
    let samples = [1.0f32, 0.0, 0.5];
    assert_eq!(downmix_mono(&samples, 2), vec![0.5, 0.5]);
}

#[test]
fn grid_layout_truncates_and_zero_pads() {
    // 2x1 grid holds 6 channel values; 7 samples lose the last one.
    let samples = [0.0f32; 7];
    let grid = samples_to_grid(&samples, 2, 1).unwrap();
    assert_eq!(grid.as_rgb(), &[128, 128, 128, 128, 128, 128]);

    // 4 samples into the same grid: missing channels read as byte 0.
    let grid = samples_to_grid(&[1.0, 1.0, 1.0, 1.0], 2, 1).unwrap();
    assert_eq!(grid.as_rgb(), &[255, 255, 255, 255, 0, 0]);
}

#[test]
fn grid_to_samples_flattens_in_channel_order() {
    let grid = PixelGrid::from_rgb(1, 1, vec![0, 128, 255]).unwrap();
    let samples = grid_to_samples(&grid);
    assert_eq!(samples.len(), 3);
    assert!((samples[0] + 1.0).abs() < 1e-6);
    assert!((samples[1] - (128.0 / 255.0 * 2.0 - 1.0)).abs() < 1e-6);
    assert!((samples[2] - 1.0).abs() < 1e-6);
}

#[test]
fn defaults_match_documented_assumptions() {
    assert_eq!(DEFAULT_DECODE_SIDE, 500);
    assert_eq!(DEFAULT_SAMPLE_RATE, 44_100);
}
