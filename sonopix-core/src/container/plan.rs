/// Compute a grid able to hold `payload_len` bytes, preferring a near-square
/// aspect ratio while wasting at most `width - 1` pixels.
///
/// `pixels_needed = ceil(payload_len / 3)`; width starts at
/// `floor(sqrt(pixels_needed))` (minimum 1) and is bumped by one when its
/// square falls short; height is `ceil(pixels_needed / width)`. The square
/// preference is presentation, not correctness, but the exact tie-break is
/// kept byte-for-byte compatible with previously encoded images.
pub fn plan_dimensions(payload_len: usize) -> (u32, u32) {
    let pixels_needed = payload_len.div_ceil(3).max(1) as u64;

    let mut width = (pixels_needed as f64).sqrt().floor() as u64;
    width = width.max(1);
    if width * width < pixels_needed {
        width += 1;
    }
    let height = pixels_needed.div_ceil(width);

    (width as u32, height as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/container/plan.rs"]
mod tests;
