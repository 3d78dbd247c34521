use std::io::Cursor;

use anyhow::Context;

use crate::foundation::{error::SonopixResult, grid::PixelGrid};

/// Render a pixel grid as PNG bytes.
///
/// PNG is the one storage format the codec relies on being lossless and
/// RGB-channel-order preserving. Recompressing the result with a lossy
/// format breaks the container contract and is unsupported.
pub fn render_png(grid: &PixelGrid) -> SonopixResult<Vec<u8>> {
    let img = image::RgbImage::from_raw(grid.width(), grid.height(), grid.as_rgb().to_vec())
        .ok_or_else(|| anyhow::anyhow!("pixel grid does not match its declared dimensions"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// Load stored PNG bytes back into an RGB pixel grid.
///
/// Other color modes (RGBA, grayscale) collapse to RGB, matching the
/// container profile's expectations.
pub fn load_png(bytes: &[u8]) -> SonopixResult<PixelGrid> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    PixelGrid::from_rgb(width, height, rgb.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/store/png.rs"]
mod tests;
