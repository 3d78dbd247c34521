use crate::foundation::error::SonopixResult;

/// A `width x height` grid of RGB triples in row-major order.
///
/// This is the shared currency between the two codec profiles and the image
/// store: `rgb` holds exactly `width * height * 3` bytes in channel order
/// R, G, B. A grid is transient state, constructed per codec invocation and
/// discarded after the caller persists or renders the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

impl PixelGrid {
    /// Wrap a raw RGB byte buffer, checking that it matches the dimensions.
    pub fn from_rgb(width: u32, height: u32, rgb: Vec<u8>) -> SonopixResult<Self> {
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            return Err(anyhow::anyhow!(
                "rgb buffer is {} bytes, {width}x{height} grid needs {expected}",
                rgb.len()
            )
            .into());
        }
        Ok(Self { width, height, rgb })
    }

    /// Grid width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw bytes, row-major, channel order R, G, B.
    pub fn as_rgb(&self) -> &[u8] {
        &self.rgb
    }

    /// Consume the grid and return its raw bytes.
    pub fn into_rgb(self) -> Vec<u8> {
        self.rgb
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/grid.rs"]
mod tests;
