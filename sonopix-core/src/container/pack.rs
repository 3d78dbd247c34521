use crate::{
    container::header::{parse_header, serialize_header},
    container::plan::plan_dimensions,
    foundation::error::{SonopixError, SonopixResult},
    foundation::grid::PixelGrid,
};

/// Pack a framed buffer into a `width x height` RGB grid.
///
/// The buffer is split into consecutive 3-byte groups; the trailing short
/// group and all remaining pixels are zero-filled, producing exactly
/// `width * height` triples. Fails with [`SonopixError::CapacityViolation`]
/// when the grid cannot hold the buffer, which indicates a planner bug.
pub fn pack_rgb(framed: &[u8], width: u32, height: u32) -> SonopixResult<PixelGrid> {
    let capacity = width as usize * height as usize * 3;
    if capacity < framed.len() {
        return Err(SonopixError::CapacityViolation {
            capacity,
            required: framed.len(),
        });
    }
    let mut rgb = Vec::with_capacity(capacity);
    rgb.extend_from_slice(framed);
    rgb.resize(capacity, 0);
    PixelGrid::from_rgb(width, height, rgb)
}

/// Flatten a grid back into raw bytes: row-major, channel order R, G, B.
///
/// The result is the framed buffer plus trailing padding; callers recover the
/// payload by parsing the header and slicing `payload_size` bytes, never by
/// trusting the buffer length.
pub fn unpack_rgb(grid: &PixelGrid) -> Vec<u8> {
    grid.as_rgb().to_vec()
}

/// Frame `payload` under `name` and pack it into a planned pixel grid.
#[tracing::instrument(skip(payload), fields(payload_len = payload.len()))]
pub fn encode_payload(name: &str, payload: &[u8]) -> SonopixResult<PixelGrid> {
    let mut framed = serialize_header(payload.len() as u64, name)?;
    framed.extend_from_slice(payload);
    let (width, height) = plan_dimensions(framed.len());
    pack_rgb(&framed, width, height)
}

/// Recover the embedded name and exact payload bytes from a pixel grid.
///
/// Runs [`parse_header`] on the flattened bytes, then slices out exactly
/// `payload_size` bytes after the header, discarding grid padding. Fails with
/// [`SonopixError::SizeMismatch`] when fewer bytes remain than declared.
#[tracing::instrument(skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn decode_payload(grid: &PixelGrid) -> SonopixResult<(String, Vec<u8>)> {
    let raw = grid.as_rgb();
    let (header, payload_start) = parse_header(raw)?;

    let available = raw.len() - payload_start;
    let declared = header.payload_size;
    if declared > available as u64 {
        return Err(SonopixError::SizeMismatch {
            declared,
            available,
        });
    }
    let payload = raw[payload_start..payload_start + declared as usize].to_vec();
    Ok((header.name, payload))
}

#[cfg(test)]
#[path = "../../tests/unit/container/pack.rs"]
mod tests;
