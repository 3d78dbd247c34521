use crate::foundation::error::{SonopixError, SonopixResult};

/// Magic prefix identifying a framed container buffer.
pub const MAGIC: [u8; 4] = *b"M2I0";

/// Container format version emitted and accepted by this build.
pub const VERSION: u8 = 1;

/// Fixed header bytes before the variable-length name:
/// magic (4) + version (1) + payload size (8, u64 BE) + name length (2, u16 BE).
pub const FIXED_HEADER_LEN: usize = 15;

/// Parsed view of a container header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Exact byte count of the file content that follows the header.
    pub payload_size: u64,
    /// Embedded file name (UTF-8, at most 65535 bytes).
    pub name: String,
}

impl ContainerHeader {
    /// Total serialized length of this header.
    pub fn header_len(&self) -> usize {
        FIXED_HEADER_LEN + self.name.len()
    }
}

/// Serialize the fixed-layout header for a payload of `payload_size` bytes.
///
/// Fails with [`SonopixError::NameTooLong`] when the UTF-8 encoding of `name`
/// exceeds 65535 bytes. No other validation happens at this layer; payload
/// integrity is the caller's responsibility via `payload_size`.
pub fn serialize_header(payload_size: u64, name: &str) -> SonopixResult<Vec<u8>> {
    let name_bytes = name.as_bytes();
    if name_bytes.len() > usize::from(u16::MAX) {
        return Err(SonopixError::NameTooLong(name_bytes.len()));
    }
    let mut out = Vec::with_capacity(FIXED_HEADER_LEN + name_bytes.len());
    out.extend_from_slice(&MAGIC);
    out.push(VERSION);
    out.extend_from_slice(&payload_size.to_be_bytes());
    out.extend_from_slice(&(name_bytes.len() as u16).to_be_bytes());
    out.extend_from_slice(name_bytes);
    Ok(out)
}

/// Parse a header from the front of `buf`.
///
/// Returns the header and the offset at which the payload begins. Fails with
/// [`SonopixError::MagicMismatch`] when the first four bytes differ from
/// [`MAGIC`], [`SonopixError::VersionMismatch`] for an unrecognized version
/// byte, and [`SonopixError::TruncatedHeader`] when `buf` is shorter than the
/// declared header.
pub fn parse_header(buf: &[u8]) -> SonopixResult<(ContainerHeader, usize)> {
    if buf.len() < FIXED_HEADER_LEN {
        return Err(SonopixError::TruncatedHeader {
            needed: FIXED_HEADER_LEN,
            available: buf.len(),
        });
    }
    if buf[..4] != MAGIC {
        return Err(SonopixError::MagicMismatch);
    }
    if buf[4] != VERSION {
        return Err(SonopixError::VersionMismatch {
            found: buf[4],
            expected: VERSION,
        });
    }
    let mut size_bytes = [0u8; 8];
    size_bytes.copy_from_slice(&buf[5..13]);
    let payload_size = u64::from_be_bytes(size_bytes);
    let name_len = usize::from(u16::from_be_bytes([buf[13], buf[14]]));

    let end = FIXED_HEADER_LEN + name_len;
    if buf.len() < end {
        return Err(SonopixError::TruncatedHeader {
            needed: end,
            available: buf.len(),
        });
    }
    let name = std::str::from_utf8(&buf[FIXED_HEADER_LEN..end])
        .map_err(|_| SonopixError::InvalidName)?
        .to_string();

    Ok((ContainerHeader { payload_size, name }, end))
}

#[cfg(test)]
#[path = "../../tests/unit/container/header.rs"]
mod tests;
