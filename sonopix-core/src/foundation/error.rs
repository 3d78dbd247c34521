/// Convenience result type used across sonopix.
pub type SonopixResult<T> = Result<T, SonopixError>;

/// Top-level error taxonomy used by codec APIs.
///
/// Every variant is a deterministic, value-level failure: each stems from
/// malformed input or a programming error, never from transient conditions,
/// so nothing here is retried internally.
#[derive(thiserror::Error, Debug)]
pub enum SonopixError {
    /// Embedded file name does not fit the 16-bit length field.
    #[error("name too long: {0} bytes exceeds the 65535-byte limit")]
    NameTooLong(usize),

    /// Decode input does not start with the container magic. The buffer was
    /// not produced by this codec, or the stored image was recompressed.
    #[error("magic mismatch: input is not a sonopix container (or was recompressed)")]
    MagicMismatch,

    /// Container version byte is not recognized (forward-incompatible input).
    #[error("version mismatch: found {found}, expected {expected}")]
    VersionMismatch {
        /// Version byte found in the buffer.
        found: u8,
        /// Version this build understands.
        expected: u8,
    },

    /// Buffer ends before the declared header does.
    #[error("truncated header: buffer holds {available} bytes, header needs {needed}")]
    TruncatedHeader {
        /// Bytes the full header occupies.
        needed: usize,
        /// Bytes actually present.
        available: usize,
    },

    /// Embedded file name bytes are not valid UTF-8.
    #[error("invalid name: embedded file name is not valid UTF-8")]
    InvalidName,

    /// Declared payload size exceeds the bytes left after the header.
    #[error("size mismatch: header declares {declared} payload bytes, only {available} available")]
    SizeMismatch {
        /// Payload size recorded in the header.
        declared: u64,
        /// Bytes remaining after the header.
        available: usize,
    },

    /// Planned grid cannot hold the framed buffer. This indicates a planner
    /// bug, not a user error.
    #[error("capacity violation: grid holds {capacity} bytes, framed buffer needs {required}")]
    CapacityViolation {
        /// Byte capacity of the grid (`width * height * 3`).
        capacity: usize,
        /// Length of the framed buffer.
        required: usize,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
