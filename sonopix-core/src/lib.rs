//! Sonopix turns a byte stream into a rectangular RGB pixel grid and back.
//!
//! Two independent profiles share the grid representation:
//!
//! 1. **Container (lossless)**: exact file bytes plus a fixed metadata header
//!    (`magic`, `version`, `payload_size`, `name`) are framed, zero-padded to
//!    a multiple of three, and packed into a near-square grid
//!    (`encode_payload` / `decode_payload`). Fully reversible as long as the
//!    stored image round-trips pixels exactly; any lossy recompression of the
//!    produced image corrupts the payload.
//! 2. **Amplitude (lossy)**: normalized waveform samples in [-1, 1] map onto
//!    the 0–255 channel range and back (`samples_to_grid` /
//!    `grid_to_samples`). 8-bit quantization error and the loss of sample
//!    count, channel count, and rate are intrinsic to this profile.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Stateless transforms**: every codec call is pure and idempotent for a
//!   given input; concurrent calls need no coordination.
//! - **No IO in the codec**: file, PNG, and WAV access live in the [`store`]
//!   collaborators; the codec only sees byte buffers and grids.
//! - **Policy-free core**: file-name restrictions are an injectable
//!   [`NamePolicy`] applied by callers, never by the codec.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod amplitude;
mod container;
mod foundation;
mod policy;
mod store;

pub mod task;

pub use amplitude::quantize::{
    DEFAULT_DECODE_SIDE, DEFAULT_SAMPLE_RATE, byte_to_sample, decode_samples, downmix_mono,
    encode_samples, grid_to_samples, sample_to_byte, samples_to_grid,
};
pub use container::header::{
    ContainerHeader, FIXED_HEADER_LEN, MAGIC, VERSION, parse_header, serialize_header,
};
pub use container::pack::{decode_payload, encode_payload, pack_rgb, unpack_rgb};
pub use container::plan::plan_dimensions;
pub use foundation::error::{SonopixError, SonopixResult};
pub use foundation::grid::PixelGrid;
pub use policy::{ALLOWED_AUDIO_EXTENSIONS, AllowAll, AudioExtensionPolicy, NamePolicy};
pub use store::png::{load_png, render_png};
pub use store::wav::{AudioPcm, read_wav, write_wav_mono};
