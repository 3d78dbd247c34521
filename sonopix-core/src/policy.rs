use std::ffi::OsStr;
use std::path::Path;

/// Injectable file-name validation applied by collaborator layers (CLI, GUI)
/// before invoking the codec.
///
/// The wire format itself places no restriction on names; a conforming codec
/// accepts any byte content regardless of what the name claims. Restricting
/// accepted names is a usage policy of the surrounding application.
pub trait NamePolicy {
    /// Whether `name` may be embedded on encode or written out on decode.
    fn allows(&self, name: &str) -> bool;
}

/// Policy accepting every name.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl NamePolicy for AllowAll {
    fn allows(&self, _name: &str) -> bool {
        true
    }
}

/// Recognized audio-file extensions, lowercase, without the dot.
pub const ALLOWED_AUDIO_EXTENSIONS: [&str; 10] = [
    "aac", "aif", "aiff", "alac", "flac", "m4a", "mp3", "ogg", "wav", "wma",
];

/// Policy restricting names to [`ALLOWED_AUDIO_EXTENSIONS`].
///
/// Matches case-insensitively on the extension only; the rest of the name is
/// not inspected.
#[derive(Clone, Copy, Debug, Default)]
pub struct AudioExtensionPolicy;

impl NamePolicy for AudioExtensionPolicy {
    fn allows(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                ALLOWED_AUDIO_EXTENSIONS.contains(&ext.as_str())
            })
    }
}

#[cfg(test)]
#[path = "../tests/unit/policy.rs"]
mod tests;
