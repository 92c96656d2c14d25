//! Host-facility seams: filesystem probe, directory picker, clipboard.
//!
//! The flows only see the traits; native implementations live here (and in
//! the shell for the interactive picker) so tests can substitute stubs.

use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("validate project directory \"{path}\": {source}")]
    DirectoryProbe {
        path: String,
        source: std::io::Error,
    },

    #[error("directory picker: {0}")]
    Picker(String),

    #[error("clipboard write: {0}")]
    Clipboard(String),
}

/// Whether a path exists and is a directory.
pub trait DirectoryProbe {
    fn directory_exists(&self, path: &str) -> Result<bool, PortError>;
}

/// Presents a directory-selection prompt. `Ok(None)` means the user
/// cancelled; cancellation is never an error.
pub trait DirectoryPicker {
    fn pick_directory(&self) -> Result<Option<String>, PortError>;
}

/// Best-effort system clipboard. Callers may discard the result.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), PortError>;
}

/// Probe backed by local filesystem metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDirectoryProbe;

impl DirectoryProbe for NativeDirectoryProbe {
    fn directory_exists(&self, path: &str) -> Result<bool, PortError> {
        if path.is_empty() {
            return Ok(false);
        }
        match std::fs::metadata(Path::new(path)) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(PortError::DirectoryProbe {
                path: path.to_string(),
                source,
            }),
        }
    }
}

/// Clipboard backed by the OS clipboard via `arboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), PortError> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .map_err(|e| PortError::Clipboard(e.to_string()))
    }
}
