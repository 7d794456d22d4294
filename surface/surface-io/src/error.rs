//! Error types for surface file I/O.

use std::path::PathBuf;

use surface_annot::AnnotError;
use thiserror::Error;

/// Result type for surface file I/O.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing surface files.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The file does not start with the triangular surface magic bytes.
    #[error("unsupported file magic: {magic:02x?}")]
    UnsupportedMagic {
        /// The three bytes found in place of the magic.
        magic: [u8; 3],
    },

    /// The annotation carries a colortable layout this reader does not
    /// handle.
    #[error("unsupported colortable version: {version}")]
    UnsupportedColortableVersion {
        /// The version field as stored, non-negative for the legacy
        /// inline layout.
        version: i32,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// Unexpected end of file.
    #[error("unexpected end of file at position {position}")]
    UnexpectedEof {
        /// Position in the file where EOF was encountered.
        position: u64,
    },

    /// A surface cannot be written without its volume geometry lines.
    #[error("surface has no volume geometry info to write")]
    MissingVolumeGeometry,

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// String conversion error.
    #[error("string conversion error: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),

    /// The annotation data does not join against its colortable.
    #[error(transparent)]
    Annot(#[from] AnnotError),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
