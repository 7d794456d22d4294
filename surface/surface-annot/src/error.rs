//! Error types for annotation handling.

use thiserror::Error;

/// Result alias for annotation operations.
pub type AnnotResult<T> = Result<T, AnnotError>;

/// Errors arising while assembling or querying annotations.
#[derive(Debug, Error)]
pub enum AnnotError {
    /// A vertex carries a color code no colortable label produces.
    #[error("color code {color_code} of vertex {vertex_index} matches no label")]
    UnknownColorCode {
        /// The packed color code found at the vertex.
        color_code: u32,
        /// The vertex carrying the unmatched code.
        vertex_index: u32,
    },
}
