//! Error types for surface geometry operations.

use thiserror::Error;

/// Result type for surface geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors that can occur while building or manipulating surface geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Two chains were spliced without sharing an end vertex.
    ///
    /// Also raised when either chain is empty, since an empty chain has
    /// no endpoints to share.
    #[error("chains do not overlap")]
    ChainsNotOverlapping,

    /// A vertex index referred past the end of the vertex list.
    #[error("vertex index {vertex_index} out of bounds for {vertex_count} vertices")]
    VertexIndexOutOfBounds {
        /// The offending index.
        vertex_index: u32,
        /// Number of vertices in the surface.
        vertex_count: usize,
    },
}

impl GeometryError {
    /// Create a `VertexIndexOutOfBounds` error for the given lookup.
    #[must_use]
    pub const fn vertex_out_of_bounds(vertex_index: u32, vertex_count: usize) -> Self {
        Self::VertexIndexOutOfBounds {
            vertex_index,
            vertex_count,
        }
    }
}
