//! Error types for border extraction.

use thiserror::Error;

/// Result alias for border extraction operations.
pub type BorderResult<T> = Result<T, BorderError>;

/// Errors reported while extracting borders from a surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BorderError {
    /// A label operation was requested on a finder without an annotation.
    #[error("no annotation attached, label borders cannot be resolved")]
    MissingAnnotation,

    /// A vertex carries an odd number of border links and cannot lie on
    /// closed circuits.
    #[error("vertex {vertex_index} has {neighbour_count} border neighbours, expected an even count")]
    OddBorderDegree {
        /// Vertex with the odd link count.
        vertex_index: u32,
        /// Number of border neighbours found at that vertex.
        neighbour_count: usize,
    },

    /// A border segment connects a vertex to itself.
    #[error("segment from vertex {vertex_index} to itself cannot lie on a border")]
    DegenerateSegment {
        /// Vertex appearing at both segment endpoints.
        vertex_index: u32,
    },

    /// A run of border segments ends without closing back on itself.
    #[error("border strand ends at vertex {vertex_index} without closing")]
    OpenStrand {
        /// Vertex where the strand runs out of onward segments.
        vertex_index: u32,
    },
}
