//! Undirected line segments between two vertices.

use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::PolygonalCircuit;

/// An undirected edge between two vertex indices.
///
/// Equality and hashing ignore orientation, so `(a, b)` and `(b, a)`
/// describe the same segment.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineSegment {
    vertex_indices: [u32; 2],
}

impl LineSegment {
    /// Create a segment between two vertex indices.
    #[inline]
    #[must_use]
    pub const fn new(vertex_indices: [u32; 2]) -> Self {
        Self { vertex_indices }
    }

    /// The two endpoint indices in stored order.
    #[inline]
    #[must_use]
    pub const fn vertex_indices(&self) -> [u32; 2] {
        self.vertex_indices
    }

    /// The endpoints ordered smallest first.
    #[inline]
    #[must_use]
    const fn ordered(&self) -> [u32; 2] {
        let [a, b] = self.vertex_indices;
        if a <= b { [a, b] } else { [b, a] }
    }
}

impl PartialEq for LineSegment {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Eq for LineSegment {}

impl Hash for LineSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

impl From<[u32; 2]> for LineSegment {
    fn from(vertex_indices: [u32; 2]) -> Self {
        Self::new(vertex_indices)
    }
}

impl From<LineSegment> for PolygonalCircuit {
    fn from(segment: LineSegment) -> Self {
        Self::new(segment.vertex_indices)
    }
}
