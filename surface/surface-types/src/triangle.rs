//! Triangle faces referencing surface vertices by index.

use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{LineSegment, PolygonalCircuit};

/// A triangular face described by three vertex indices.
///
/// The indices are kept in winding order, but equality and hashing treat
/// rotations and reflections of the same three-cycle as equal, matching
/// [`PolygonalCircuit`] semantics.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    vertex_indices: [u32; 3],
}

impl Triangle {
    /// Create a triangle from three vertex indices in winding order.
    #[inline]
    #[must_use]
    pub const fn new(vertex_indices: [u32; 3]) -> Self {
        Self { vertex_indices }
    }

    /// The three corner indices in stored winding order.
    #[inline]
    #[must_use]
    pub const fn vertex_indices(&self) -> [u32; 3] {
        self.vertex_indices
    }

    /// The three edges of the triangle as undirected segments.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_types::{LineSegment, Triangle};
    ///
    /// let edges = Triangle::new([0, 1, 2]).adjacent_vertex_index_pairs();
    /// assert_eq!(edges[2], LineSegment::new([2, 0]));
    /// ```
    #[inline]
    #[must_use]
    pub const fn adjacent_vertex_index_pairs(&self) -> [LineSegment; 3] {
        let [a, b, c] = self.vertex_indices;
        [
            LineSegment::new([a, b]),
            LineSegment::new([b, c]),
            LineSegment::new([c, a]),
        ]
    }

    /// Rotated so the minimum corner is first and the smaller neighbour
    /// follows it.
    const fn ordered(&self) -> [u32; 3] {
        let v = self.vertex_indices;
        let min_position = if v[0] <= v[1] && v[0] <= v[2] {
            0
        } else if v[1] <= v[2] {
            1
        } else {
            2
        };
        let mut rotated = [
            v[min_position],
            v[(min_position + 1) % 3],
            v[(min_position + 2) % 3],
        ];
        if rotated[1] > rotated[2] {
            let tail = rotated[1];
            rotated[1] = rotated[2];
            rotated[2] = tail;
        }
        rotated
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

impl From<[u32; 3]> for Triangle {
    fn from(vertex_indices: [u32; 3]) -> Self {
        Self::new(vertex_indices)
    }
}

impl From<Triangle> for PolygonalCircuit {
    fn from(triangle: Triangle) -> Self {
        Self::new(triangle.vertex_indices)
    }
}
