//! Vertex adjacency counts for border detection.

use hashbrown::{HashMap, HashSet};
use surface_types::Triangle;

/// Per-vertex neighbour occurrence counts for a triangulated surface.
///
/// Each triangle contributes its three cyclic corner pairs, counted in
/// both directions. An edge interior to a closed surface is walked by
/// exactly two triangles, so any neighbour count other than two marks a
/// border edge.
#[derive(Debug, Clone)]
pub struct VertexAdjacency {
    /// Neighbour counts indexed by vertex. An empty map means the vertex
    /// appears in no triangle.
    neighbour_counts: Vec<HashMap<u32, usize>>,
}

impl VertexAdjacency {
    /// Counts neighbour occurrences over all triangles of a surface.
    ///
    /// Triangles with a corner at or beyond `vertex_count` are skipped
    /// edge by edge.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_border::VertexAdjacency;
    /// use surface_types::Triangle;
    ///
    /// let adjacency = VertexAdjacency::build(3, &[Triangle::new([0, 1, 2])]);
    /// assert_eq!(adjacency.border_neighbours(0).len(), 2);
    /// assert!(!adjacency.is_isolated(0));
    /// ```
    #[must_use]
    pub fn build(vertex_count: usize, triangles: &[Triangle]) -> Self {
        let mut neighbour_counts = vec![HashMap::new(); vertex_count];
        for triangle in triangles {
            for segment in triangle.adjacent_vertex_index_pairs() {
                let [a, b] = segment.vertex_indices();
                let (a_index, b_index) = (a as usize, b as usize);
                if a_index >= vertex_count || b_index >= vertex_count {
                    continue;
                }
                *neighbour_counts[a_index].entry(b).or_insert(0) += 1;
                *neighbour_counts[b_index].entry(a).or_insert(0) += 1;
            }
        }
        Self { neighbour_counts }
    }

    /// Number of vertices covered, matching the surface's vertex count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbour_counts.len()
    }

    /// Neighbour occurrence counts recorded for a vertex.
    ///
    /// Returns `None` when the vertex index lies beyond the covered range.
    #[must_use]
    pub fn neighbour_counts(&self, vertex_index: u32) -> Option<&HashMap<u32, usize>> {
        self.neighbour_counts.get(vertex_index as usize)
    }

    /// Neighbours connected to a vertex by a count other than two.
    ///
    /// An empty set means the vertex either sits in the interior of the
    /// surface or appears in no triangle at all; [`Self::is_isolated`]
    /// tells the two apart.
    #[must_use]
    pub fn border_neighbours(&self, vertex_index: u32) -> HashSet<u32> {
        self.neighbour_counts
            .get(vertex_index as usize)
            .map(|counts| {
                counts
                    .iter()
                    .filter(|&(_, &count)| count != 2)
                    .map(|(&neighbour, _)| neighbour)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether a vertex appears in no triangle at all.
    #[must_use]
    pub fn is_isolated(&self, vertex_index: u32) -> bool {
        self.neighbour_counts
            .get(vertex_index as usize)
            .is_some_and(HashMap::is_empty)
    }
}
