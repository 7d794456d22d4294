//! Closed polygonal circuits of vertex indices.

use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed, undirected cycle of vertex indices.
///
/// The stored order is whatever the caller supplied; equality and hashing
/// work on the normalized form, so two circuits compare equal when one can
/// be rotated (and possibly reflected) into the other.
///
/// # Example
///
/// ```
/// use surface_types::PolygonalCircuit;
///
/// let a = PolygonalCircuit::new([0, 1, 2, 4]);
/// let b = PolygonalCircuit::new([2, 4, 0, 1]);
/// let c = PolygonalCircuit::new([4, 2, 1, 0]);
/// assert_eq!(a, b); // rotation
/// assert_eq!(a, c); // reflection
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonalCircuit {
    vertex_indices: Vec<u32>,
}

impl PolygonalCircuit {
    /// Create a circuit from vertex indices in cycle order.
    #[inline]
    #[must_use]
    pub fn new(vertex_indices: impl Into<Vec<u32>>) -> Self {
        Self {
            vertex_indices: vertex_indices.into(),
        }
    }

    /// The vertex indices in stored cycle order.
    #[inline]
    #[must_use]
    pub fn vertex_indices(&self) -> &[u32] {
        &self.vertex_indices
    }

    /// Number of vertices (= number of edges) in the cycle.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertex_indices.len()
    }

    /// Whether the circuit has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_indices.is_empty()
    }

    /// The canonical representation of this cycle.
    ///
    /// Rotated so the minimum index comes first; if the element after the
    /// minimum exceeds the element before it (wrapping around), the
    /// direction is reversed. Equality and hashing use this form.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_types::PolygonalCircuit;
    ///
    /// let circuit = PolygonalCircuit::new([3, 1, 2]);
    /// assert_eq!(circuit.normalized().vertex_indices(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            vertex_indices: self.normalized_indices(),
        }
    }

    fn normalized_indices(&self) -> Vec<u32> {
        let mut indices = self.vertex_indices.clone();
        let Some(min_position) = position_of_minimum(&indices) else {
            return indices;
        };
        indices.rotate_left(min_position);
        if indices.len() > 2 && indices[1] > indices[indices.len() - 1] {
            // Reflect while keeping the minimum in front
            indices[1..].reverse();
        }
        indices
    }

    /// Cyclic windows of `N` consecutive vertex indices.
    ///
    /// One window starts at every vertex, wrapping past the end (multiple
    /// times when `N` exceeds the cycle length), so the iterator yields
    /// exactly [`len`](Self::len) windows.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_types::PolygonalCircuit;
    ///
    /// let triangle = PolygonalCircuit::new([0, 1, 2]);
    /// let pairs: Vec<[u32; 2]> = triangle.adjacent_vertex_indices().collect();
    /// assert_eq!(pairs, vec![[0, 1], [1, 2], [2, 0]]);
    /// ```
    pub fn adjacent_vertex_indices<const N: usize>(&self) -> impl Iterator<Item = [u32; N]> + '_ {
        let len = self.vertex_indices.len();
        (0..len)
            .map(move |start| core::array::from_fn(|offset| self.vertex_indices[(start + offset) % len]))
    }
}

impl PartialEq for PolygonalCircuit {
    fn eq(&self, other: &Self) -> bool {
        self.normalized_indices() == other.normalized_indices()
    }
}

impl Eq for PolygonalCircuit {}

impl Hash for PolygonalCircuit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized_indices().hash(state);
    }
}

impl FromIterator<u32> for PolygonalCircuit {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            vertex_indices: iter.into_iter().collect(),
        }
    }
}

/// Position of the smallest index, preferring the earliest occurrence.
pub(crate) fn position_of_minimum(indices: &[u32]) -> Option<usize> {
    indices
        .iter()
        .enumerate()
        .min_by_key(|&(position, &index)| (index, position))
        .map(|(position, _)| position)
}
