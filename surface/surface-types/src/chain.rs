//! Open or closed polygonal chains of vertex indices.

use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::circuit::position_of_minimum;
use crate::{GeometryError, GeometryResult, LineSegment};

/// A walk along vertex indices, extendable at both ends.
///
/// Chains grow by [`connect`](Self::connect)ing further chains onto either
/// end. Unlike [`PolygonalCircuit`](crate::PolygonalCircuit) the windows
/// over a chain do not wrap around, but equality still treats the vertex
/// sequence as a cycle so closed walks compare independently of their
/// starting point and direction.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonalChain {
    vertex_indices: VecDeque<u32>,
}

impl PolygonalChain {
    /// Create a chain from vertex indices in walk order.
    #[must_use]
    pub fn new(vertex_indices: impl IntoIterator<Item = u32>) -> Self {
        Self {
            vertex_indices: vertex_indices.into_iter().collect(),
        }
    }

    /// The vertex indices in walk order.
    #[inline]
    #[must_use]
    pub const fn vertex_indices(&self) -> &VecDeque<u32> {
        &self.vertex_indices
    }

    /// Number of vertices in the walk.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertex_indices.len()
    }

    /// Whether the chain has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_indices.is_empty()
    }

    /// The cycle-canonical representation of this chain.
    ///
    /// Same normalization as
    /// [`PolygonalCircuit::normalized`](crate::PolygonalCircuit::normalized):
    /// rotated so the minimum index is first, reversed when the reflected
    /// direction sorts lower.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            vertex_indices: self.normalized_indices().into(),
        }
    }

    fn normalized_indices(&self) -> Vec<u32> {
        let mut indices: Vec<u32> = self.vertex_indices.iter().copied().collect();
        let Some(min_position) = position_of_minimum(&indices) else {
            return indices;
        };
        indices.rotate_left(min_position);
        if indices.len() > 2 && indices[1] > indices[indices.len() - 1] {
            indices[1..].reverse();
        }
        indices
    }

    /// Non-wrapping windows of `N` consecutive vertex indices.
    ///
    /// A chain of `n` vertices yields `n + 1 - N` windows (none when the
    /// chain is shorter than the window).
    pub fn adjacent_vertex_indices<const N: usize>(&self) -> impl Iterator<Item = [u32; N]> + '_ {
        let count = (self.vertex_indices.len() + 1).saturating_sub(N);
        (0..count)
            .map(move |start| core::array::from_fn(|offset| self.vertex_indices[start + offset]))
    }

    /// The consecutive edges of the walk as undirected segments.
    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.adjacent_vertex_indices::<2>().map(LineSegment::new)
    }

    /// Splice `other` onto whichever end of `self` it shares a vertex with.
    ///
    /// The shared endpoint is kept once, not duplicated. When `other`
    /// attaches in reverse orientation it is flipped while splicing.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ChainsNotOverlapping`] when no endpoint of
    /// `other` coincides with an endpoint of `self`, or when either chain
    /// is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_types::PolygonalChain;
    ///
    /// let mut chain = PolygonalChain::new([1, 2, 3]);
    /// chain.connect(&PolygonalChain::new([4, 3]))?;
    /// assert_eq!(chain, PolygonalChain::new([1, 2, 3, 4]));
    /// # Ok::<(), surface_types::GeometryError>(())
    /// ```
    pub fn connect(&mut self, other: &Self) -> GeometryResult<()> {
        let (Some(&self_start), Some(&self_end)) =
            (self.vertex_indices.front(), self.vertex_indices.back())
        else {
            return Err(GeometryError::ChainsNotOverlapping);
        };
        let (Some(&other_start), Some(&other_end)) =
            (other.vertex_indices.front(), other.vertex_indices.back())
        else {
            return Err(GeometryError::ChainsNotOverlapping);
        };
        if other_start == self_end {
            self.vertex_indices.pop_back();
            self.vertex_indices.extend(other.vertex_indices.iter().copied());
        } else if other_end == self_end {
            self.vertex_indices.pop_back();
            self.vertex_indices.extend(other.vertex_indices.iter().rev().copied());
        } else if other_start == self_start {
            self.vertex_indices.pop_front();
            // Pushing front in walk order prepends the reversal of `other`
            for &index in &other.vertex_indices {
                self.vertex_indices.push_front(index);
            }
        } else if other_end == self_start {
            self.vertex_indices.pop_front();
            for &index in other.vertex_indices.iter().rev() {
                self.vertex_indices.push_front(index);
            }
        } else {
            return Err(GeometryError::ChainsNotOverlapping);
        }
        Ok(())
    }
}

impl PartialEq for PolygonalChain {
    fn eq(&self, other: &Self) -> bool {
        self.normalized_indices() == other.normalized_indices()
    }
}

impl Eq for PolygonalChain {}

impl FromIterator<u32> for PolygonalChain {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::new(iter)
    }
}
