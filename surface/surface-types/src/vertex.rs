//! Surface vertex in scanner coordinates.

use core::ops::{Add, Mul, Sub};

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on a triangulated surface, in RAS scanner coordinates.
///
/// The axes follow the scanner convention: `right`, `anterior` and
/// `superior`. Coordinates are `f32`, matching the precision the surface
/// file format stores per vertex.
///
/// Vertices are plain values. Element-wise addition/subtraction and scalar
/// multiplication are provided for geometric construction (e.g. deriving a
/// parallelogram's fourth corner).
///
/// # Example
///
/// ```
/// use surface_types::Vertex;
///
/// let v = Vertex::new(1.0, 2.0, 3.0);
/// assert!((v.anterior - 2.0).abs() < f32::EPSILON);
///
/// let doubled = v * 2.0;
/// assert!((doubled.superior - 6.0).abs() < f32::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Coordinate along the left-right axis, positive towards right.
    pub right: f32,

    /// Coordinate along the posterior-anterior axis, positive towards anterior.
    pub anterior: f32,

    /// Coordinate along the inferior-superior axis, positive towards superior.
    pub superior: f32,
}

impl Vertex {
    /// Create a vertex from its three coordinates.
    #[inline]
    #[must_use]
    pub const fn new(right: f32, anterior: f32, superior: f32) -> Self {
        Self {
            right,
            anterior,
            superior,
        }
    }
}

impl Add for Vertex {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            right: self.right + other.right,
            anterior: self.anterior + other.anterior,
            superior: self.superior + other.superior,
        }
    }
}

impl Sub for Vertex {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            right: self.right - other.right,
            anterior: self.anterior - other.anterior,
            superior: self.superior - other.superior,
        }
    }
}

impl Mul<f32> for Vertex {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f32) -> Self {
        Self {
            right: self.right * factor,
            anterior: self.anterior * factor,
            superior: self.superior * factor,
        }
    }
}

impl From<Point3<f32>> for Vertex {
    #[inline]
    fn from(point: Point3<f32>) -> Self {
        Self::new(point.x, point.y, point.z)
    }
}

impl From<Vertex> for Point3<f32> {
    #[inline]
    fn from(vertex: Vertex) -> Self {
        Self::new(vertex.right, vertex.anterior, vertex.superior)
    }
}

impl From<[f32; 3]> for Vertex {
    #[inline]
    fn from(coords: [f32; 3]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }
}

impl From<Vertex> for [f32; 3] {
    #[inline]
    fn from(vertex: Vertex) -> Self {
        [vertex.right, vertex.anterior, vertex.superior]
    }
}
