//! Border extraction for triangulated surfaces and their annotations.
//!
//! This crate provides tools for:
//! - Vertex adjacency counting over a surface's triangles
//! - Finding the borders of a surface as closed circuits
//! - Collecting the border segments of an annotation label
//! - Stitching border segments into closed polygonal chains
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with zero framework dependencies.
//!
//! # Example
//!
//! ```
//! use surface_border::BorderFinder;
//! use surface_types::{Surface, Triangle, Vertex};
//!
//! // A single triangle is bordered by its own outline.
//! let mut surface = Surface::new();
//! surface.add_vertex(Vertex::new(0.0, 0.0, 0.0));
//! surface.add_vertex(Vertex::new(1.0, 0.0, 0.0));
//! surface.add_vertex(Vertex::new(0.0, 1.0, 0.0));
//! surface.triangles.push(Triangle::new([0, 1, 2]));
//!
//! let borders = BorderFinder::new(&surface).mesh_borders()?;
//! assert_eq!(borders.len(), 1);
//! # Ok::<(), surface_border::BorderError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod borders;
mod chains;
mod error;
mod finder;
mod segments;

pub use adjacency::VertexAdjacency;
pub use borders::find_borders;
pub use chains::{label_border_chains, stitch_chains};
pub use error::{BorderError, BorderResult};
pub use finder::BorderFinder;
pub use segments::label_border_segments;
