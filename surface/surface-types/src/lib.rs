//! Core geometric types for labelled triangulated surface meshes.
//!
//! This crate provides the foundational types for surface boundary
//! extraction:
//!
//! - [`Vertex`] - A point in right/anterior/superior scanner coordinates
//! - [`Surface`] - A triangle mesh with indexed vertices and file metadata
//! - [`Triangle`] - An undirected 3-cycle of vertex indices
//! - [`LineSegment`] - An undirected edge between two vertices
//! - [`PolygonalCircuit`] - A closed cycle of vertex indices
//! - [`PolygonalChain`] - An open path of vertex indices, spliceable end-to-end
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero framework dependencies**. It can be
//! used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Python bindings
//!
//! # Index Addressing
//!
//! Vertices live in a flat, append-only list and are referenced everywhere
//! else by `u32` index. Triangles, segments, circuits and chains never hold
//! vertex data, only indices; the surface owning the vertex list is the
//! single source of truth.
//!
//! # Example
//!
//! ```
//! use surface_types::{Surface, Triangle, Vertex};
//!
//! let mut surface = Surface::new();
//! surface.add_vertex(Vertex::new(0.0, 0.0, 0.0));
//! surface.add_vertex(Vertex::new(1.0, 0.0, 0.0));
//! surface.add_vertex(Vertex::new(0.0, 1.0, 0.0));
//! surface.triangles.push(Triangle::new([0, 1, 2]));
//!
//! assert_eq!(surface.vertex_count(), 3);
//! assert_eq!(surface.triangle_count(), 1);
//! ```
//!
//! # Quality Standards
//!
//! - ≥90% test coverage
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod chain;
mod circuit;
mod error;
mod segment;
mod surface;
mod triangle;
mod vertex;

// Re-export core types
pub use chain::PolygonalChain;
pub use circuit::PolygonalCircuit;
pub use error::{GeometryError, GeometryResult};
pub use segment::LineSegment;
pub use surface::Surface;
pub use triangle::Triangle;
pub use vertex::Vertex;

// Re-export nalgebra's point type for convenience
pub use nalgebra::Point3;
