//! Triangulated surface meshes with per-vertex label annotations.
//!
//! This umbrella crate re-exports the surface-* crates, providing a
//! unified API for loading, editing and analyzing surface scans. All
//! crates are Layer 0 (zero framework dependencies) and can be used in
//! CLI tools, WASM, servers, or Python bindings.
//!
//! # Quick Start
//!
//! ```no_run
//! use surface::prelude::*;
//!
//! // Load a surface and its annotation
//! let surface = surface::io::load_triangular("lh.pial").unwrap();
//! let annotation = surface::io::load_annotation("lh.aparc.annot").unwrap();
//!
//! // Walk the borders of a label
//! let finder = BorderFinder::new(&surface).with_annotation(&annotation);
//! for chain in finder.label_border_chains(24).unwrap() {
//!     println!("{} border vertices", chain.len());
//! }
//!
//! // Save an edited copy
//! surface::io::save_triangular(&surface, "lh.pial.out").unwrap();
//! ```
//!
//! # Module Organization
//!
//! ## Foundation
//! - [`types`] - Core data structures: `Surface`, `Vertex`, `Triangle`, chains and circuits
//! - [`annot`] - Label annotations: `Annotation`, `Label`
//!
//! ## Operations
//! - [`io`] - Reading and writing surface and annotation files
//! - [`border`] - Border extraction for surfaces and labels
//!
//! # Feature Flags
//!
//! - `serde` - Serde support for the plain data types

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![doc(html_root_url = "https://docs.rs/surface/0.1.0")]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `Surface`, `Vertex`, `Triangle`, chains and circuits.
pub use surface_types as types;

/// Label annotations and colortables.
pub use surface_annot as annot;

/// Reading and writing surface and annotation files.
pub use surface_io as io;

/// Border extraction for surfaces and labels.
pub use surface_border as border;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for surface processing.
///
/// This module re-exports the most commonly used types and functions.
///
/// # Usage
///
/// ```
/// use surface::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use surface_types::{
        LineSegment, PolygonalChain, PolygonalCircuit, Surface, Triangle, Vertex,
    };

    // Annotations
    pub use surface_annot::{Annotation, Label};

    // I/O
    pub use surface_io::{load_annotation, load_triangular, save_triangular};

    // Borders (main use case)
    pub use surface_border::BorderFinder;
}

// =============================================================================
// Tests
// =============================================================================
