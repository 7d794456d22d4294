//! Surface file I/O.
//!
//! This crate reads and writes the big-endian binary formats carried by
//! reconstructed cortical surfaces:
//!
//! - **Triangular surface** (`lh.pial`, `rh.white`, ...) - vertices,
//!   triangles and acquisition metadata
//! - **Annotation** (`lh.aparc.annot`, ...) - per-vertex color codes
//!   joined against a colortable of named labels
//!
//! Surface files carry no extension convention, so there is no
//! format-from-path detection; callers pick the loader matching the
//! file they hold.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero framework dependencies**. It can
//! be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Python bindings
//!
//! # Example
//!
//! ```no_run
//! use surface_io::{load_annotation, load_triangular};
//!
//! let surface = load_triangular("lh.pial").unwrap();
//! let annotation = load_annotation("lh.aparc.annot").unwrap();
//! println!(
//!     "{} vertices, {} annotated",
//!     surface.vertex_count(),
//!     annotation.vertex_color_codes().len()
//! );
//! ```
//!
//! # Quality Standards
//!
//! - >=90% test coverage
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod annotation;
mod error;
mod reader;
mod triangular;

pub use annotation::load_annotation;
pub use error::{IoError, IoResult};
pub use triangular::{load_triangular, save_triangular, save_triangular_with_timestamp};
