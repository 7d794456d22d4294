//! Per-vertex label annotations for triangulated surface meshes.
//!
//! An annotation assigns each vertex of a surface a packed color code and
//! resolves those codes against a colortable of named [`Label`]s. The
//! join from vertex to label happens once, in
//! [`Annotation::from_parts`], after which lookups are constant-time.
//!
//! ```
//! use surface_annot::{Annotation, Label};
//!
//! let precentral = Label {
//!     index: 24,
//!     name: "precentral".to_string(),
//!     red: 60,
//!     green: 20,
//!     blue: 220,
//!     transparency: 0,
//! };
//! let annotation = Annotation::from_parts(
//!     [(7, precentral.color_code())],
//!     None,
//!     [precentral],
//! )?;
//! assert_eq!(annotation.vertex_label(7).map(|label| label.index), Some(24));
//! # Ok::<(), surface_annot::AnnotError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod annotation;
mod error;
mod label;

pub use annotation::Annotation;
pub use error::{AnnotError, AnnotResult};
pub use label::Label;
