//! Border queries over a surface and its annotation.

use hashbrown::HashSet;
use surface_annot::Annotation;
use surface_types::{LineSegment, PolygonalChain, PolygonalCircuit, Surface};

use crate::borders::find_borders;
use crate::chains::label_border_chains;
use crate::error::{BorderError, BorderResult};
use crate::segments::label_border_segments;

/// Border queries bound to a surface and, optionally, its annotation.
///
/// Mesh borders only need the surface. Label borders additionally need
/// an annotation attached with [`Self::with_annotation`]; label queries
/// on a finder without one fail with
/// [`BorderError::MissingAnnotation`].
///
/// # Example
///
/// ```
/// use surface_border::BorderFinder;
/// use surface_types::{Surface, Triangle, Vertex};
///
/// let mut surface = Surface::new();
/// for _ in 0..3 {
///     surface.add_vertex(Vertex::new(0.0, 0.0, 0.0));
/// }
/// surface.triangles.push(Triangle::new([0, 1, 2]));
///
/// let borders = BorderFinder::new(&surface).mesh_borders()?;
/// assert_eq!(borders.len(), 1);
/// # Ok::<(), surface_border::BorderError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BorderFinder<'a> {
    surface: &'a Surface,
    annotation: Option<&'a Annotation>,
}

impl<'a> BorderFinder<'a> {
    /// Creates a finder over a surface without an annotation.
    #[must_use]
    pub const fn new(surface: &'a Surface) -> Self {
        Self {
            surface,
            annotation: None,
        }
    }

    /// Attaches the annotation used to resolve label borders.
    #[must_use]
    pub const fn with_annotation(mut self, annotation: &'a Annotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Finds the borders of the surface itself.
    ///
    /// # Errors
    ///
    /// Forwards the errors of [`find_borders`].
    pub fn mesh_borders(&self) -> BorderResult<HashSet<PolygonalCircuit>> {
        find_borders(self.surface)
    }

    /// Collects the deduplicated border segments of a label.
    ///
    /// # Errors
    ///
    /// Returns [`BorderError::MissingAnnotation`] when no annotation is
    /// attached.
    pub fn label_border_segments(&self, label_index: u32) -> BorderResult<HashSet<LineSegment>> {
        let annotation = self.annotation()?;
        Ok(label_border_segments(
            &self.surface.triangles,
            label_index,
            annotation.vertex_label_index(),
        )
        .into_iter()
        .collect())
    }

    /// Stitches the border segments of a label into closed chains.
    ///
    /// # Errors
    ///
    /// Returns [`BorderError::MissingAnnotation`] when no annotation is
    /// attached, otherwise forwards the errors of [`label_border_chains`].
    pub fn label_border_chains(&self, label_index: u32) -> BorderResult<Vec<PolygonalChain>> {
        let annotation = self.annotation()?;
        label_border_chains(
            &self.surface.triangles,
            label_index,
            annotation.vertex_label_index(),
        )
    }

    fn annotation(&self) -> BorderResult<&'a Annotation> {
        self.annotation.ok_or(BorderError::MissingAnnotation)
    }
}
