//! Per-vertex label annotations.

use hashbrown::HashMap;
use tracing::warn;

use crate::{AnnotError, AnnotResult, Label};

/// A per-vertex labelling of a surface, joined against its colortable.
///
/// Annotation files store a packed color code per vertex and a colortable
/// mapping label indices to names and colors. [`Annotation::from_parts`]
/// performs the join once, so lookups from vertex to label are plain map
/// accesses afterwards.
#[derive(Debug, Clone, Default)]
pub struct Annotation {
    vertex_color_codes: HashMap<u32, u32>,
    colortable_path: Option<Vec<u8>>,
    labels: HashMap<u32, Label>,
    vertex_label_index: HashMap<u32, u32>,
}

impl Annotation {
    /// Join raw annotation data with its colortable.
    ///
    /// `vertex_color_codes` pairs each annotated vertex with its packed
    /// color code, in file order. When the colortable lists the same
    /// label index twice the later entry wins.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotError::UnknownColorCode`] for the first vertex
    /// whose color code no label produces.
    pub fn from_parts(
        vertex_color_codes: impl IntoIterator<Item = (u32, u32)>,
        colortable_path: Option<Vec<u8>>,
        labels: impl IntoIterator<Item = Label>,
    ) -> AnnotResult<Self> {
        let mut labels_by_index: HashMap<u32, Label> = HashMap::new();
        for label in labels {
            if let Some(previous) = labels_by_index.insert(label.index, label) {
                warn!(
                    "colortable lists label index {} ({}) more than once, keeping the later entry",
                    previous.index, previous.name
                );
            }
        }
        let label_index_by_color_code: HashMap<u32, u32> = labels_by_index
            .values()
            .map(|label| (label.color_code(), label.index))
            .collect();

        let mut codes = HashMap::new();
        let mut vertex_label_index = HashMap::new();
        for (vertex_index, color_code) in vertex_color_codes {
            let Some(&label_index) = label_index_by_color_code.get(&color_code) else {
                return Err(AnnotError::UnknownColorCode {
                    color_code,
                    vertex_index,
                });
            };
            codes.insert(vertex_index, color_code);
            vertex_label_index.insert(vertex_index, label_index);
        }

        Ok(Self {
            vertex_color_codes: codes,
            colortable_path,
            labels: labels_by_index,
            vertex_label_index,
        })
    }

    /// The packed color code stored for each annotated vertex.
    #[inline]
    #[must_use]
    pub const fn vertex_color_codes(&self) -> &HashMap<u32, u32> {
        &self.vertex_color_codes
    }

    /// The colortable filename recorded in the annotation file, verbatim.
    #[inline]
    #[must_use]
    pub fn colortable_path(&self) -> Option<&[u8]> {
        self.colortable_path.as_deref()
    }

    /// Colortable labels keyed by label index.
    #[inline]
    #[must_use]
    pub const fn labels(&self) -> &HashMap<u32, Label> {
        &self.labels
    }

    /// The label index assigned to each annotated vertex.
    #[inline]
    #[must_use]
    pub const fn vertex_label_index(&self) -> &HashMap<u32, u32> {
        &self.vertex_label_index
    }

    /// The label of one vertex, or `None` when the vertex is not
    /// annotated.
    #[must_use]
    pub fn vertex_label(&self, vertex_index: u32) -> Option<&Label> {
        let label_index = self.vertex_label_index.get(&vertex_index)?;
        self.labels.get(label_index)
    }
}
