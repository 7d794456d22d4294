//! Border segments of annotation labels.

use hashbrown::HashMap;
use surface_types::{LineSegment, Triangle};

/// Collects the border segments of a label.
///
/// A triangle contributes a segment when exactly two of its corners carry
/// `label_index` in `vertex_label_index`; the segment connects those two
/// corners in winding order. Corners missing from the map never match,
/// regardless of the label searched for. Neighbouring triangles yield the
/// same segment once each, so callers interested in the segment set
/// deduplicate the result.
///
/// # Example
///
/// ```
/// use hashbrown::HashMap;
/// use surface_border::label_border_segments;
/// use surface_types::{LineSegment, Triangle};
///
/// let labels: HashMap<u32, u32> = [(1, 7), (2, 7)].into_iter().collect();
/// let segments = label_border_segments(&[Triangle::new([0, 1, 2])], 7, &labels);
/// assert_eq!(segments, [LineSegment::new([1, 2])]);
/// ```
#[must_use]
pub fn label_border_segments(
    triangles: &[Triangle],
    label_index: u32,
    vertex_label_index: &HashMap<u32, u32>,
) -> Vec<LineSegment> {
    let mut segments = Vec::new();
    for triangle in triangles {
        let labelled: Vec<u32> = triangle
            .vertex_indices()
            .into_iter()
            .filter(|corner| vertex_label_index.get(corner) == Some(&label_index))
            .collect();
        if let [a, b] = labelled[..] {
            segments.push(LineSegment::new([a, b]));
        }
    }
    segments
}
