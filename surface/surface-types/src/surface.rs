//! Triangulated surface meshes with acquisition metadata.

use chrono::NaiveDateTime;
use hashbrown::{HashMap, HashSet};

use crate::{GeometryError, GeometryResult, Triangle, Vertex};

/// A triangle mesh plus the metadata carried by scanner-derived surface
/// files.
///
/// Vertices and triangles are plain public vectors; triangles reference
/// vertices by `u32` index. The metadata fields round-trip through the
/// binary surface format and default to empty for surfaces built in
/// memory.
///
/// # Example
///
/// ```
/// use surface_types::{Surface, Triangle, Vertex};
///
/// let mut surface = Surface::new();
/// let a = surface.add_vertex(Vertex::new(0.0, 0.0, 0.0));
/// let b = surface.add_vertex(Vertex::new(1.0, 0.0, 0.0));
/// let c = surface.add_vertex(Vertex::new(0.0, 1.0, 0.0));
/// surface.triangles.push(Triangle::new([a, b, c]));
/// assert_eq!(surface.vertex_count(), 3);
/// assert_eq!(surface.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Surface {
    /// Vertex positions in right/anterior/superior coordinates.
    pub vertices: Vec<Vertex>,
    /// Triangular faces referencing `vertices` by index.
    pub triangles: Vec<Triangle>,
    /// Name of the program or person that produced the surface.
    pub creator: Option<String>,
    /// Timestamp from the surface file's comment line.
    pub creation_datetime: Option<NaiveDateTime>,
    /// Legacy coordinate-system flag stored alongside the mesh.
    pub using_old_real_ras: bool,
    /// The eight verbatim volume geometry lines, when present.
    pub volume_geometry_info: Option<[String; 8]>,
    /// Shell commands recorded by the tools that touched the file.
    pub command_lines: Vec<String>,
}

impl Surface {
    /// Create an empty surface with no metadata.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            creator: None,
            creation_datetime: None,
            using_old_real_ras: false,
            volume_geometry_info: None,
            command_lines: Vec::new(),
        }
    }

    /// Create an empty surface with preallocated vertex and triangle
    /// storage.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            ..Self::new()
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Append a vertex and return its index.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: indices are u32, surfaces above 4 billion vertices are unsupported
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        self.vertices.push(vertex);
        (self.vertices.len() - 1) as u32
    }

    /// Append a rectangle as two triangles.
    ///
    /// The corner indices are taken in perimeter order; the rectangle is
    /// split along the diagonal between the first and third corner.
    pub fn add_rectangle(&mut self, corner_indices: [u32; 4]) {
        let [a, b, c, d] = corner_indices;
        self.triangles.push(Triangle::new([a, b, c]));
        self.triangles.push(Triangle::new([c, d, a]));
    }

    /// Complete three rectangle corners to a full rectangle and append it.
    ///
    /// The missing fourth corner is the parallelogram completion of the
    /// three given corners (opposite the middle one). A vertex is added
    /// for it and its index returned.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::VertexIndexOutOfBounds`] when any corner
    /// index does not refer to an existing vertex.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_types::{Surface, Vertex};
    ///
    /// let mut surface = Surface::new();
    /// let a = surface.add_vertex(Vertex::new(0.0, 0.0, 0.0));
    /// let b = surface.add_vertex(Vertex::new(2.0, 4.0, 0.0));
    /// let c = surface.add_vertex(Vertex::new(2.0, 4.0, 3.0));
    /// let d = surface.add_rectangle_from_triangle_corners([a, b, c])?;
    /// assert_eq!(surface.vertices[d as usize], Vertex::new(0.0, 0.0, 3.0));
    /// assert_eq!(surface.triangle_count(), 2);
    /// # Ok::<(), surface_types::GeometryError>(())
    /// ```
    pub fn add_rectangle_from_triangle_corners(
        &mut self,
        corner_indices: [u32; 3],
    ) -> GeometryResult<u32> {
        let corners = self.select_vertices(&corner_indices)?;
        let fourth_index = self.add_vertex(corners[0] - corners[1] + corners[2]);
        self.add_rectangle([
            corner_indices[0],
            corner_indices[1],
            corner_indices[2],
            fourth_index,
        ]);
        Ok(fourth_index)
    }

    /// Look up several vertices by index.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::VertexIndexOutOfBounds`] for the first
    /// index that does not refer to an existing vertex.
    pub fn select_vertices(&self, vertex_indices: &[u32]) -> GeometryResult<Vec<Vertex>> {
        vertex_indices
            .iter()
            .map(|&index| {
                self.vertices.get(index as usize).copied().ok_or_else(|| {
                    GeometryError::vertex_out_of_bounds(index, self.vertices.len())
                })
            })
            .collect()
    }

    /// Indices of vertices no triangle refers to.
    #[must_use]
    pub fn unused_vertices(&self) -> HashSet<u32> {
        let mut referenced = HashSet::with_capacity(self.vertices.len());
        for triangle in &self.triangles {
            referenced.extend(triangle.vertex_indices());
        }
        let vertex_count = u32::try_from(self.vertices.len()).unwrap_or(u32::MAX);
        (0..vertex_count)
            .filter(|index| !referenced.contains(index))
            .collect()
    }

    /// Drop vertices no triangle refers to, compacting the remaining
    /// indices while preserving their order.
    pub fn remove_unused_vertices(&mut self) {
        let unused = self.unused_vertices();
        if unused.is_empty() {
            return;
        }
        let kept_count = self.vertices.len() - unused.len();
        let mut remap: HashMap<u32, u32> = HashMap::with_capacity(kept_count);
        let mut kept = Vec::with_capacity(kept_count);
        for (old_index, vertex) in self.vertices.iter().enumerate() {
            let old_index = u32::try_from(old_index).unwrap_or(u32::MAX);
            if !unused.contains(&old_index) {
                let new_index = u32::try_from(kept.len()).unwrap_or(u32::MAX);
                remap.insert(old_index, new_index);
                kept.push(*vertex);
            }
        }
        self.vertices = kept;
        for triangle in &mut self.triangles {
            let remapped =
                triangle.vertex_indices().map(|index| remap.get(&index).copied().unwrap_or(index));
            *triangle = Triangle::new(remapped);
        }
    }

    /// Append another surface's geometry, shifting its triangle indices
    /// past this surface's vertices. Metadata of `self` is kept.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: indices are u32, surfaces above 4 billion vertices are unsupported
    pub fn merge(&mut self, other: &Self) {
        let vertex_offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(other.triangles.iter().map(|triangle| {
            Triangle::new(triangle.vertex_indices().map(|index| index + vertex_offset))
        }));
    }

    /// Combine several surfaces into one mesh.
    ///
    /// The first surface contributes its metadata; every later surface is
    /// merged in with its triangle indices shifted. Returns `None` when
    /// the iterator is empty.
    #[must_use]
    pub fn unite(surfaces: impl IntoIterator<Item = Self>) -> Option<Self> {
        let mut surfaces = surfaces.into_iter();
        let mut united = surfaces.next()?;
        for surface in surfaces {
            united.merge(&surface);
        }
        Some(united)
    }
}
