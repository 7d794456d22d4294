//! Whole-surface border detection.

use hashbrown::{HashMap, HashSet};
use surface_types::{PolygonalCircuit, Surface};
use tracing::{debug, info};

use crate::adjacency::VertexAdjacency;
use crate::error::{BorderError, BorderResult};

/// Finds all borders of a surface.
///
/// A border is a closed circuit of vertices connected by edges that are
/// not shared by exactly two triangles. Vertices appearing in no triangle
/// at all form one-vertex circuits of their own.
///
/// Walks start at the smallest remaining vertex index and always take the
/// smallest remaining neighbour, so repeated calls return the same
/// circuits. A walk closes as soon as it reaches its starting vertex
/// again, which splits borders meeting at a shared vertex into separate
/// circuits.
///
/// # Errors
///
/// Returns [`BorderError::OddBorderDegree`] when a vertex has an odd
/// number of border neighbours and can therefore not lie on closed
/// circuits only.
///
/// # Example
///
/// ```
/// use surface_border::find_borders;
/// use surface_types::{Surface, Triangle, Vertex};
///
/// let mut surface = Surface::new();
/// for _ in 0..3 {
///     surface.add_vertex(Vertex::new(0.0, 0.0, 0.0));
/// }
/// surface.triangles.push(Triangle::new([0, 1, 2]));
///
/// let borders = find_borders(&surface)?;
/// assert_eq!(borders.len(), 1);
/// # Ok::<(), surface_border::BorderError>(())
/// ```
pub fn find_borders(surface: &Surface) -> BorderResult<HashSet<PolygonalCircuit>> {
    let adjacency = VertexAdjacency::build(surface.vertices.len(), &surface.triangles);
    let vertex_count = u32::try_from(surface.vertices.len()).unwrap_or(u32::MAX);

    let mut circuits = HashSet::new();
    let mut links: HashMap<u32, HashSet<u32>> = HashMap::new();
    for vertex in 0..vertex_count {
        if adjacency.is_isolated(vertex) {
            circuits.insert(PolygonalCircuit::new([vertex]));
            continue;
        }
        let neighbours = adjacency.border_neighbours(vertex);
        if neighbours.is_empty() {
            continue;
        }
        if neighbours.len() % 2 != 0 {
            return Err(BorderError::OddBorderDegree {
                vertex_index: vertex,
                neighbour_count: neighbours.len(),
            });
        }
        links.insert(vertex, neighbours);
    }
    debug!("Surface has {} border vertices", links.len());

    while let Some(&start) = links.keys().min() {
        let mut walk = vec![start];
        let mut current = start;
        loop {
            let next = take_min_link(&mut links, current)?;
            if next == start {
                break;
            }
            walk.push(next);
            current = next;
        }
        circuits.insert(PolygonalCircuit::new(walk));
    }

    info!("Found {} borders", circuits.len());
    Ok(circuits)
}

/// Removes and returns the smallest link out of `vertex`, dropping the
/// reverse direction as well. Entries left without links are removed so
/// the outer walk terminates when everything is consumed.
fn take_min_link(links: &mut HashMap<u32, HashSet<u32>>, vertex: u32) -> BorderResult<u32> {
    let Some(neighbours) = links.get_mut(&vertex) else {
        return Err(BorderError::OpenStrand {
            vertex_index: vertex,
        });
    };
    let Some(&next) = neighbours.iter().min() else {
        return Err(BorderError::OpenStrand {
            vertex_index: vertex,
        });
    };
    neighbours.remove(&next);
    if neighbours.is_empty() {
        links.remove(&vertex);
    }
    if let Some(reverse) = links.get_mut(&next) {
        reverse.remove(&vertex);
        if reverse.is_empty() {
            links.remove(&next);
        }
    }
    Ok(next)
}
