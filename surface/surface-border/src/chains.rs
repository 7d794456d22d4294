//! Stitching border segments into closed chains.

use hashbrown::{HashMap, HashSet};
use surface_types::{LineSegment, PolygonalChain, Triangle};
use tracing::{debug, info};

use crate::error::{BorderError, BorderResult};
use crate::segments::label_border_segments;

/// A vertex index together with a split ordinal.
///
/// Junctions are resolved by splitting the junction vertex into copies.
/// Ordinal zero is the vertex as read from the segments, higher ordinals
/// are copies introduced while splitting. Chains report the plain vertex
/// index and drop the ordinal.
type SplitVertex = (u32, u32);

/// Finds the closed border chains of a label.
///
/// The border segments of the label are collected with
/// [`label_border_segments`], deduplicated and stitched into closed
/// chains; see [`stitch_chains`] for how dead ends and junctions are
/// resolved.
///
/// # Errors
///
/// Forwards the errors of [`stitch_chains`].
pub fn label_border_chains(
    triangles: &[Triangle],
    label_index: u32,
    vertex_label_index: &HashMap<u32, u32>,
) -> BorderResult<Vec<PolygonalChain>> {
    stitch_chains(label_border_segments(
        triangles,
        label_index,
        vertex_label_index,
    ))
}

/// Stitches border segments into closed chains.
///
/// Input segments are deduplicated first, so passing the same segment
/// once or twice makes no difference. Dead-end strands are resolved by
/// vertex splitting: the strand is walked from its loose end, every
/// vertex along it gains a split copy, and at the first junction the
/// smallest onward link is rerouted onto the copy. The strand then reads
/// as a narrow loop doubling back on itself, and its vertices appear
/// twice in the resulting chain.
///
/// After splitting, every vertex must hold an even number of links.
/// Chains are extracted smallest-vertex-first, consuming every link
/// exactly once, so repeated calls return the chains in the same order.
///
/// # Errors
///
/// - [`BorderError::DegenerateSegment`] when a segment connects a vertex
///   to itself.
/// - [`BorderError::OpenStrand`] when a strand ends in a second dead end
///   instead of rejoining the border.
/// - [`BorderError::OddBorderDegree`] when a vertex is left with an odd
///   number of links, which cannot be covered by closed chains.
///
/// # Example
///
/// ```
/// use surface_border::stitch_chains;
/// use surface_types::{LineSegment, PolygonalChain};
///
/// let segments = [[0, 1], [1, 2], [2, 0]].map(LineSegment::new);
/// let chains = stitch_chains(segments)?;
/// assert_eq!(chains, [PolygonalChain::new([0, 1, 2])]);
/// # Ok::<(), surface_border::BorderError>(())
/// ```
pub fn stitch_chains(
    segments: impl IntoIterator<Item = LineSegment>,
) -> BorderResult<Vec<PolygonalChain>> {
    let deduped: HashSet<LineSegment> = segments.into_iter().collect();

    let mut links: HashMap<SplitVertex, HashSet<SplitVertex>> = HashMap::new();
    for segment in &deduped {
        let [a, b] = segment.vertex_indices();
        if a == b {
            return Err(BorderError::DegenerateSegment { vertex_index: a });
        }
        insert_link(&mut links, (a, 0), (b, 0));
    }

    let mut split_ordinals: HashMap<u32, u32> = HashMap::new();
    let mut strand_count = 0_usize;
    while let Some(leaf) = smallest_leaf(&links) {
        resolve_strand(leaf, &mut links, &mut split_ordinals)?;
        strand_count += 1;
    }
    if strand_count > 0 {
        debug!("Resolved {} dead-end strands by splitting vertices", strand_count);
    }

    if let Some((&(vertex, _), neighbours)) = links
        .iter()
        .filter(|(_, neighbours)| neighbours.len() % 2 != 0)
        .min_by_key(|&(&node, _)| node)
    {
        return Err(BorderError::OddBorderDegree {
            vertex_index: vertex,
            neighbour_count: neighbours.len(),
        });
    }

    let mut chains = Vec::new();
    while let Some(&start) = links.keys().min() {
        let mut walk = vec![start.0];
        let mut current = start;
        loop {
            let next = take_min_link(&mut links, current)?;
            if next == start {
                break;
            }
            walk.push(next.0);
            current = next;
        }
        chains.push(PolygonalChain::new(walk));
    }

    info!("Stitched {} segments into {} chains", deduped.len(), chains.len());
    Ok(chains)
}

/// Walks the strand hanging off `leaf` and reroutes it onto split copies,
/// so the strand doubles back along itself and rejoins the remaining
/// border at its first junction.
fn resolve_strand(
    leaf: SplitVertex,
    links: &mut HashMap<SplitVertex, HashSet<SplitVertex>>,
    split_ordinals: &mut HashMap<u32, u32>,
) -> BorderResult<()> {
    let Some(&first) = links.get(&leaf).and_then(|neighbours| neighbours.iter().min()) else {
        return Err(BorderError::OpenStrand {
            vertex_index: leaf.0,
        });
    };
    let mut previous = leaf;
    let mut previous_copy = leaf;
    let mut current = first;
    loop {
        let mut onward: Vec<SplitVertex> = links
            .get(&current)
            .map(|neighbours| {
                neighbours
                    .iter()
                    .copied()
                    .filter(|&node| node != previous)
                    .collect()
            })
            .unwrap_or_default();
        onward.sort_unstable();

        match onward[..] {
            [] => {
                return Err(BorderError::OpenStrand {
                    vertex_index: current.0,
                });
            }
            [next] => {
                let copy = split_vertex(current.0, split_ordinals);
                insert_link(links, previous_copy, copy);
                previous = current;
                previous_copy = copy;
                current = next;
            }
            [stolen, ..] => {
                let copy = split_vertex(current.0, split_ordinals);
                insert_link(links, previous_copy, copy);
                remove_link(links, current, stolen);
                insert_link(links, copy, stolen);
                return Ok(());
            }
        }
    }
}

fn smallest_leaf(links: &HashMap<SplitVertex, HashSet<SplitVertex>>) -> Option<SplitVertex> {
    links
        .iter()
        .filter(|(_, neighbours)| neighbours.len() == 1)
        .map(|(&node, _)| node)
        .min()
}

fn split_vertex(vertex: u32, split_ordinals: &mut HashMap<u32, u32>) -> SplitVertex {
    let ordinal = split_ordinals.entry(vertex).or_insert(0);
    *ordinal += 1;
    (vertex, *ordinal)
}

fn insert_link(
    links: &mut HashMap<SplitVertex, HashSet<SplitVertex>>,
    a: SplitVertex,
    b: SplitVertex,
) {
    links.entry(a).or_default().insert(b);
    links.entry(b).or_default().insert(a);
}

fn remove_link(
    links: &mut HashMap<SplitVertex, HashSet<SplitVertex>>,
    a: SplitVertex,
    b: SplitVertex,
) {
    if let Some(neighbours) = links.get_mut(&a) {
        neighbours.remove(&b);
    }
    if let Some(neighbours) = links.get_mut(&b) {
        neighbours.remove(&a);
    }
}

/// Removes and returns the smallest link out of `node`, dropping the
/// reverse direction as well. Entries left without links are removed so
/// the extraction loop terminates when everything is consumed.
fn take_min_link(
    links: &mut HashMap<SplitVertex, HashSet<SplitVertex>>,
    node: SplitVertex,
) -> BorderResult<SplitVertex> {
    let Some(neighbours) = links.get_mut(&node) else {
        return Err(BorderError::OpenStrand {
            vertex_index: node.0,
        });
    };
    let Some(&next) = neighbours.iter().min() else {
        return Err(BorderError::OpenStrand {
            vertex_index: node.0,
        });
    };
    neighbours.remove(&next);
    if neighbours.is_empty() {
        links.remove(&node);
    }
    if let Some(reverse) = links.get_mut(&next) {
        reverse.remove(&node);
        if reverse.is_empty() {
            links.remove(&next);
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(pairs: &[[u32; 2]]) -> Vec<LineSegment> {
        pairs.iter().copied().map(LineSegment::new).collect()
    }

    fn indices(chain: &PolygonalChain) -> Vec<u32> {
        chain.vertex_indices().iter().copied().collect()
    }

    #[test]
    fn no_segments_yield_no_chains() {
        assert!(stitch_chains(segments(&[])).unwrap().is_empty());
    }

    #[test]
    fn single_cycle_is_walked_from_its_smallest_vertex() {
        let chains = stitch_chains(segments(&[[2, 3], [0, 1], [1, 2], [3, 0]])).unwrap();
        assert_eq!(chains.len(), 1);
        assert_eq!(indices(&chains[0]), [0, 1, 2, 3]);
    }

    #[test]
    fn duplicate_segments_collapse() {
        let chains = stitch_chains(segments(&[[0, 1], [1, 0], [1, 2], [2, 0]])).unwrap();
        assert_eq!(chains.len(), 1);
        assert_eq!(indices(&chains[0]), [0, 1, 2]);
    }

    #[test]
    fn dead_end_strand_doubles_back_through_a_junction() {
        let chains =
            stitch_chains(segments(&[[0, 1], [1, 2], [0, 3], [2, 3], [2, 4], [4, 5]])).unwrap();
        assert_eq!(chains.len(), 1);
        assert_eq!(indices(&chains[0]), [0, 1, 2, 4, 5, 4, 2, 3]);
    }

    #[test]
    fn strand_attached_to_a_cycle_forms_a_lasso() {
        let chains = stitch_chains(segments(&[[0, 1], [1, 2], [2, 3], [3, 1]])).unwrap();
        assert_eq!(chains.len(), 1);
        assert_eq!(indices(&chains[0]), [0, 1, 3, 2, 1]);
    }

    #[test]
    fn disjoint_cycles_come_out_smallest_first() {
        let chains = stitch_chains(segments(&[
            [10, 11],
            [11, 12],
            [12, 10],
            [0, 1],
            [1, 2],
            [2, 0],
        ]))
        .unwrap();
        assert_eq!(chains.len(), 2);
        assert_eq!(indices(&chains[0]), [0, 1, 2]);
        assert_eq!(indices(&chains[1]), [10, 11, 12]);
    }

    #[test]
    fn cycles_sharing_a_vertex_are_split() {
        let chains =
            stitch_chains(segments(&[[0, 1], [1, 2], [2, 0], [2, 3], [3, 4], [4, 2]])).unwrap();
        assert_eq!(chains.len(), 2);
        assert_eq!(indices(&chains[0]), [0, 1, 2]);
        assert_eq!(indices(&chains[1]), [2, 3, 4]);
    }

    #[test]
    fn degenerate_segment_is_rejected() {
        assert_eq!(
            stitch_chains(segments(&[[3, 3]])),
            Err(BorderError::DegenerateSegment { vertex_index: 3 })
        );
    }

    #[test]
    fn strand_with_two_dead_ends_is_rejected() {
        assert_eq!(
            stitch_chains(segments(&[[0, 1], [1, 2]])),
            Err(BorderError::OpenStrand { vertex_index: 2 })
        );
        assert_eq!(
            stitch_chains(segments(&[[0, 1]])),
            Err(BorderError::OpenStrand { vertex_index: 1 })
        );
    }

    #[test]
    fn unresolvable_junction_is_rejected() {
        // Theta graph, no dead ends but two vertices of degree three.
        assert_eq!(
            stitch_chains(segments(&[[0, 1], [1, 2], [0, 2], [0, 3], [3, 2]])),
            Err(BorderError::OddBorderDegree {
                vertex_index: 0,
                neighbour_count: 3,
            })
        );
    }

    #[test]
    fn label_border_around_a_box_top() {
        let triangles: Vec<Triangle> = [
            [0, 2, 1],
            [0, 3, 2],
            [0, 1, 5],
            [0, 5, 4],
            [1, 2, 6],
            [1, 6, 5],
            [2, 3, 7],
            [2, 7, 6],
            [3, 0, 4],
            [3, 4, 7],
            [4, 5, 6],
            [4, 6, 7],
        ]
        .map(Triangle::new)
        .to_vec();
        let label_map: HashMap<u32, u32> =
            [(4, 24), (5, 24), (6, 24), (7, 24), (0, 1), (1, 1)].into_iter().collect();

        let chains = label_border_chains(&triangles, 24, &label_map).unwrap();
        assert_eq!(chains.len(), 1);
        assert_eq!(indices(&chains[0]), [4, 5, 6, 7]);
    }
}
