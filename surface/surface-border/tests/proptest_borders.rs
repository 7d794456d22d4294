//! Property-based tests for border extraction.
//!
//! These tests generate random surfaces and segment sets and verify the
//! invariants the border walks rely on.
//!
//! Run with: cargo test -p surface-border --test proptest_borders

use hashbrown::{HashMap, HashSet};
use proptest::prelude::*;
use surface_border::{find_borders, label_border_segments, stitch_chains};
use surface_types::{LineSegment, PolygonalChain, PolygonalCircuit, Surface, Triangle, Vertex};

// =============================================================================
// Generators
// =============================================================================

/// Generate a closed torus grid surface; every edge is shared by exactly
/// two triangles. Requires `width` and `height` of at least three so the
/// wrap-around does not double any edge.
fn torus_surface(width: u32, height: u32) -> Surface {
    let mut surface = Surface::new();
    for row in 0..height {
        for column in 0..width {
            surface.add_vertex(Vertex::new(column as f32, row as f32, 0.0));
        }
    }
    let index = |row: u32, column: u32| (row % height) * width + (column % width);
    for row in 0..height {
        for column in 0..width {
            let a = index(row, column);
            let b = index(row, column + 1);
            let c = index(row + 1, column + 1);
            let d = index(row + 1, column);
            surface.triangles.push(Triangle::new([a, b, c]));
            surface.triangles.push(Triangle::new([c, d, a]));
        }
    }
    surface
}

/// Generate the segments of a few vertex-disjoint cycles, then rename the
/// first vertex of later cycles into the first cycle, so cycles may touch
/// at shared vertices while every vertex keeps an even link count.
fn arb_even_degree_segments() -> impl Strategy<Value = Vec<LineSegment>> {
    (
        prop::collection::vec(3u32..7, 1..4),
        prop::collection::vec(0usize..6, 0..3),
    )
        .prop_map(|(cycle_lengths, merge_seeds)| {
            let mut bases = Vec::new();
            let mut base = 0u32;
            for &length in &cycle_lengths {
                bases.push(base);
                base += length;
            }

            let mut rename: HashMap<u32, u32> = HashMap::new();
            for (offset, &seed) in merge_seeds.iter().enumerate() {
                let merged_cycle = offset + 1;
                if merged_cycle >= cycle_lengths.len() {
                    break;
                }
                let target = (seed % cycle_lengths[0] as usize) as u32;
                rename.insert(bases[merged_cycle], target);
            }

            let mut segments = Vec::new();
            for (&length, &cycle_base) in cycle_lengths.iter().zip(&bases) {
                for offset in 0..length {
                    let a = cycle_base + offset;
                    let b = cycle_base + (offset + 1) % length;
                    let a = rename.get(&a).copied().unwrap_or(a);
                    let b = rename.get(&b).copied().unwrap_or(b);
                    segments.push(LineSegment::new([a, b]));
                }
            }
            segments
        })
}

// =============================================================================
// Property Tests: Surface borders
// =============================================================================

proptest! {
    /// A closed surface has no borders at all.
    #[test]
    fn closed_surface_has_no_borders(width in 3u32..8, height in 3u32..8) {
        let surface = torus_surface(width, height);
        let borders = find_borders(&surface).unwrap();
        prop_assert!(borders.is_empty());
    }

    /// Removing one triangle from a closed surface opens exactly that
    /// triangle's outline.
    #[test]
    fn removing_a_triangle_opens_its_outline(
        width in 3u32..8,
        height in 3u32..8,
        removed in 0usize..128,
    ) {
        let mut surface = torus_surface(width, height);
        let removed = removed % surface.triangles.len();
        let triangle = surface.triangles.remove(removed);

        let borders = find_borders(&surface).unwrap();
        prop_assert_eq!(borders.len(), 1);
        prop_assert!(borders.contains(&PolygonalCircuit::from(triangle)));
    }

    /// Removing both triangles of one grid quad opens that quad.
    #[test]
    fn removing_a_quad_opens_a_square(
        width in 3u32..8,
        height in 3u32..8,
        quad in 0usize..64,
    ) {
        let mut surface = torus_surface(width, height);
        let quad = quad % (surface.triangles.len() / 2);
        let second = surface.triangles.remove(2 * quad + 1);
        let first = surface.triangles.remove(2 * quad);

        let borders = find_borders(&surface).unwrap();
        prop_assert_eq!(borders.len(), 1);

        let circuit = borders.iter().next().unwrap();
        prop_assert_eq!(circuit.len(), 4);
        let mut expected: Vec<u32> = first
            .vertex_indices()
            .into_iter()
            .chain(second.vertex_indices())
            .collect();
        expected.sort_unstable();
        expected.dedup();
        let mut corners = circuit.vertex_indices().to_vec();
        corners.sort_unstable();
        prop_assert_eq!(corners, expected);
    }
}

// =============================================================================
// Property Tests: Label border segments
// =============================================================================

proptest! {
    /// Both endpoints of a reported segment carry the label, and the
    /// segment lies on an edge of one of the input triangles.
    #[test]
    fn label_segments_connect_carriers(
        corner_triples in prop::collection::vec(prop::array::uniform3(0u32..12), 1..40),
        carriers in prop::collection::vec(any::<bool>(), 12),
    ) {
        let triangles: Vec<Triangle> =
            corner_triples.iter().map(|&corners| Triangle::new(corners)).collect();
        let label_map: HashMap<u32, u32> = carriers
            .iter()
            .enumerate()
            .map(|(vertex, &carries)| (vertex as u32, u32::from(carries)))
            .collect();

        for segment in label_border_segments(&triangles, 1, &label_map) {
            let [a, b] = segment.vertex_indices();
            prop_assert_eq!(label_map.get(&a), Some(&1));
            prop_assert_eq!(label_map.get(&b), Some(&1));
            let on_triangle_edge = triangles.iter().any(|triangle| {
                triangle
                    .adjacent_vertex_index_pairs()
                    .iter()
                    .any(|edge| *edge == segment)
            });
            prop_assert!(on_triangle_edge);
        }
    }
}

// =============================================================================
// Property Tests: Stitching
// =============================================================================

proptest! {
    /// Stitching an even-degree segment set succeeds, and the closed
    /// chains cover exactly the deduplicated input segments.
    #[test]
    fn stitching_covers_every_segment(segments in arb_even_degree_segments()) {
        let deduped: HashSet<LineSegment> = segments.iter().copied().collect();
        let chains = stitch_chains(segments).unwrap();

        let mut covered = HashSet::new();
        for chain in &chains {
            let indices: Vec<u32> = chain.vertex_indices().iter().copied().collect();
            prop_assert!(indices.len() >= 3);
            for window in indices.windows(2) {
                covered.insert(LineSegment::new([window[0], window[1]]));
            }
            covered.insert(LineSegment::new([indices[indices.len() - 1], indices[0]]));
        }
        prop_assert_eq!(covered, deduped);
    }
}

// =============================================================================
// Property Tests: Chain and circuit identity
// =============================================================================

proptest! {
    /// Rotating or reflecting a circuit of distinct vertices never
    /// changes its identity.
    #[test]
    fn circuit_identity_ignores_rotation_and_reflection(
        index_set in prop::collection::hash_set(any::<u32>(), 1..12),
        rotation in 0usize..12,
        reflect in any::<bool>(),
    ) {
        let indices: Vec<u32> = index_set.into_iter().collect();
        let circuit = PolygonalCircuit::new(indices.clone());

        let mut reshaped = indices;
        let rotation = rotation % reshaped.len();
        reshaped.rotate_left(rotation);
        if reflect {
            reshaped.reverse();
        }
        prop_assert_eq!(PolygonalCircuit::new(reshaped), circuit);
    }

    /// Splitting a path in two and reconnecting the parts restores the
    /// path, regardless of the direction of the second part.
    #[test]
    fn reconnecting_a_split_path_restores_it(
        length in 3usize..12,
        split in 1usize..10,
        reverse in any::<bool>(),
    ) {
        let split = split.min(length - 1);
        let path: Vec<u32> = (0..length as u32).map(|position| position * 7 + 3).collect();

        let mut front = PolygonalChain::new(path[..=split].iter().copied());
        let back_indices: Vec<u32> = if reverse {
            path[split..].iter().rev().copied().collect()
        } else {
            path[split..].to_vec()
        };
        front.connect(&PolygonalChain::new(back_indices)).unwrap();

        let connected: Vec<u32> = front.vertex_indices().iter().copied().collect();
        prop_assert_eq!(connected, path);
    }
}

// =============================================================================
// Generator sanity checks
// =============================================================================

#[test]
fn torus_generator_is_closed() {
    let surface = torus_surface(4, 5);
    assert_eq!(surface.vertex_count(), 20);
    assert_eq!(surface.triangle_count(), 40);
    assert!(find_borders(&surface).unwrap().is_empty());
}

#[test]
fn even_degree_generator_produces_no_dead_ends() {
    let segments = [[0, 1], [1, 2], [2, 0]].map(LineSegment::new);
    assert_eq!(stitch_chains(segments).unwrap().len(), 1);
}
