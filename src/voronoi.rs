use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::primitives::{Triangle, UndirectedEdge};
use crate::{CoordNum, Point2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A finite edge of a Voronoi diagram.
///
/// Connects the circumcenters of two Delaunay triangles that share an edge.
/// Cells on the convex hull boundary are left open: no unbounded rays are
/// emitted for them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct VoronoiEdge {
    /// One endpoint of the edge.
    pub from: Point2<f64>,
    /// The other endpoint of the edge.
    pub to: Point2<f64>,
}

/// Derives the Voronoi diagram dual to a Delaunay triangulation.
///
/// For every input point, the fan of triangles incident to it is collected;
/// each pair of fan members sharing a full edge contributes the segment
/// between their circumcenters. Every finite dual edge is emitted exactly
/// once, even though two generators border it.
///
/// The triangle set must already be stripped of super-triangle artifacts
/// (as [crate::triangulate] guarantees), otherwise cells at the hull
/// boundary are corrupted by spurious edges reaching toward the synthetic
/// corners.
pub fn voronoi_edges<S: CoordNum>(
    points: &[Point2<S>],
    triangles: &[Triangle<S>],
) -> Vec<VoronoiEdge> {
    let mut edges = Vec::new();
    let mut emitted: HashSet<UndirectedEdge<S>> = HashSet::new();

    for &generator in points {
        let fan: SmallVec<[usize; 8]> = triangles
            .iter()
            .enumerate()
            .filter(|(_, triangle)| triangle.has_vertex(generator))
            .map(|(index, _)| index)
            .collect();

        for (position, &first) in fan.iter().enumerate() {
            for &second in &fan[position + 1..] {
                let shared = match triangles[first].shared_edge(&triangles[second]) {
                    Some(shared) => shared,
                    None => continue,
                };
                // Degenerate triangles carry no circumcenter; skipping such a
                // pair must not mark the shared edge as emitted.
                let (a, b) = match (
                    triangles[first].circumcircle(),
                    triangles[second].circumcircle(),
                ) {
                    (Some(a), Some(b)) => (a, b),
                    _ => continue,
                };
                if !emitted.insert(shared) {
                    continue;
                }
                edges.push(VoronoiEdge {
                    from: a.center,
                    to: b.center,
                });
            }
        }
    }

    edges
}
