use hashbrown::HashMap;

use crate::math::is_collinear;
use crate::primitives::{Triangle, UndirectedEdge};
use crate::{CoordNum, Point2};

/// Computes a super-triangle enclosing all given points.
///
/// The triangle is derived from the input's bounding box, scaled outward by a
/// safety margin. Seeding the incremental triangulation with a triangle that
/// does not strictly enclose every input point makes circumcircle tests near
/// the hull unreliable, so the corners are always placed relative to the
/// actual data rather than at fixed coordinates.
///
/// The frame arithmetic happens in `f64`: coordinate spans close to the
/// scalar type's range would overflow it otherwise. Corners are rounded back
/// into `S`, clamping at the type's bounds. A clamped corner cannot strictly
/// enclose the input anymore; [crate::validate_coordinate] rejects
/// coordinates large enough to get there.
///
/// # Panics
/// Panics if `points` is empty.
pub fn super_triangle<S: CoordNum>(points: &[Point2<S>]) -> Triangle<S> {
    assert!(
        !points.is_empty(),
        "super_triangle requires at least one point"
    );
    let mut min = points[0];
    let mut max = points[0];
    for point in points {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
    }
    let min = min.to_f64();
    let max = max.to_f64();

    let delta = (max.x - min.x).max(max.y - min.y).max(1.0);
    // Twice the bounding box extent leaves the hull comfortably clear of the
    // synthetic corners even for a degenerate (single point) box.
    let margin = delta + delta;
    let mid_x = (min.x + max.x) / 2.0;
    let mid_y = (min.y + max.y) / 2.0;

    Triangle::new(
        Point2::new(
            to_scalar(mid_x - margin - margin),
            to_scalar(mid_y - margin),
        ),
        Point2::new(to_scalar(mid_x), to_scalar(mid_y + margin + margin)),
        Point2::new(
            to_scalar(mid_x + margin + margin),
            to_scalar(mid_y - margin),
        ),
    )
}

/// Rounds a frame coordinate back into the scalar type, clamping at its
/// bounds instead of overflowing.
fn to_scalar<S: CoordNum>(value: f64) -> S {
    match S::from(value.round()) {
        Some(value) => value,
        None if value < 0.0 => S::min_value(),
        None => S::max_value(),
    }
}

/// Computes the Delaunay triangulation of the given points.
///
/// Points are processed in lexicographic `(x, y)` order with the
/// Bowyer–Watson insertion step: triangles whose circumcircle contains the
/// new point are removed, the resulting polygonal cavity is re-triangulated
/// by connecting the point to every cavity boundary edge.
///
/// The returned triangle set fulfills the empty circumcircle property: no
/// input point lies strictly inside the circumcircle of any returned
/// triangle. Triangles touching the synthetic super-triangle are stripped, so
/// inputs of fewer than three (or entirely collinear) points legitimately
/// produce an empty result.
///
/// Duplicate input points are tolerated and do not affect the result.
///
/// # Example
/// ```
/// use bowyer::{triangulate, Point2};
///
/// let points = [
///     Point2::new(0, 0),
///     Point2::new(10, 0),
///     Point2::new(5, 10),
/// ];
/// let triangles = triangulate(&points);
/// assert_eq!(triangles.len(), 1);
/// ```
pub fn triangulate<S: CoordNum>(points: &[Point2<S>]) -> Vec<Triangle<S>> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut sorted = points.to_vec();
    sorted.sort_unstable();

    let frame = super_triangle(&sorted);
    let corners = frame.vertices();
    let mut triangles = vec![frame];

    for &point in &sorted {
        insert_point(&mut triangles, point);
    }

    triangles.retain(|triangle| !corners.iter().any(|&corner| triangle.has_vertex(corner)));
    triangles
}

/// A single Bowyer–Watson insertion step.
///
/// The survivor set is rebuilt by value: no reference into `triangles` is
/// held across its mutation.
fn insert_point<S: CoordNum>(triangles: &mut Vec<Triangle<S>>, point: Point2<S>) {
    let query = point.to_f64();

    let mut cavity_edges = Vec::new();
    let mut kept = Vec::with_capacity(triangles.len());
    for triangle in triangles.drain(..) {
        let in_circle = triangle
            .circumcircle()
            .is_some_and(|circle| circle.contains(query));
        if in_circle {
            cavity_edges.extend(triangle.edges());
        } else {
            kept.push(triangle);
        }
    }
    *triangles = kept;

    // Interior cavity edges are shared by two removed triangles and cancel;
    // boundary edges occur exactly once.
    let mut multiplicity: HashMap<UndirectedEdge<S>, usize> =
        HashMap::with_capacity(cavity_edges.len());
    for &edge in &cavity_edges {
        *multiplicity.entry(edge).or_insert(0) += 1;
    }

    // Iterating the edge list instead of the map keeps the fan order, and
    // with it the whole rebuild, deterministic.
    for edge in cavity_edges {
        if multiplicity[&edge] != 1 {
            continue;
        }
        let [u, v] = edge.endpoints();
        if is_collinear(u.to_f64(), v.to_f64(), query) {
            // Happens when the new point coincides with or lies on an
            // existing edge. Fanning would create a zero-area triangle.
            continue;
        }
        triangles.push(Triangle::new(u, v, point));
    }
}
