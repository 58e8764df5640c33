use crate::math::{circumcircle, Circumcircle};
use crate::{CoordNum, Point2};

/// An undirected edge between two input points.
///
/// Equality and hashing are symmetric: `UndirectedEdge::new(a, b)` and
/// `UndirectedEdge::new(b, a)` describe the same edge. The endpoints are
/// normalized to lexicographic order at construction, so the derived
/// implementations realize that contract.
///
/// This symmetry is what drives cavity boundary detection during
/// triangulation: interior edges of a cavity occur twice among the edges of
/// the removed triangles and cancel, boundary edges occur once and survive.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct UndirectedEdge<S: CoordNum> {
    lower: Point2<S>,
    upper: Point2<S>,
}

impl<S: CoordNum> UndirectedEdge<S> {
    /// Creates a new undirected edge. Endpoint order is irrelevant.
    pub fn new(from: Point2<S>, to: Point2<S>) -> Self {
        if to < from {
            UndirectedEdge {
                lower: to,
                upper: from,
            }
        } else {
            UndirectedEdge {
                lower: from,
                upper: to,
            }
        }
    }

    /// Returns both endpoints in their normalized (lexicographic) order.
    pub fn endpoints(&self) -> [Point2<S>; 2] {
        [self.lower, self.upper]
    }

    /// Returns `true` if the given point is one of this edge's endpoints.
    pub fn is_incident_to(&self, point: Point2<S>) -> bool {
        self.lower == point || self.upper == point
    }
}

/// A triangle of the evolving triangulation.
///
/// The three vertices are kept in the order they were passed in; no winding
/// is guaranteed. Equality compares the vertices as a set, so any rotation or
/// reflection of the same three points describes the same triangle.
///
/// The circumcircle is computed once at construction. It is `None` for
/// degenerate (collinear) vertex triples; such triangles never participate
/// in retriangulation because no query point tests inside a missing circle.
#[derive(Debug, Clone, Copy)]
pub struct Triangle<S: CoordNum> {
    vertices: [Point2<S>; 3],
    circumcircle: Option<Circumcircle>,
}

impl<S: CoordNum> Triangle<S> {
    /// Creates a new triangle from three vertices.
    pub fn new(p1: Point2<S>, p2: Point2<S>, p3: Point2<S>) -> Self {
        Triangle {
            vertices: [p1, p2, p3],
            circumcircle: circumcircle(p1.to_f64(), p2.to_f64(), p3.to_f64()),
        }
    }

    /// Returns the three vertices in creation order.
    pub fn vertices(&self) -> [Point2<S>; 3] {
        self.vertices
    }

    /// Returns the three edges `(p1, p2)`, `(p2, p3)` and `(p3, p1)`.
    pub fn edges(&self) -> [UndirectedEdge<S>; 3] {
        let [p1, p2, p3] = self.vertices;
        [
            UndirectedEdge::new(p1, p2),
            UndirectedEdge::new(p2, p3),
            UndirectedEdge::new(p3, p1),
        ]
    }

    /// Returns this triangle's circumcircle, or `None` if the vertices are
    /// collinear.
    pub fn circumcircle(&self) -> Option<Circumcircle> {
        self.circumcircle
    }

    /// Returns `true` if the given point is one of this triangle's vertices.
    pub fn has_vertex(&self, point: Point2<S>) -> bool {
        self.vertices.contains(&point)
    }

    /// Returns the edge this triangle shares with another triangle, if any.
    pub fn shared_edge(&self, other: &Triangle<S>) -> Option<UndirectedEdge<S>> {
        let other_edges = other.edges();
        self.edges()
            .into_iter()
            .find(|edge| other_edges.contains(edge))
    }

    fn sorted_vertices(&self) -> [Point2<S>; 3] {
        let mut vertices = self.vertices;
        vertices.sort_unstable();
        vertices
    }
}

impl<S: CoordNum> PartialEq for Triangle<S> {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_vertices() == other.sorted_vertices()
    }
}

impl<S: CoordNum> Eq for Triangle<S> {}
