use crate::math::{validate_point, InsertionError};
use crate::primitives::Triangle;
use crate::triangulation::triangulate;
use crate::voronoi::{voronoi_edges, VoronoiEdge};
use crate::{CoordNum, Point2};

/// Selects which structure a [Diagram] maintains after each mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagramView {
    /// Keep the Delaunay triangulation up to date.
    #[default]
    Delaunay,
    /// Keep both the triangulation and its Voronoi dual up to date.
    Voronoi,
}

/// The state of an interactive Delaunay / Voronoi canvas.
///
/// Owns the inserted point set together with the triangle and dual edge
/// collections derived from it. Every mutation rebuilds the derived
/// collections from scratch; nothing is persisted incrementally across
/// insertions.
///
/// # Example
/// ```
/// use bowyer::{Diagram, DiagramView};
///
/// let mut diagram = Diagram::with_view(DiagramView::Voronoi);
/// for (x, y) in [(0, 0), (12, 0), (14, 10), (2, 11)] {
///     diagram.insert_point(x, y)?;
/// }
///
/// assert_eq!(diagram.triangles().len(), 2);
/// assert_eq!(diagram.voronoi_edges().len(), 1);
///
/// diagram.clear_points();
/// assert!(diagram.points().is_empty());
/// # Ok::<(), bowyer::InsertionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Diagram<S: CoordNum = i32> {
    points: Vec<Point2<S>>,
    triangles: Vec<Triangle<S>>,
    voronoi_edges: Vec<VoronoiEdge>,
    view: DiagramView,
}

impl<S: CoordNum> Diagram<S> {
    /// Creates an empty diagram showing the Delaunay view.
    pub fn new() -> Self {
        Self::with_view(DiagramView::default())
    }

    /// Creates an empty diagram showing the given view.
    pub fn with_view(view: DiagramView) -> Self {
        Diagram {
            points: Vec::new(),
            triangles: Vec::new(),
            voronoi_edges: Vec::new(),
            view,
        }
    }

    /// Returns the currently active view.
    pub fn view(&self) -> DiagramView {
        self.view
    }

    /// Switches the active view and rebuilds the derived collections.
    pub fn set_view(&mut self, view: DiagramView) {
        self.view = view;
        self.refresh();
    }

    /// Appends a point and rebuilds the active view.
    ///
    /// Fails without modifying the diagram if a coordinate exceeds
    /// [crate::MAX_ALLOWED_COORDINATE].
    pub fn insert_point(&mut self, x: S, y: S) -> Result<(), InsertionError> {
        let point = Point2::new(x, y);
        validate_point(point)?;
        self.points.push(point);
        self.refresh();
        Ok(())
    }

    /// Removes all points and the collections derived from them.
    pub fn clear_points(&mut self) {
        self.points.clear();
        self.triangles.clear();
        self.voronoi_edges.clear();
    }

    /// Rebuilds the Delaunay triangulation from the current point set.
    ///
    /// Stale Voronoi edges are discarded; use [Self::rebuild_voronoi] to
    /// refresh both collections.
    pub fn rebuild_delaunay(&mut self) -> &[Triangle<S>] {
        self.triangles = triangulate(&self.points);
        self.voronoi_edges.clear();
        &self.triangles
    }

    /// Rebuilds the triangulation and derives its Voronoi dual.
    ///
    /// Both [Self::triangles] and [Self::voronoi_edges] reflect the current
    /// point set afterwards.
    pub fn rebuild_voronoi(&mut self) -> &[VoronoiEdge] {
        self.rebuild_delaunay();
        self.voronoi_edges = voronoi_edges(&self.points, &self.triangles);
        &self.voronoi_edges
    }

    /// The inserted points, in insertion order.
    pub fn points(&self) -> &[Point2<S>] {
        &self.points
    }

    /// The triangles of the most recent rebuild.
    pub fn triangles(&self) -> &[Triangle<S>] {
        &self.triangles
    }

    /// The Voronoi edges of the most recent rebuild.
    ///
    /// Empty unless the active view is [DiagramView::Voronoi] or
    /// [Self::rebuild_voronoi] was called explicitly.
    pub fn voronoi_edges(&self) -> &[VoronoiEdge] {
        &self.voronoi_edges
    }

    fn refresh(&mut self) {
        match self.view {
            DiagramView::Delaunay => {
                self.rebuild_delaunay();
            }
            DiagramView::Voronoi => {
                self.rebuild_voronoi();
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Diagram, DiagramView};
    use crate::{InsertionError, Point2};

    #[test]
    fn test_insert_rebuilds_delaunay_view() {
        let mut diagram = Diagram::new();
        diagram.insert_point(0, 0).unwrap();
        diagram.insert_point(10, 0).unwrap();
        assert!(diagram.triangles().is_empty());

        diagram.insert_point(5, 10).unwrap();
        assert_eq!(diagram.triangles().len(), 1);
        assert!(diagram.voronoi_edges().is_empty());
        assert_eq!(
            diagram.points(),
            &[Point2::new(0, 0), Point2::new(10, 0), Point2::new(5, 10)]
        );
    }

    #[test]
    fn test_voronoi_view_keeps_both_collections() {
        let mut diagram = Diagram::with_view(DiagramView::Voronoi);
        for (x, y) in [(0, 0), (12, 0), (14, 10), (2, 11)] {
            diagram.insert_point(x, y).unwrap();
        }
        assert_eq!(diagram.triangles().len(), 2);
        assert_eq!(diagram.voronoi_edges().len(), 1);
    }

    #[test]
    fn test_view_toggle() {
        let mut diagram = Diagram::new();
        for (x, y) in [(0, 0), (12, 0), (14, 10), (2, 11)] {
            diagram.insert_point(x, y).unwrap();
        }
        assert!(diagram.voronoi_edges().is_empty());

        diagram.set_view(DiagramView::Voronoi);
        assert_eq!(diagram.view(), DiagramView::Voronoi);
        assert_eq!(diagram.voronoi_edges().len(), 1);

        diagram.set_view(DiagramView::Delaunay);
        assert!(diagram.voronoi_edges().is_empty());
        assert_eq!(diagram.triangles().len(), 2);
    }

    #[test]
    fn test_clear_points() {
        let mut diagram = Diagram::with_view(DiagramView::Voronoi);
        for (x, y) in [(0, 0), (12, 0), (14, 10), (2, 11)] {
            diagram.insert_point(x, y).unwrap();
        }
        diagram.clear_points();
        assert!(diagram.points().is_empty());
        assert!(diagram.triangles().is_empty());
        assert!(diagram.voronoi_edges().is_empty());
    }

    #[test]
    fn test_oversized_coordinate_is_rejected() {
        let mut diagram = Diagram::new();
        diagram.insert_point(0, 0).unwrap();
        let result = diagram.insert_point(20_000_000, 3);
        assert_eq!(result, Err(InsertionError::TooLarge));
        // The diagram is unchanged.
        assert_eq!(diagram.points().len(), 1);
    }

    #[test]
    fn test_explicit_rebuilds_are_idempotent() {
        let mut diagram = Diagram::new();
        for (x, y) in [(0, 0), (12, 0), (14, 10), (2, 11), (7, 5)] {
            diagram.insert_point(x, y).unwrap();
        }
        let first = diagram.rebuild_delaunay().to_vec();
        let second = diagram.rebuild_delaunay().to_vec();
        assert_eq!(first, second);
    }
}
