//! # Bowyer
//! An incremental [Delaunay triangulation](https://en.wikipedia.org/wiki/Delaunay_triangulation)
//! and [Voronoi diagram](https://en.wikipedia.org/wiki/Voronoi_diagram) engine
//! for interactive canvases.
//!
//! Points are inserted one at a time with the Bowyer–Watson algorithm: a
//! synthetic super-triangle derived from the input's bounding box seeds the
//! triangulation, each insertion carves out the cavity of triangles whose
//! circumcircle contains the new point and re-fans its boundary, and the
//! super-triangle is stripped from the final result. The Voronoi diagram is
//! derived as the dual of the finished triangulation by connecting
//! circumcenters of adjacent triangles.
//!
//! # Features
//! * [triangulate] - the Delaunay triangulation of an integer point set
//! * [voronoi_edges] - the finite edges of its Voronoi dual
//! * [Diagram] - an owned canvas state with insertion, reset and view
//!   switching, meant to sit between an input handler and a render loop
//!
//! # Example
//! ```
//! use bowyer::{triangulate, voronoi_edges, Point2};
//!
//! let points = vec![
//!     Point2::new(0, 0),
//!     Point2::new(12, 0),
//!     Point2::new(14, 10),
//!     Point2::new(2, 11),
//! ];
//!
//! let triangles = triangulate(&points);
//! assert_eq!(triangles.len(), 2);
//!
//! // The two triangles share a diagonal; its dual is the single finite
//! // Voronoi edge of this point set.
//! let edges = voronoi_edges(&points, &triangles);
//! assert_eq!(edges.len(), 1);
//! ```
//!
//! All circumcircle arithmetic is epsilon tolerant floating point (see
//! [EPSILON]); input coordinates are integral canvas positions. The crate
//! performs no I/O and owns no windowing concerns.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod diagram;
mod math;
mod point;
mod primitives;
mod triangulation;
mod voronoi;

#[cfg(test)]
mod test_utilities;

pub use diagram::{Diagram, DiagramView};
pub use math::{
    circumcircle, validate_coordinate, validate_point, Circumcircle, InsertionError, EPSILON,
    MAX_ALLOWED_COORDINATE,
};
pub use point::{CoordNum, Point2};
pub use primitives::{Triangle, UndirectedEdge};
pub use triangulation::{super_triangle, triangulate};
pub use voronoi::{voronoi_edges, VoronoiEdge};
