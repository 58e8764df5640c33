use std::{error::Error, fmt::Display};

use crate::{CoordNum, Point2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fixed tolerance used by all circumcircle arithmetic.
///
/// It gates two decisions:
///  - which perpendicular bisector is considered well-conditioned when a
///    triangle edge is (nearly) horizontal
///  - the inside/outside classification of [Circumcircle::contains]
///
/// A query point whose squared distance to the circumcenter exceeds the
/// squared radius by no more than this value still counts as inside. The bias
/// is required for correctness of the incremental triangulation: a point
/// sitting exactly on an existing circumcircle must trigger retriangulation.
pub const EPSILON: f64 = 1.0e-4;

/// The largest allowed absolute coordinate value, equal to 2<sup>24</sup>.
///
/// Squared distances of validated coordinates stay within the exactly
/// representable integer range of an `f64`, keeping the tolerance in
/// [EPSILON] meaningful.
///
/// *See also [validate_coordinate], [validate_point]*
pub const MAX_ALLOWED_COORDINATE: f64 = 16_777_216.0; // 1.0 * 2^24

/// The error type used for inserting points into a [crate::Diagram].
///
/// Errors during insertion can only originate from an oversized coordinate.
/// Coordinates can be checked up front with [validate_point].
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
pub enum InsertionError {
    /// A coordinate value was too large.
    ///
    /// The absolute value of any inserted coordinate must be less than or
    /// equal to [MAX_ALLOWED_COORDINATE].
    TooLarge,
}

impl Display for InsertionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Debug>::fmt(self, f)
    }
}

impl Error for InsertionError {}

/// Checks if a coordinate value is suitable for insertion into a diagram.
///
/// Will return an error if and only if the absolute value of the coordinate
/// is larger than [MAX_ALLOWED_COORDINATE], or larger than a sixteenth of the
/// scalar type's maximum. The second bound keeps the corners of the
/// bounding-box derived super-triangle representable in `S`: they can sit up
/// to nine times the largest input magnitude away from the origin.
///
/// For `i32` the [MAX_ALLOWED_COORDINATE] bound is the tighter one; for
/// narrower types like `i16` the scalar bound governs.
pub fn validate_coordinate<S: CoordNum>(value: S) -> Result<(), InsertionError> {
    let as_f64: f64 = value.into();
    if as_f64.abs() > MAX_ALLOWED_COORDINATE.min(scalar_frame_limit::<S>()) {
        Err(InsertionError::TooLarge)
    } else {
        Ok(())
    }
}

/// The largest input magnitude for which an enclosing super-triangle is still
/// representable in `S`.
pub(crate) fn scalar_frame_limit<S: CoordNum>() -> f64 {
    let max_value: f64 = S::max_value().into();
    max_value / 16.0
}

/// Checks if a point is suitable for insertion into a diagram.
///
/// A point is considered suitable if both of its coordinates are valid. See
/// [validate_coordinate] for more information.
pub fn validate_point<S: CoordNum>(point: Point2<S>) -> Result<(), InsertionError> {
    validate_coordinate(point.x)?;
    validate_coordinate(point.y)?;
    Ok(())
}

/// The circle through a triangle's three vertices.
///
/// Returned by [circumcircle]. The squared radius is kept instead of the
/// radius so that containment tests need no square root.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Circumcircle {
    /// The circle's center, i.e. the triangle's circumcenter.
    pub center: Point2<f64>,
    /// The circle's squared radius.
    pub radius_2: f64,
}

impl Circumcircle {
    /// Returns `true` if the query point lies inside or on this circle.
    ///
    /// Points whose squared center distance exceeds the squared radius by at
    /// most [EPSILON] count as inside.
    #[inline]
    pub fn contains(&self, query: Point2<f64>) -> bool {
        query.distance_2(self.center) - self.radius_2 <= EPSILON
    }
}

/// Computes the circle through three points.
///
/// The center is found by intersecting the perpendicular bisectors of the
/// edges `(a, b)` and `(b, c)`. Whenever one of those edges is (nearly)
/// horizontal its bisector's slope degenerates, so the routine switches to
/// the midpoint of the well-conditioned edge instead.
///
/// Returns `None` if the three points are collinear within tolerance; no
/// circle passes through them in that case.
pub fn circumcircle(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Option<Circumcircle> {
    let abs_y_ab = (a.y - b.y).abs();
    let abs_y_bc = (b.y - c.y).abs();

    if abs_y_ab < EPSILON && abs_y_bc < EPSILON {
        return None;
    }
    if is_collinear(a, b, c) {
        // Bisectors of a diagonal collinear triple are parallel. The
        // intersection below would divide by zero.
        return None;
    }

    let center_x;
    let center_y;
    if abs_y_ab < EPSILON {
        let m2 = -(c.x - b.x) / (c.y - b.y);
        let mx2 = (b.x + c.x) / 2.0;
        let my2 = (b.y + c.y) / 2.0;
        center_x = (b.x + a.x) / 2.0;
        center_y = m2 * (center_x - mx2) + my2;
    } else if abs_y_bc < EPSILON {
        let m1 = -(b.x - a.x) / (b.y - a.y);
        let mx1 = (a.x + b.x) / 2.0;
        let my1 = (a.y + b.y) / 2.0;
        center_x = (c.x + b.x) / 2.0;
        center_y = m1 * (center_x - mx1) + my1;
    } else {
        let m1 = -(b.x - a.x) / (b.y - a.y);
        let m2 = -(c.x - b.x) / (c.y - b.y);
        let mx1 = (a.x + b.x) / 2.0;
        let mx2 = (b.x + c.x) / 2.0;
        let my1 = (a.y + b.y) / 2.0;
        let my2 = (b.y + c.y) / 2.0;
        center_x = (m1 * mx1 - m2 * mx2 + my2 - my1) / (m1 - m2);
        center_y = if abs_y_ab > abs_y_bc {
            m1 * (center_x - mx1) + my1
        } else {
            m2 * (center_x - mx2) + my2
        };
    }

    let center = Point2::new(center_x, center_y);
    Some(Circumcircle {
        center,
        radius_2: b.distance_2(center),
    })
}

fn to_robust_coord(point: Point2<f64>) -> robust::Coord<f64> {
    robust::Coord {
        x: point.x,
        y: point.y,
    }
}

/// Exact collinearity check via the `orient2d` determinant.
pub(crate) fn is_collinear(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> bool {
    robust::orient2d(to_robust_coord(a), to_robust_coord(b), to_robust_coord(c)) == 0.0
}
