use num_traits::{Bounded, Num, NumCast, Signed};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate type that can be used as input for a triangulation.
///
/// Input coordinates are integral: they arrive as already-resolved canvas
/// positions. All circumcircle arithmetic is performed after converting the
/// type into an `f64`.
///
/// This type should usually be either `i32` or `i16`. Narrow types limit the
/// usable coordinate range: the synthetic super-triangle's corners must stay
/// representable, see [crate::validate_coordinate].
pub trait CoordNum:
    Num + Signed + Bounded + NumCast + Ord + Into<f64> + Copy + core::hash::Hash + core::fmt::Debug
{
}

impl<T> CoordNum for T where
    T: Num
        + Signed
        + Bounded
        + NumCast
        + Ord
        + Into<f64>
        + Copy
        + core::hash::Hash
        + core::fmt::Debug
{
}

/// A two dimensional point.
///
/// This is the basic type used for defining positions.
///
/// Points compare lexicographically by `(x, y)`, which is also the order in
/// which the triangulation processes its input.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Point2<S> {
    /// The point's x coordinate
    pub x: S,
    /// The point's y coordinate
    pub y: S,
}

impl<S> Point2<S> {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Point2 { x, y }
    }
}

impl<S: Num + Copy> Point2<S> {
    /// Returns the squared distance of this point and another point.
    #[inline]
    pub fn distance_2(&self, other: Self) -> S {
        self.sub(other).length2()
    }

    pub(crate) fn sub(&self, other: Self) -> Self {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub(crate) fn length2(&self) -> S {
        self.x * self.x + self.y * self.y
    }
}

impl<S: CoordNum> Point2<S> {
    pub(crate) fn to_f64(self) -> Point2<f64> {
        Point2::new(self.x.into(), self.y.into())
    }
}

impl<S: Num + Copy> From<Point2<S>> for [S; 2] {
    #[inline]
    fn from(point: Point2<S>) -> Self {
        [point.x, point.y]
    }
}

impl<S: Num + Copy> From<Point2<S>> for (S, S) {
    #[inline]
    fn from(point: Point2<S>) -> (S, S) {
        (point.x, point.y)
    }
}

impl<S: Num + Copy> From<[S; 2]> for Point2<S> {
    #[inline]
    fn from(source: [S; 2]) -> Self {
        Self::new(source[0], source[1])
    }
}

impl<S: Num + Copy> From<(S, S)> for Point2<S> {
    #[inline]
    fn from(source: (S, S)) -> Self {
        Self::new(source.0, source.1)
    }
}

#[cfg(test)]
mod test {
    use super::Point2;

    #[test]
    fn test_lexicographic_order() {
        let mut points = vec![
            Point2::new(5, 1),
            Point2::new(0, 7),
            Point2::new(5, -3),
            Point2::new(-2, 0),
        ];
        points.sort_unstable();
        assert_eq!(
            points,
            vec![
                Point2::new(-2, 0),
                Point2::new(0, 7),
                Point2::new(5, -3),
                Point2::new(5, 1),
            ]
        );
    }

    #[test]
    fn test_distance_2() {
        let p1 = Point2::new(0, 0);
        let p2 = Point2::new(3, 4);
        assert_eq!(p1.distance_2(p2), 25);
        assert_eq!(p2.distance_2(p1), 25);
    }

    #[test]
    fn test_conversions() {
        let point = Point2::new(1, 2);
        let array: [i32; 2] = point.into();
        assert_eq!(array, [1, 2]);
        assert_eq!(Point2::from((1, 2)), point);
        assert_eq!(Point2::from([1, 2]), point);
    }
}
