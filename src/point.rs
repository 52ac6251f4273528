//! Two-dimensional point, the value stored in every tree node
use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::Axis;

/// Number of dimensions of every point. The split axis at depth `d` is `d % K`.
pub(crate) const K: usize = 2;

/// An immutable 2-D coordinate.
///
/// Axis 0 is `x` and axis 1 is `y`, so axis-generic code can use `point[axis]`.
///
/// # Examples
///
/// ```rust
/// use cgl::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
///
/// assert_eq!(b[0], 3.0);
/// assert_eq!(b[1], 4.0);
/// assert_eq!(a.distance(&b), 5.0);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<A = f64> {
    /// horizontal coordinate, axis 0
    pub x: A,
    /// vertical coordinate, axis 1
    pub y: A,
}

impl<A: Axis> Point<A> {
    /// Creates a point from its coordinates
    #[inline]
    pub fn new(x: A, y: A) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between `self` and `other`
    #[inline]
    pub fn distance(&self, other: &Self) -> A {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Coordinates as an array, in axis order
    #[inline]
    pub fn to_array(self) -> [A; K] {
        [self.x, self.y]
    }
}

impl<A> Index<usize> for Point<A> {
    type Output = A;

    /// Panics if `axis` is neither 0 nor 1.
    #[inline]
    fn index(&self, axis: usize) -> &A {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("axis {axis} out of range for a 2-D point"),
        }
    }
}

impl<A: Axis> From<[A; K]> for Point<A> {
    fn from([x, y]: [A; K]) -> Self {
        Self { x, y }
    }
}

impl<A: Axis> From<(A, A)> for Point<A> {
    fn from((x, y): (A, A)) -> Self {
        Self { x, y }
    }
}

impl<A: fmt::Display> fmt::Display for Point<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn can_index_by_axis() {
        let p = Point::new(7.0, -2.0);

        assert_eq!(p[0], 7.0);
        assert_eq!(p[1], -2.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn indexing_a_third_axis_panics() {
        let p = Point::new(7.0, -2.0);
        let _ = p[2];
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(2.0, 2.0);
        let b = Point::new(5.0, 6.0);

        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Point::from([1.5f32, 2.0]), Point::new(1.5f32, 2.0));
        assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
        assert_ne!(Point::new(1.0, 2.0), Point::new(2.0, 1.0));
    }

    #[test]
    fn displays_as_a_tuple() {
        assert_eq!(Point::new(2.0, 0.5).to_string(), "(2, 0.5)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn can_serde() {
        let p = Point::new(13.0, 12.0);

        let serialized = serde_json::to_string(&p).unwrap();
        assert_eq!(serialized, r#"{"x":13.0,"y":12.0}"#);

        let deserialized: Point = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, p);
    }
}
