//! A result item returned by a nearest neighbour query
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::traits::Axis;

/// Represents an entry in the results of a nearest neighbour query, with `distance` being the
/// Euclidean distance of this particular point from the query point, and `point` being the
/// stored point that was found as part of the query.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone)]
pub struct NearestNeighbour<A = f64> {
    /// the distance of the found point from the query point
    pub distance: A,
    /// the stored point that was found in the query
    pub point: Point<A>,
}

#[allow(unknown_lints)]
#[allow(clippy::non_canonical_partial_ord_impl)]
impl<A: Axis> PartialOrd for NearestNeighbour<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance.partial_cmp(&other.distance)
    }
}

impl<A: Axis> PartialEq for NearestNeighbour<A> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.point == other.point
    }
}

impl<A: Axis> From<NearestNeighbour<A>> for (A, Point<A>) {
    fn from(elem: NearestNeighbour<A>) -> Self {
        (elem.distance, elem.point)
    }
}

#[cfg(test)]
mod tests {
    use crate::nearest_neighbour::NearestNeighbour;
    use crate::Point;
    use std::cmp::Ordering;

    #[test]
    fn test_from_tuple() {
        let nn: (f32, Point<f32>) = NearestNeighbour {
            distance: 1.0f32,
            point: Point::new(1.0f32, 0.0f32),
        }
        .into();

        assert_eq!(nn.0, 1.0f32);
        assert_eq!(nn.1, Point::new(1.0, 0.0));
    }

    #[test]
    fn test_partial_cmp() {
        let a = NearestNeighbour {
            distance: 1.0,
            point: Point::new(10.0, 0.0),
        };
        let b = NearestNeighbour {
            distance: 2.0,
            point: Point::new(5.0, 0.0),
        };

        assert_eq!(a.partial_cmp(&b).unwrap(), Ordering::Less)
    }
}
