//! Axis-aligned rectangle used by orthogonal range queries
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::{Point, K};
use crate::traits::Axis;

/// Closed rectangle `[[xmin, xmax], [ymin, ymax]]`.
///
/// A rectangle whose minimum exceeds its maximum on either axis is valid and
/// simply contains nothing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect<A = f64> {
    /// `[min, max]` per axis, indexed like [`Point`]
    pub bounds: [[A; 2]; K],
}

impl<A: Axis> Rect<A> {
    /// Creates a rectangle from its per-axis bounds.
    ///
    /// ```rust
    /// use cgl::{Point, Rect};
    ///
    /// let rect = Rect::new([1.0, 9.0], [2.0, 9.0]);
    ///
    /// assert!(rect.contains(&Point::new(9.0, 8.0)));
    /// assert!(!rect.contains(&Point::new(8.0, 0.0)));
    /// ```
    #[inline]
    pub fn new(x: [A; 2], y: [A; 2]) -> Self {
        Self { bounds: [x, y] }
    }

    /// lower bound on `axis`
    #[inline]
    pub fn min(&self, axis: usize) -> A {
        self.bounds[axis][0]
    }

    /// upper bound on `axis`
    #[inline]
    pub fn max(&self, axis: usize) -> A {
        self.bounds[axis][1]
    }

    /// Whether `point` lies inside the rectangle, boundary included
    #[inline]
    pub fn contains(&self, point: &Point<A>) -> bool {
        (0..K).all(|axis| self.min(axis) <= point[axis] && point[axis] <= self.max(axis))
    }
}

impl<A: Axis> From<[[A; 2]; K]> for Rect<A> {
    fn from(bounds: [[A; 2]; K]) -> Self {
        Self { bounds }
    }
}
