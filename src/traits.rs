//! Definitions and implementations for some traits that are common between the
//! [`kdtree`](crate::kdtree) and [`quadtree`](crate::quadtree) modules
use num_traits::float::FloatCore;
use std::fmt::{Debug, Display};

/// Axis trait represents the traits that must be implemented
/// by the type that is used as the coordinate type, `A`,
/// on [`Point`](crate::Point) and the trees. This will be [`f64`] or [`f32`].
///
/// Integer coordinates (for example a grid of `i32` cells) should be converted
/// to one of the float types before building a tree.
pub trait Axis: FloatCore + Default + Debug + Display + Copy + Sync + Send {
    /// returns absolute diff between two values of a type implementing this trait
    #[inline]
    fn dist1(self, other: Self) -> Self {
        (self - other).abs()
    }

    /// square root, used to turn squared offsets into Euclidean distances
    fn sqrt(self) -> Self;
}

macro_rules! impl_axis {
    ($($t:ty),+) => {
        $(
            impl Axis for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }
        )+
    };
}

impl_axis!(f32, f64);
