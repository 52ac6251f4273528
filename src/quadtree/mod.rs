//! Point quadtree: a 4-ary tree over 2-D points in which every node splits the
//! plane into four quadrants around its own point.

#[doc(hidden)]
pub mod construction;
#[doc(hidden)]
pub mod query;
#[allow(clippy::module_inception)]
pub mod quadtree;

pub use query::find::InsertionPoint;
pub use quadtree::{PointQuadTree, QuadNode, Quadrant};
