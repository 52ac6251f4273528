//! Point k-d tree: a binary tree over 2-D points whose split axis alternates
//! between `x` and `y` with depth.

#[doc(hidden)]
pub mod construction;
#[allow(clippy::module_inception)]
pub mod kdtree;
#[doc(hidden)]
pub mod query;

pub use construction::BuildMode;
pub use kdtree::{KdNode, KdTree, Side};
pub use query::find::InsertionPoint;
