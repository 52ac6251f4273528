#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # cgl
//!
//! In-memory spatial indexes over 2-D point sets.
//!
//! Two tree types are provided:
//!
//! * [`KdTree`]: a point k-d tree whose split axis alternates between `x` and
//!   `y`. It can be built balanced (median splits) or in insertion order, and is
//!   read-only once built.
//! * [`PointQuadTree`]: a point quadtree built in insertion order, which accepts
//!   further points after construction.
//!
//! Both support exact lookup, circular range search and k-nearest-neighbour
//! search; the k-d tree also supports axis-aligned (orthogonal) range search.
//! The k-NN searches share a bounded [`NeighbourSet`].
//!
//! ## Usage
//! ```rust
//! use cgl::{KdTree, Point, PointQuadTree, Rect};
//!
//! let points: Vec<Point> = [(2, 2), (0, 5), (8, 0), (9, 8), (7, 14), (13, 12), (14, 13)]
//!     .into_iter()
//!     .map(|(x, y)| Point::new(x as f64, y as f64))
//!     .collect();
//!
//! let kdtree = KdTree::balanced(&points).unwrap();
//! assert!(kdtree.contains(&Point::new(7.0, 14.0)));
//! assert_eq!(kdtree.range_orthogonal(&Rect::new([1.0, 9.0], [2.0, 9.0])).len(), 2);
//!
//! let quadtree = PointQuadTree::new(&points).unwrap();
//! assert_eq!(quadtree.range_circular(&Point::new(5.0, 5.0), 5.0).len(), 3);
//!
//! let nearest: Vec<_> = kdtree
//!     .nearest_n(&Point::new(100.0, 100.0), 3)
//!     .into_iter()
//!     .map(|n| n.point)
//!     .collect();
//! assert_eq!(
//!     nearest,
//!     vec![Point::new(14.0, 13.0), Point::new(13.0, 12.0), Point::new(7.0, 14.0)]
//! );
//! assert_eq!(quadtree.nearest_n(&Point::new(100.0, 100.0), 3)[0].point, nearest[0]);
//! ```
//!
//! ## Optional features
//!
//! * `tracing` (default): emits construction events through the `tracing` crate.
//! * `serde`: `Serialize`/`Deserialize` for [`Point`], [`Rect`] and
//!   [`NearestNeighbour`].

#[cfg(feature = "serde")]
extern crate serde;

pub mod error;
pub mod kdtree;
pub mod nearest_neighbour;
pub mod neighbour_set;
pub mod point;
pub mod quadtree;
pub mod rect;
#[cfg(any(test, feature = "test_utils"))]
#[doc(hidden)]
pub mod test_utils;
pub mod traits;

pub use crate::error::Error;
pub use crate::kdtree::{BuildMode, KdTree};
pub use crate::nearest_neighbour::NearestNeighbour;
pub use crate::neighbour_set::NeighbourSet;
pub use crate::point::Point;
pub use crate::quadtree::{PointQuadTree, Quadrant};
pub use crate::rect::Rect;
pub use crate::traits::Axis;
