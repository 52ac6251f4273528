use ordered_float::OrderedFloat;

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::error::Error;
use crate::kdtree::kdtree::{KdNode, KdTree, Side};
use crate::point::{Point, K};
use crate::traits::Axis;

/// How [`KdTree::build`] arranges the input points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildMode {
    /// Split every subset at its median on the current axis. Depth is
    /// `O(log n)` and does not depend on input order.
    #[default]
    Balanced,
    /// Insert points one after another in the order given, skipping duplicates.
    /// The shape depends on input order; sorted input produces a tree of depth
    /// `n - 1`. This is an intentional, unbalanced alternative.
    InsertionOrder,
}

impl<A: Axis> KdTree<A> {
    /// Builds a tree over `points` using `mode`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if `points` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cgl::{BuildMode, Error, KdTree, Point};
    ///
    /// let points: Vec<Point> = (0..7).map(|i| Point::new(i as f64, i as f64)).collect();
    ///
    /// let balanced = KdTree::build(&points, BuildMode::Balanced).unwrap();
    /// let listlike = KdTree::build(&points, BuildMode::InsertionOrder).unwrap();
    ///
    /// assert_eq!(balanced.depth(), 2);
    /// assert_eq!(listlike.depth(), 6);
    /// assert_eq!(KdTree::<f64>::build(&[], BuildMode::Balanced), Err(Error::EmptyInput));
    /// ```
    pub fn build(points: &[Point<A>], mode: BuildMode) -> Result<Self, Error> {
        match mode {
            BuildMode::Balanced => Self::balanced(points),
            BuildMode::InsertionOrder => Self::insertion_order(points),
        }
    }

    /// Builds a median-split tree.
    ///
    /// At depth `d` the subset is stably sorted on axis `d % 2` and the point at
    /// index `len / 2` becomes the subtree root; the points before it form the
    /// left subtree and those after it the right. Duplicate points are all kept.
    pub fn balanced(points: &[Point<A>]) -> Result<Self, Error> {
        let mut source = points.to_vec();
        let root = populate_recursive(&mut source, 0).ok_or(Error::EmptyInput)?;

        let tree = Self {
            root: *root,
            size: points.len(),
        };

        #[cfg(feature = "tracing")]
        event!(
            Level::DEBUG,
            size = tree.size,
            depth = tree.depth(),
            "built balanced kd-tree"
        );

        Ok(tree)
    }

    /// Builds a tree by inserting `points` in order.
    ///
    /// The first point becomes the root. Each following point descends by the
    /// branch rule to the first empty child slot on its path, the slot that
    /// [`insertion_point`](KdTree::insertion_point) reports. A point equal to
    /// one already in the tree is skipped.
    pub fn insertion_order(points: &[Point<A>]) -> Result<Self, Error> {
        let (first, rest) = points.split_first().ok_or(Error::EmptyInput)?;

        let mut tree = Self {
            root: KdNode::leaf(*first),
            size: 1,
        };
        for point in rest {
            tree.add(*point);
        }

        #[cfg(feature = "tracing")]
        event!(
            Level::DEBUG,
            size = tree.size,
            skipped = points.len() - tree.size,
            depth = tree.depth(),
            "built insertion-order kd-tree"
        );

        Ok(tree)
    }

    fn add(&mut self, point: Point<A>) -> bool {
        let added = self.root.add(point, 0);
        if added {
            self.size += 1;
        } else {
            #[cfg(feature = "tracing")]
            event!(Level::TRACE, %point, "skipping duplicate point");
        }
        added
    }
}

impl<A: Axis> KdNode<A> {
    fn add(&mut self, point: Point<A>, depth: usize) -> bool {
        if self.point == point {
            return false;
        }

        let slot = match Side::of(&self.point, &point, depth) {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        if let Some(child) = slot.as_mut() {
            return child.add(point, depth + 1);
        }
        *slot = Some(Box::new(KdNode::leaf(point)));
        true
    }
}

impl<A: Axis> TryFrom<&[Point<A>]> for KdTree<A> {
    type Error = Error;

    /// Builds a balanced tree, see [`KdTree::balanced`].
    fn try_from(points: &[Point<A>]) -> Result<Self, Self::Error> {
        Self::balanced(points)
    }
}

fn populate_recursive<A: Axis>(points: &mut [Point<A>], depth: usize) -> Option<Box<KdNode<A>>> {
    if points.is_empty() {
        return None;
    }

    let axis = depth % K;
    points.sort_by_key(|p| OrderedFloat(p[axis]));

    let pivot = points.len() / 2;
    let (left, rest) = points.split_at_mut(pivot);
    let (median, right) = rest.split_first_mut()?;

    Some(Box::new(KdNode {
        point: *median,
        left: populate_recursive(left, depth + 1),
        right: populate_recursive(right, depth + 1),
    }))
}
