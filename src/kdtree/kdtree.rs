//! Point k-d tree, for use when each stored value is itself a 2-D point.
//! f64 or f32 are supported as co-ordinate types.

use crate::point::{Point, K};
use crate::traits::Axis;

/// Which child of a node a point is routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// keys less than or equal to the node's key on the split axis
    Left,
    /// keys greater than the node's key on the split axis
    Right,
}

impl Side {
    /// Branch rule shared by construction and every query: on the split axis
    /// of `depth`, `point` goes left if its key is `<=` the node's key.
    #[inline]
    pub fn of<A: Axis>(node: &Point<A>, point: &Point<A>, depth: usize) -> Self {
        let axis = depth % K;
        if point[axis] <= node[axis] {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// A node of a [`KdTree`]. Owns its children; there are no parent links.
#[derive(Clone, Debug, PartialEq)]
pub struct KdNode<A = f64> {
    pub(crate) point: Point<A>,
    pub(crate) left: Option<Box<KdNode<A>>>,
    pub(crate) right: Option<Box<KdNode<A>>>,
}

impl<A: Axis> KdNode<A> {
    pub(crate) fn leaf(point: Point<A>) -> Self {
        Self {
            point,
            left: None,
            right: None,
        }
    }

    /// the point stored at this node
    #[inline]
    pub fn point(&self) -> &Point<A> {
        &self.point
    }

    /// the left subtree, if any
    #[inline]
    pub fn left(&self) -> Option<&KdNode<A>> {
        self.left.as_deref()
    }

    /// the right subtree, if any
    #[inline]
    pub fn right(&self) -> Option<&KdNode<A>> {
        self.right.as_deref()
    }

    /// the subtree on `side`, if any
    #[inline]
    pub fn child(&self, side: Side) -> Option<&KdNode<A>> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// `true` if this node has no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Height of the subtree rooted here; a lone node has depth 0.
    pub fn depth(&self) -> usize {
        [self.left(), self.right()]
            .into_iter()
            .flatten()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Point k-d tree
///
/// Every node stores one point. At depth `d` the split axis is `d % 2`; the
/// left subtree holds points whose key on that axis is `<=` the node's key.
///
/// Built once, from a non-empty slice of points, either balanced around the
/// median of each subset or in insertion order (see [`BuildMode`](crate::BuildMode)).
/// Immutable after construction.
///
/// # Examples
///
/// ```rust
/// use cgl::{KdTree, Point};
///
/// let points: Vec<Point> = [(2.0, 2.0), (0.0, 5.0), (8.0, 0.0), (9.0, 8.0)]
///     .into_iter()
///     .map(Point::from)
///     .collect();
///
/// let tree = KdTree::balanced(&points).unwrap();
///
/// assert_eq!(tree.size(), 4);
/// assert!(tree.contains(&Point::new(9.0, 8.0)));
/// assert!(!tree.contains(&Point::new(9.0, 9.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct KdTree<A = f64> {
    pub(crate) root: KdNode<A>,
    pub(crate) size: usize,
}

impl<A: Axis> KdTree<A> {
    /// Returns the number of points stored in the tree
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The root node. A tree is never empty.
    #[inline]
    pub fn root(&self) -> &KdNode<A> {
        &self.root
    }

    /// Height of the tree: 0 for a single point, `size - 1` for a tree that
    /// has degenerated into a list.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Iterate over all stored points in pre-order (node, left, right).
    pub fn iter(&self) -> impl Iterator<Item = Point<A>> + '_ {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.right());
            stack.extend(node.left());
            Some(node.point)
        })
    }
}
