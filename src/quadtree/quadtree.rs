//! Point quadtree, for use when each stored value is itself a 2-D point.
//! f64 or f32 are supported as co-ordinate types.

use crate::point::Point;
use crate::traits::Axis;

/// One of the four regions a node's point splits the plane into.
///
/// A point `p` falls in quadrant `dx + 2 * dy` of a node at `q`, where
/// `dx = 1` if `p.x >= q.x` and `dy = 1` if `p.y >= q.y`. The discriminants
/// below are those indices; the range-query pruning is written against them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `x < q.x`, `y < q.y`
    SouthWest = 0,
    /// `x >= q.x`, `y < q.y`
    SouthEast = 1,
    /// `x < q.x`, `y >= q.y`
    NorthWest = 2,
    /// `x >= q.x`, `y >= q.y`
    NorthEast = 3,
}

impl Quadrant {
    /// All quadrants, in the order queries visit them.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    /// The quadrant of `origin` that `point` falls in.
    ///
    /// ```rust
    /// use cgl::{Point, Quadrant};
    ///
    /// let origin = Point::new(5.0, 5.0);
    ///
    /// assert_eq!(Quadrant::of(&origin, &Point::new(5.0, 5.0)), Quadrant::NorthEast);
    /// assert_eq!(Quadrant::of(&origin, &Point::new(4.0, 5.0)), Quadrant::NorthWest);
    /// assert_eq!(Quadrant::of(&origin, &Point::new(5.0, 4.0)), Quadrant::SouthEast);
    /// assert_eq!(Quadrant::of(&origin, &Point::new(4.0, 4.0)), Quadrant::SouthWest);
    /// ```
    #[inline]
    pub fn of<A: Axis>(origin: &Point<A>, point: &Point<A>) -> Self {
        let dx = usize::from(point.x >= origin.x);
        let dy = usize::from(point.y >= origin.y);
        Self::from_index(dx + 2 * dy)
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        match index {
            0 => Quadrant::SouthWest,
            1 => Quadrant::SouthEast,
            2 => Quadrant::NorthWest,
            _ => Quadrant::NorthEast,
        }
    }

    /// slot of this quadrant in a node's child array
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A node of a [`PointQuadTree`]. Owns its four children; there are no parent
/// links.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadNode<A = f64> {
    pub(crate) point: Point<A>,
    pub(crate) children: [Option<Box<QuadNode<A>>>; 4],
}

impl<A: Axis> QuadNode<A> {
    pub(crate) fn leaf(point: Point<A>) -> Self {
        Self {
            point,
            children: [None, None, None, None],
        }
    }

    /// the point stored at this node, origin of its quadrants
    #[inline]
    pub fn point(&self) -> &Point<A> {
        &self.point
    }

    /// the subtree in `quadrant`, if any
    #[inline]
    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadNode<A>> {
        self.children[quadrant.index()].as_deref()
    }

    /// `true` if all four children are absent
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Height of the subtree rooted here; a lone node has depth 0.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .flatten()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Point quadtree
///
/// The first point becomes the root; every later point is routed by
/// [`Quadrant::of`] until it reaches an empty child slot. The shape depends
/// entirely on insertion order and is never rebalanced. Unlike
/// [`KdTree`](crate::KdTree), points may be inserted after construction.
///
/// # Examples
///
/// ```rust
/// use cgl::{Point, PointQuadTree};
///
/// let mut tree = PointQuadTree::new(&[Point::new(5.0, 5.0), Point::new(1.0, 9.0)]).unwrap();
///
/// assert!(tree.insert(Point::new(7.0, 2.0)));
/// assert!(!tree.insert(Point::new(1.0, 9.0)));
///
/// assert_eq!(tree.size(), 3);
/// assert!(tree.contains(&Point::new(7.0, 2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PointQuadTree<A = f64> {
    pub(crate) root: QuadNode<A>,
    pub(crate) size: usize,
}

impl<A: Axis> PointQuadTree<A> {
    /// Returns the number of points stored in the tree
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The root node. A tree is never empty.
    #[inline]
    pub fn root(&self) -> &QuadNode<A> {
        &self.root
    }

    /// Height of the tree; 0 for a single point.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Iterate over all stored points in pre-order, children in
    /// [`Quadrant::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Point<A>> + '_ {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(Quadrant::ALL.iter().rev().filter_map(|&q| node.child(q)));
            Some(node.point)
        })
    }
}
