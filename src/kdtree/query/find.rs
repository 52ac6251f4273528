use crate::kdtree::kdtree::{KdNode, KdTree, Side};
use crate::point::{Point, K};
use crate::traits::Axis;

/// Where a point sits, or would sit, in a [`KdTree`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InsertionPoint<'a, A> {
    /// the point is already stored at this node
    Occupied(&'a KdNode<A>),
    /// the point is absent; it would become the `side` child of `parent`,
    /// which sits at `depth`
    Vacant {
        /// first node on the path whose child slot for the point is empty
        parent: &'a KdNode<A>,
        /// the empty slot of `parent`
        side: Side,
        /// depth of `parent`
        depth: usize,
    },
}

impl<A: Axis> KdTree<A> {
    /// Finds the node storing a point equal to `query`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cgl::{KdTree, Point};
    ///
    /// let points = vec![Point::new(2.0, 2.0), Point::new(0.0, 5.0), Point::new(8.0, 0.0)];
    /// let tree = KdTree::balanced(&points).unwrap();
    ///
    /// assert_eq!(tree.find(&Point::new(0.0, 5.0)).map(|n| *n.point()), Some(Point::new(0.0, 5.0)));
    /// assert!(tree.find(&Point::new(5.0, 0.0)).is_none());
    /// ```
    #[inline]
    pub fn find(&self, query: &Point<A>) -> Option<&KdNode<A>> {
        self.find_from(query, 0)
    }

    /// Like [`find`](KdTree::find), but treats the root as sitting at `depth`,
    /// which shifts the axis compared at every level.
    pub fn find_from(&self, query: &Point<A>, depth: usize) -> Option<&KdNode<A>> {
        self.root.find(query, depth)
    }

    /// `true` if a point equal to `query` is stored in the tree
    #[inline]
    pub fn contains(&self, query: &Point<A>) -> bool {
        self.find(query).is_some()
    }

    /// Follows the branch rule from the root to where `query` is stored, or to
    /// the node whose empty child slot it would fill.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cgl::kdtree::{InsertionPoint, Side};
    /// use cgl::{KdTree, Point};
    ///
    /// let tree = KdTree::insertion_order(&[Point::new(2.0, 2.0), Point::new(8.0, 0.0)]).unwrap();
    ///
    /// match tree.insertion_point(&Point::new(9.0, 8.0)) {
    ///     InsertionPoint::Vacant { parent, side, depth } => {
    ///         assert_eq!(parent.point(), &Point::new(8.0, 0.0));
    ///         assert_eq!(side, Side::Right);
    ///         assert_eq!(depth, 1);
    ///     }
    ///     InsertionPoint::Occupied(_) => unreachable!(),
    /// }
    /// ```
    #[inline]
    pub fn insertion_point(&self, query: &Point<A>) -> InsertionPoint<'_, A> {
        self.insertion_point_from(query, 0)
    }

    /// Like [`insertion_point`](KdTree::insertion_point), starting with the
    /// root at `depth`.
    pub fn insertion_point_from(&self, query: &Point<A>, depth: usize) -> InsertionPoint<'_, A> {
        self.root.insertion_point(query, depth)
    }
}

impl<A: Axis> KdNode<A> {
    /// Searches the subtree rooted here, which sits at `depth`, for `query`.
    ///
    /// Keys equal to this node's key normally go left, but a median split may
    /// have put equal keys on the right too, so a miss on the left is retried
    /// on the right in that case.
    pub fn find(&self, query: &Point<A>, depth: usize) -> Option<&KdNode<A>> {
        if self.point == *query {
            return Some(self);
        }

        match Side::of(&self.point, query, depth) {
            Side::Right => self.right()?.find(query, depth + 1),
            Side::Left => {
                let found = self.left().and_then(|left| left.find(query, depth + 1));
                let axis = depth % K;
                if found.is_none() && query[axis] == self.point[axis] {
                    self.right().and_then(|right| right.find(query, depth + 1))
                } else {
                    found
                }
            }
        }
    }

    /// Follows the branch rule down from this node, which sits at `depth`.
    pub fn insertion_point(&self, query: &Point<A>, depth: usize) -> InsertionPoint<'_, A> {
        let mut node = self;
        let mut depth = depth;

        loop {
            if node.point == *query {
                return InsertionPoint::Occupied(node);
            }

            let side = Side::of(&node.point, query, depth);
            match node.child(side) {
                Some(child) => {
                    node = child;
                    depth += 1;
                }
                None => {
                    return InsertionPoint::Vacant {
                        parent: node,
                        side,
                        depth,
                    }
                }
            }
        }
    }
}
