use crate::point::Point;
use crate::quadtree::quadtree::{PointQuadTree, QuadNode, Quadrant};
use crate::traits::Axis;

/// Where a point sits, or would sit, in a [`PointQuadTree`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InsertionPoint<'a, A> {
    /// the point is already stored at this node
    Occupied(&'a QuadNode<A>),
    /// the point is absent and would become the `quadrant` child of `parent`
    Vacant {
        /// first node on the path whose child slot for the point is empty
        parent: &'a QuadNode<A>,
        /// the empty slot of `parent`
        quadrant: Quadrant,
    },
}

impl<A: Axis> PointQuadTree<A> {
    /// Finds the node storing a point equal to `query`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cgl::{Point, PointQuadTree};
    ///
    /// let tree = PointQuadTree::new(&[Point::new(5.0, 5.0), Point::new(2.0, 8.0)]).unwrap();
    ///
    /// assert!(tree.find(&Point::new(2.0, 8.0)).is_some());
    /// assert!(tree.find(&Point::new(8.0, 2.0)).is_none());
    /// ```
    #[inline]
    pub fn find(&self, query: &Point<A>) -> Option<&QuadNode<A>> {
        self.root.find(query)
    }

    /// `true` if a point equal to `query` is stored in the tree
    #[inline]
    pub fn contains(&self, query: &Point<A>) -> bool {
        self.find(query).is_some()
    }

    /// Follows the quadrant rule from the root to where `query` is stored, or
    /// to the node whose empty child slot it would fill.
    #[inline]
    pub fn insertion_point(&self, query: &Point<A>) -> InsertionPoint<'_, A> {
        self.root.insertion_point(query)
    }
}

impl<A: Axis> QuadNode<A> {
    /// Searches the subtree rooted here for `query`.
    pub fn find(&self, query: &Point<A>) -> Option<&QuadNode<A>> {
        match self.insertion_point(query) {
            InsertionPoint::Occupied(node) => Some(node),
            InsertionPoint::Vacant { .. } => None,
        }
    }

    /// Follows the quadrant rule down from this node.
    pub fn insertion_point(&self, query: &Point<A>) -> InsertionPoint<'_, A> {
        let mut node = self;

        loop {
            if node.point == *query {
                return InsertionPoint::Occupied(node);
            }

            let quadrant = Quadrant::of(&node.point, query);
            match node.child(quadrant) {
                Some(child) => node = child,
                None => {
                    return InsertionPoint::Vacant {
                        parent: node,
                        quadrant,
                    }
                }
            }
        }
    }
}
