use crate::kdtree::kdtree::{KdNode, KdTree};
use crate::point::{Point, K};
use crate::rect::Rect;
use crate::traits::Axis;

impl<A: Axis> KdTree<A> {
    /// Finds all points inside `rect`, boundary included.
    ///
    /// Results are returned in traversal order. A rectangle with `min > max`
    /// on either axis matches nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cgl::{KdTree, Point, Rect};
    ///
    /// let points: Vec<Point> = [(2.0, 2.0), (0.0, 5.0), (8.0, 0.0), (9.0, 8.0), (7.0, 14.0)]
    ///     .into_iter()
    ///     .map(Point::from)
    ///     .collect();
    /// let tree = KdTree::balanced(&points).unwrap();
    ///
    /// let mut found = tree.range_orthogonal(&Rect::new([1.0, 9.0], [2.0, 9.0]));
    /// found.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
    ///
    /// assert_eq!(found, vec![Point::new(2.0, 2.0), Point::new(9.0, 8.0)]);
    /// ```
    pub fn range_orthogonal(&self, rect: &Rect<A>) -> Vec<Point<A>> {
        let mut found = Vec::new();

        Self::range_orthogonal_recurse(&self.root, rect, 0, &mut found);

        found
    }

    fn range_orthogonal_recurse(
        node: &KdNode<A>,
        rect: &Rect<A>,
        depth: usize,
        found: &mut Vec<Point<A>>,
    ) {
        if rect.contains(&node.point) {
            found.push(node.point);
        }

        // only the split-axis key is needed: every point on the pruned side is
        // at least as far outside the rectangle on this axis as the node is
        let axis = depth % K;
        let key = node.point[axis];
        let children = if key < rect.min(axis) {
            [None, node.right()]
        } else if key > rect.max(axis) {
            [node.left(), None]
        } else {
            [node.left(), node.right()]
        };

        for child in children.into_iter().flatten() {
            Self::range_orthogonal_recurse(child, rect, depth + 1, found);
        }
    }
}
