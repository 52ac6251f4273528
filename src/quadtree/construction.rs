#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::error::Error;
use crate::point::Point;
use crate::quadtree::quadtree::{PointQuadTree, QuadNode, Quadrant};
use crate::traits::Axis;

impl<A: Axis> PointQuadTree<A> {
    /// Builds a tree by inserting `points` in order; the first becomes the
    /// root. Points equal to one already in the tree are skipped.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if `points` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cgl::{Error, Point, PointQuadTree};
    ///
    /// let tree = PointQuadTree::new(&[Point::new(5.0, 5.0), Point::new(9.0, 9.0)]).unwrap();
    /// assert_eq!(tree.root().point(), &Point::new(5.0, 5.0));
    ///
    /// assert_eq!(PointQuadTree::<f64>::new(&[]), Err(Error::EmptyInput));
    /// ```
    pub fn new(points: &[Point<A>]) -> Result<Self, Error> {
        let (first, rest) = points.split_first().ok_or(Error::EmptyInput)?;

        let mut tree = Self::with_root(*first);
        for point in rest {
            tree.insert(*point);
        }

        #[cfg(feature = "tracing")]
        event!(
            Level::DEBUG,
            size = tree.size,
            skipped = points.len() - tree.size,
            depth = tree.depth(),
            "built point quadtree"
        );

        Ok(tree)
    }

    /// Creates a tree holding only `root`.
    pub fn with_root(root: Point<A>) -> Self {
        Self {
            root: QuadNode::leaf(root),
            size: 1,
        }
    }

    /// Inserts `point`, descending by quadrant to the first empty child slot.
    ///
    /// Returns `false`, leaving the tree unchanged, if an equal point is
    /// already stored.
    pub fn insert(&mut self, point: Point<A>) -> bool {
        let added = self.root.insert(point);
        if added {
            self.size += 1;
        } else {
            #[cfg(feature = "tracing")]
            event!(Level::TRACE, %point, "skipping duplicate point");
        }
        added
    }
}

impl<A: Axis> QuadNode<A> {
    fn insert(&mut self, point: Point<A>) -> bool {
        if self.point == point {
            return false;
        }

        let slot = &mut self.children[Quadrant::of(&self.point, &point).index()];
        if let Some(child) = slot.as_mut() {
            return child.insert(point);
        }
        *slot = Some(Box::new(QuadNode::leaf(point)));
        true
    }
}

impl<A: Axis> TryFrom<&[Point<A>]> for PointQuadTree<A> {
    type Error = Error;

    /// See [`PointQuadTree::new`].
    fn try_from(points: &[Point<A>]) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl<A: Axis> Extend<Point<A>> for PointQuadTree<A> {
    fn extend<T: IntoIterator<Item = Point<A>>>(&mut self, iter: T) {
        for point in iter {
            self.insert(point);
        }
    }
}
