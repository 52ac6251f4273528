use crate::point::Point;
use crate::quadtree::quadtree::{PointQuadTree, QuadNode, Quadrant};
use crate::rect::Rect;
use crate::traits::Axis;

use Quadrant::{NorthEast, NorthWest, SouthEast, SouthWest};

impl<A: Axis> PointQuadTree<A> {
    /// Finds all points within `radius` of `center`, boundary included.
    ///
    /// Results are returned in traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cgl::{Point, PointQuadTree};
    ///
    /// let points: Vec<Point> = (0..10)
    ///     .flat_map(|x| (0..10).map(move |y| Point::new(x as f64, y as f64)))
    ///     .collect();
    /// let tree = PointQuadTree::new(&points).unwrap();
    ///
    /// assert_eq!(tree.range_circular(&Point::new(5.0, 5.0), 1.0).len(), 5);
    /// ```
    pub fn range_circular(&self, center: &Point<A>, radius: A) -> Vec<Point<A>> {
        let mut found = Vec::new();

        let square = Rect::new(
            [center.x - radius, center.x + radius],
            [center.y - radius, center.y + radius],
        );
        Self::range_circular_recurse(&self.root, center, radius, &square, &mut found);

        found
    }

    fn range_circular_recurse(
        node: &QuadNode<A>,
        center: &Point<A>,
        radius: A,
        square: &Rect<A>,
        found: &mut Vec<Point<A>>,
    ) {
        let Point { x, y } = node.point;
        let west = x < square.min(0);
        let east = x > square.max(0);
        let south = y < square.min(1);
        let north = y > square.max(1);

        // a node outside the square confines it to one or two of its
        // quadrants, and cannot itself be in range
        let quadrants: &[Quadrant] = match (west, east, south, north) {
            (true, _, true, _) => &[NorthEast],
            (true, _, _, true) => &[SouthEast],
            (_, true, _, true) => &[SouthWest],
            (_, true, true, _) => &[NorthWest],
            (true, ..) => &[NorthEast, SouthEast],
            (_, true, ..) => &[NorthWest, SouthWest],
            (_, _, true, _) => &[NorthWest, NorthEast],
            (.., true) => &[SouthWest, SouthEast],
            _ => {
                if node.point.distance(center) <= radius {
                    found.push(node.point);
                }
                &Quadrant::ALL
            }
        };

        for child in quadrants.iter().filter_map(|&q| node.child(q)) {
            Self::range_circular_recurse(child, center, radius, square, found);
        }
    }
}
