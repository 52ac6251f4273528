use crate::nearest_neighbour::NearestNeighbour;
use crate::neighbour_set::NeighbourSet;
use crate::point::Point;
use crate::quadtree::quadtree::{PointQuadTree, QuadNode, Quadrant};
use crate::traits::Axis;

impl<A: Axis> PointQuadTree<A> {
    /// Finds the nearest `qty` points to `query`, nearest first.
    ///
    /// Returns fewer than `qty` results only when the tree holds fewer points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cgl::{Point, PointQuadTree};
    ///
    /// let points = vec![Point::new(5.0, 5.0), Point::new(1.0, 1.0), Point::new(6.0, 4.0)];
    /// let tree = PointQuadTree::new(&points).unwrap();
    ///
    /// let nearest = tree.nearest_n(&Point::new(7.0, 4.0), 2);
    ///
    /// assert_eq!(nearest[0].point, Point::new(6.0, 4.0));
    /// assert_eq!(nearest[0].distance, 1.0);
    /// assert_eq!(nearest[1].point, Point::new(5.0, 5.0));
    /// ```
    pub fn nearest_n(&self, query: &Point<A>, qty: usize) -> Vec<NearestNeighbour<A>> {
        if qty == 0 {
            return Vec::new();
        }

        let mut neighbours = NeighbourSet::new(qty);
        Self::nearest_n_recurse(&self.root, query, &mut neighbours);

        neighbours.into_sorted_vec()
    }

    /// Finds the single nearest point to `query`.
    pub fn nearest_one(&self, query: &Point<A>) -> NearestNeighbour<A> {
        let mut neighbours = NeighbourSet::new(1);
        Self::nearest_n_recurse(&self.root, query, &mut neighbours);

        neighbours
            .into_sorted_vec()
            .into_iter()
            .next()
            .unwrap_or(NearestNeighbour {
                distance: self.root.point.distance(query),
                point: self.root.point,
            })
    }

    /// Returns the pruning threshold after visiting the subtree at `node`.
    fn nearest_n_recurse(
        node: &QuadNode<A>,
        query: &Point<A>,
        neighbours: &mut NeighbourSet<A>,
    ) -> A {
        if node.is_leaf() {
            return neighbours.consider(node.point, query);
        }

        let home = Quadrant::of(&node.point, query);
        if let Some(child) = node.child(home) {
            Self::nearest_n_recurse(child, query, neighbours);
        }
        let mut max_dist = neighbours.consider(node.point, query);

        // a point in any other quadrant is at least as far from the query as
        // the nearer of the node's two axis lines
        let dx = node.point.x.dist1(query.x);
        let dy = node.point.y.dist1(query.y);
        for quadrant in Quadrant::ALL {
            if quadrant == home {
                continue;
            }
            if let Some(child) = node.child(quadrant) {
                if max_dist > dx || max_dist > dy {
                    max_dist = Self::nearest_n_recurse(child, query, neighbours);
                }
            }
        }

        max_dist
    }
}
