use crate::kdtree::kdtree::{KdNode, KdTree, Side};
use crate::nearest_neighbour::NearestNeighbour;
use crate::neighbour_set::NeighbourSet;
use crate::point::{Point, K};
use crate::traits::Axis;

impl<A: Axis> KdTree<A> {
    /// Finds the nearest `qty` points to `query`, nearest first.
    ///
    /// Returns fewer than `qty` results only when the tree holds fewer points.
    /// Among points at equal distance, the one reached first by the search is
    /// ranked first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cgl::{KdTree, Point};
    ///
    /// let points: Vec<Point> = [(2.0, 2.0), (0.0, 5.0), (8.0, 0.0), (9.0, 8.0), (13.0, 12.0)]
    ///     .into_iter()
    ///     .map(Point::from)
    ///     .collect();
    /// let tree = KdTree::balanced(&points).unwrap();
    ///
    /// let nearest = tree.nearest_n(&Point::new(100.0, 100.0), 2);
    ///
    /// assert_eq!(nearest.len(), 2);
    /// assert_eq!(nearest[0].point, Point::new(13.0, 12.0));
    /// assert_eq!(nearest[1].point, Point::new(9.0, 8.0));
    /// ```
    pub fn nearest_n(&self, query: &Point<A>, qty: usize) -> Vec<NearestNeighbour<A>> {
        if qty == 0 {
            return Vec::new();
        }

        let mut neighbours = NeighbourSet::new(qty);
        Self::nearest_n_recurse(&self.root, query, 0, &mut neighbours);

        neighbours.into_sorted_vec()
    }

    /// Finds the single nearest point to `query`.
    pub fn nearest_one(&self, query: &Point<A>) -> NearestNeighbour<A> {
        let mut neighbours = NeighbourSet::new(1);
        Self::nearest_n_recurse(&self.root, query, 0, &mut neighbours);

        // the root is always considered, so the set is never empty
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
        node: &KdNode<A>,
        query: &Point<A>,
        depth: usize,
        neighbours: &mut NeighbourSet<A>,
    ) -> A {
        if node.is_leaf() {
            return neighbours.consider(node.point, query);
        }

        let (nearer, farther) = match Side::of(&node.point, query, depth) {
            Side::Left => (node.left(), node.right()),
            Side::Right => (node.right(), node.left()),
        };

        // nearer side first, then this node, so the threshold is as tight as
        // possible before deciding on the farther side
        if let Some(nearer) = nearer {
            Self::nearest_n_recurse(nearer, query, depth + 1, neighbours);
        }
        let max_dist = neighbours.consider(node.point, query);

        let axis = depth % K;
        match farther {
            Some(farther) if node.point[axis].dist1(query[axis]) < max_dist => {
                Self::nearest_n_recurse(farther, query, depth + 1, neighbours)
            }
            _ => max_dist,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{grid_points, linear_nearest_n, rand_points, seeded_rng};
    use crate::{BuildMode, KdTree, Point};
    use rand::Rng;
    use rstest::rstest;

    fn fixture() -> Vec<Point> {
        [(2, 2), (0, 5), (8, 0), (9, 8), (7, 14), (13, 12), (14, 13)]
            .into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect()
    }

    #[rstest]
    #[case(BuildMode::Balanced)]
    #[case(BuildMode::InsertionOrder)]
    fn can_query_nearest_n_items(#[case] mode: BuildMode) {
        let tree = KdTree::build(&fixture(), mode).unwrap();

        let result: Vec<_> = tree
            .nearest_n(&Point::new(100.0, 100.0), 3)
            .into_iter()
            .map(|n| n.point)
            .collect();

        assert_eq!(
            result,
            vec![Point::new(14.0, 13.0), Point::new(13.0, 12.0), Point::new(7.0, 14.0)]
        );
    }

    #[test]
    fn distances_are_euclidean_and_ascending() {
        let tree = KdTree::balanced(&fixture()).unwrap();

        let result = tree.nearest_n(&Point::new(5.0, 5.0), 3);
        let distances: Vec<_> = result.iter().map(|n| n.distance).collect();

        assert_eq!(distances[0], 18f64.sqrt());
        assert_eq!(&distances[1..], &[5.0, 5.0]);
    }

    #[test]
    fn asking_for_more_than_the_tree_holds_returns_everything() {
        let points = fixture();
        let tree = KdTree::balanced(&points).unwrap();

        let result = tree.nearest_n(&Point::new(0.0, 0.0), 100);

        assert_eq!(result.len(), points.len());
        assert!(result.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn zero_neighbours_requested_returns_nothing() {
        let tree = KdTree::balanced(&fixture()).unwrap();

        assert!(tree.nearest_n(&Point::new(0.0, 0.0), 0).is_empty());
    }

    #[rstest]
    #[case(BuildMode::Balanced)]
    #[case(BuildMode::InsertionOrder)]
    fn nearest_one_finds_the_closest_point(#[case] mode: BuildMode) {
        let tree = KdTree::build(&fixture(), mode).unwrap();

        let nearest = tree.nearest_one(&Point::new(8.5, 7.0));

        assert_eq!(nearest.point, Point::new(9.0, 8.0));
        assert_eq!(nearest.distance, 1.25f64.sqrt());
    }

    #[test]
    fn finds_a_stored_point_at_distance_zero() {
        let points = grid_points(10, 10);
        let tree = KdTree::balanced(&points).unwrap();

        let result = tree.nearest_n(&Point::new(4.0, 6.0), 5);
        let distances: Vec<_> = result.iter().map(|n| n.distance).collect();

        assert_eq!(result[0].point, Point::new(4.0, 6.0));
        assert_eq!(distances, vec![0.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[rstest]
    fn matches_a_linear_scan(
        #[values(BuildMode::Balanced, BuildMode::InsertionOrder)] mode: BuildMode,
        #[values(1, 3, 500)] qty: usize,
    ) {
        let mut rng = seeded_rng(qty as u64);
        let points = rand_points(&mut rng, 500, 100.0);
        let tree = KdTree::build(&points, mode).unwrap();

        for _ in 0..100 {
            let query = Point::new(rng.random_range(-20.0..120.0), rng.random_range(-20.0..120.0));

            let expected = linear_nearest_n(&points, &query, qty);
            let result = tree.nearest_n(&query, qty);

            let result_dists: Vec<_> = result.iter().map(|n| n.distance).collect();
            let expected_dists: Vec<_> = expected.iter().map(|n| n.distance).collect();
            assert_eq!(result_dists, expected_dists);

            assert_eq!(tree.nearest_n(&query, qty), result);
        }
    }
}
