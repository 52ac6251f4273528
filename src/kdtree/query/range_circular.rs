use crate::kdtree::kdtree::{KdNode, KdTree, Side};
use crate::point::{Point, K};
use crate::traits::Axis;

impl<A: Axis> KdTree<A> {
    /// Finds all points within `radius` of `center`, boundary included.
    ///
    /// Results are returned in traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cgl::{KdTree, Point};
    ///
    /// let points: Vec<Point> = [(2.0, 2.0), (0.0, 5.0), (8.0, 0.0), (9.0, 8.0), (7.0, 14.0)]
    ///     .into_iter()
    ///     .map(Point::from)
    ///     .collect();
    /// let tree = KdTree::balanced(&points).unwrap();
    ///
    /// let within = tree.range_circular(&Point::new(5.0, 5.0), 5.0);
    ///
    /// assert_eq!(within.len(), 3);
    /// assert!(!within.contains(&Point::new(8.0, 0.0)));
    /// ```
    pub fn range_circular(&self, center: &Point<A>, radius: A) -> Vec<Point<A>> {
        let mut found = Vec::new();

        // corners of the square circumscribing the circle
        let lower = Point::new(center.x - radius, center.y - radius);
        let upper = Point::new(center.x + radius, center.y + radius);

        Self::range_circular_recurse(&self.root, center, radius, [&lower, &upper], 0, &mut found);

        found
    }

    fn range_circular_recurse(
        node: &KdNode<A>,
        center: &Point<A>,
        radius: A,
        corners: [&Point<A>; 2],
        depth: usize,
        found: &mut Vec<Point<A>>,
    ) {
        let [lower, upper] = corners;

        // the whole square lies right of the node
        if Side::of(&node.point, lower, depth) == Side::Right {
            if let Some(right) = node.right() {
                Self::range_circular_recurse(right, center, radius, corners, depth + 1, found);
            }
            return;
        }

        // the whole square lies left of the node; a node exactly on the
        // square's upper edge may still be on the circle, so it is not pruned
        let axis = depth % K;
        if node.point[axis] > upper[axis] {
            if let Some(left) = node.left() {
                Self::range_circular_recurse(left, center, radius, corners, depth + 1, found);
            }
            return;
        }

        if node.point.distance(center) <= radius {
            found.push(node.point);
        }

        for child in [node.left(), node.right()].into_iter().flatten() {
            Self::range_circular_recurse(child, center, radius, corners, depth + 1, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{grid_points, linear_range_circular, rand_points, seeded_rng, sorted};
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
    fn can_query_points_within_radius(#[case] mode: BuildMode) {
        let points = fixture();
        let tree = KdTree::build(&points, mode).unwrap();
        let center = Point::new(5.0, 5.0);

        let result = sorted(tree.range_circular(&center, 5.0));

        // (0,5) and (9,8) lie exactly on the circle
        assert_eq!(
            result,
            vec![Point::new(0.0, 5.0), Point::new(2.0, 2.0), Point::new(9.0, 8.0)]
        );
        assert_eq!(result, sorted(linear_range_circular(&points, &center, 5.0)));
    }

    #[rstest]
    #[case(BuildMode::Balanced)]
    #[case(BuildMode::InsertionOrder)]
    fn points_on_the_upper_edge_of_the_square_are_found(#[case] mode: BuildMode) {
        // (3,0) and (0,3) touch the circle where it meets the upper edges of
        // its bounding square
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(3.0, 3.0),
            Point::new(-3.0, 0.0),
        ];
        let tree = KdTree::build(&points, mode).unwrap();
        let center = Point::new(0.0, 0.0);

        let result = sorted(tree.range_circular(&center, 3.0));

        assert_eq!(result, sorted(linear_range_circular(&points, &center, 3.0)));
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn grid_circle_includes_its_boundary() {
        let points = grid_points(20, 20);
        let tree = KdTree::balanced(&points).unwrap();

        let result = tree.range_circular(&Point::new(10.0, 10.0), 2.0);

        assert_eq!(result.len(), 13);
    }

    #[test]
    fn negative_radius_matches_nothing() {
        let tree = KdTree::balanced(&fixture()).unwrap();

        assert!(tree.range_circular(&Point::new(2.0, 2.0), -1.0).is_empty());
    }

    #[rstest]
    #[case(BuildMode::Balanced)]
    #[case(BuildMode::InsertionOrder)]
    fn matches_a_linear_scan(#[case] mode: BuildMode) {
        let mut rng = seeded_rng(5);
        let points = rand_points(&mut rng, 1_000, 100.0);
        let tree = KdTree::build(&points, mode).unwrap();

        for _ in 0..200 {
            let center = Point::new(rng.random_range(-10.0..110.0), rng.random_range(-10.0..110.0));
            let radius = rng.random_range(0.0..20.0);

            let expected = sorted(linear_range_circular(&points, &center, radius));
            let result = sorted(tree.range_circular(&center, radius));

            assert_eq!(result, expected);
        }
    }
}
