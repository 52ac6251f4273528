use cgl::test_utils::{
    linear_nearest_n, linear_range_circular, linear_range_orthogonal, rand_points, seeded_rng,
    sorted,
};
use cgl::{BuildMode, KdTree, Point, PointQuadTree, Rect};
use itertools::{iproduct, Itertools};
use rand::Rng;
use rstest::rstest;

const EXTENT: f64 = 1_000.0;

#[rstest]
#[case(10)]
#[case(257)]
#[case(3_000)]
fn every_query_matches_brute_force(#[case] size: usize) {
    let mut rng = seeded_rng(size as u64);
    let points = rand_points(&mut rng, size, EXTENT);

    let balanced = KdTree::build(&points, BuildMode::Balanced).unwrap();
    let listlike = KdTree::build(&points, BuildMode::InsertionOrder).unwrap();
    let quadtree = PointQuadTree::new(&points).unwrap();

    for _ in 0..50 {
        let center = Point::new(rng.random_range(0.0..EXTENT), rng.random_range(0.0..EXTENT));
        let radius = rng.random_range(0.0..EXTENT / 5.0);
        let rect = Rect::new(
            [center.x - radius, center.x + rng.random_range(0.0..radius.max(1.0))],
            [center.y - rng.random_range(0.0..radius.max(1.0)), center.y + radius],
        );

        let orthogonal = sorted(linear_range_orthogonal(&points, &rect));
        assert_eq!(sorted(balanced.range_orthogonal(&rect)), orthogonal);
        assert_eq!(sorted(listlike.range_orthogonal(&rect)), orthogonal);

        let circular = sorted(linear_range_circular(&points, &center, radius));
        assert_eq!(sorted(balanced.range_circular(&center, radius)), circular);
        assert_eq!(sorted(listlike.range_circular(&center, radius)), circular);
        assert_eq!(sorted(quadtree.range_circular(&center, radius)), circular);

        for qty in [1, 3, size] {
            let expected = linear_nearest_n(&points, &center, qty)
                .into_iter()
                .map(|n| n.distance)
                .collect_vec();

            for result in [
                balanced.nearest_n(&center, qty),
                listlike.nearest_n(&center, qty),
                quadtree.nearest_n(&center, qty),
            ] {
                assert_eq!(result.iter().map(|n| n.distance).collect_vec(), expected);
            }
        }
    }
}

#[test]
fn integer_lattice_with_many_ties() {
    let points = iproduct!(-10..=10, -10..=10)
        .map(|(x, y)| Point::new(f64::from(x) * 2.0, f64::from(y) * 3.0))
        .collect_vec();

    let kdtree = KdTree::balanced(&points).unwrap();
    let quadtree = PointQuadTree::new(&points).unwrap();

    for (x, y, r) in iproduct!([-20.0, -1.0, 0.0, 6.0], [-30.0, 1.5, 3.0], [0.0, 3.0, 6.0]) {
        let center = Point::new(x, y);
        let expected = sorted(linear_range_circular(&points, &center, r));

        assert_eq!(sorted(kdtree.range_circular(&center, r)), expected);
        assert_eq!(sorted(quadtree.range_circular(&center, r)), expected);

        let expected = linear_nearest_n(&points, &center, 6)
            .into_iter()
            .map(|n| n.distance)
            .collect_vec();
        assert_eq!(
            kdtree.nearest_n(&center, 6).iter().map(|n| n.distance).collect_vec(),
            expected
        );
        assert_eq!(
            quadtree.nearest_n(&center, 6).iter().map(|n| n.distance).collect_vec(),
            expected
        );
    }
}

#[test]
fn single_precision_coordinates() {
    let points: Vec<Point<f32>> = (0..20)
        .flat_map(|i| (0..20).map(move |j| Point::new(i as f32 * 0.5, j as f32 * 0.5)))
        .collect();

    let kdtree = KdTree::balanced(&points).unwrap();
    let quadtree = PointQuadTree::new(&points).unwrap();
    let center = Point::new(5.0f32, 5.0);

    assert_eq!(kdtree.range_circular(&center, 1.0).len(), 13);
    assert_eq!(quadtree.range_circular(&center, 1.0).len(), 13);
    assert_eq!(kdtree.range_orthogonal(&Rect::new([0.0, 1.0], [0.0, 1.0])).len(), 9);

    let nearest = quadtree.nearest_one(&Point::new(5.1, 4.9));
    assert_eq!(nearest.point, center);
    assert_eq!(kdtree.nearest_one(&Point::new(5.1, 4.9)), nearest);
}
