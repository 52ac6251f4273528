/// cgl demo: grid queries
///
/// Builds both tree types over a 100x100 integer grid, runs each query family
/// once and prints the results as JSON.
use std::error::Error;
use std::time::Instant;

use cgl::{BuildMode, KdTree, Point, PointQuadTree, Rect};

use tracing::Level;
use tracing_subscriber::fmt;

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = fmt().with_max_level(Level::DEBUG).without_time().finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let points: Vec<Point> = (0..100)
        .flat_map(|x| (0..100).map(move |y| Point::new(x as f64, y as f64)))
        .collect();

    let start = Instant::now();
    let balanced = KdTree::build(&points, BuildMode::Balanced)?;
    let quadtree = PointQuadTree::new(&points)?;
    println!(
        "Built trees over {} points in {:?}: kd-tree depth {}, quadtree depth {}",
        points.len(),
        start.elapsed(),
        balanced.depth(),
        quadtree.depth()
    );

    let center = Point::new(50.0, 50.0);

    let within = quadtree.range_circular(&center, 2.0);
    println!("Within 2 of {center}: {}", serde_json::to_string(&within)?);

    let rect = Rect::new([10.0, 12.0], [20.0, 21.0]);
    let inside = balanced.range_orthogonal(&rect);
    println!("Inside {}: {}", serde_json::to_string(&rect)?, serde_json::to_string(&inside)?);

    for neighbour in balanced.nearest_n(&Point::new(50.4, 49.8), 3) {
        println!("{} at {:.3}", neighbour.point, neighbour.distance);
    }

    Ok(())
}
