use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
    Throughput,
};
use std::hint::black_box;

use cgl::test_utils::{rand_points, seeded_rng};
use cgl::{KdTree, PointQuadTree};

const QUERY: usize = 1_000;

pub fn nearest_n(c: &mut Criterion) {
    let mut group = c.benchmark_group("Query Nearest n");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));
    group.throughput(Throughput::Elements(QUERY as u64));

    for size in [1_000, 10_000, 100_000] {
        let mut rng = seeded_rng(size as u64);
        let points = rand_points(&mut rng, size, 1_000.0);
        let queries = rand_points(&mut rng, QUERY, 1_000.0);

        let kdtree = KdTree::balanced(&points).expect("non-empty");
        let quadtree = PointQuadTree::new(&points).expect("non-empty");

        for qty in [1, 10] {
            group.bench_with_input(
                BenchmarkId::new(format!("kdtree k={qty}"), size),
                &queries,
                |b, queries| {
                    b.iter(|| {
                        for query in queries {
                            black_box(kdtree.nearest_n(query, qty));
                        }
                    })
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("quadtree k={qty}"), size),
                &queries,
                |b, queries| {
                    b.iter(|| {
                        for query in queries {
                            black_box(quadtree.nearest_n(query, qty));
                        }
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, nearest_n);
criterion_main!(benches);
