mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use galaxy_scatter::placement::{generate_points, GenerationConfig, GenerationPolicy};
use rand::rngs::StdRng;
use rand::SeedableRng;

const COUNTS: [usize; 4] = [100, 500, 2_000, 5_000];
const MIN_DISTANCE: f64 = 1.0;
const RADIUS_LIMIT: f64 = 200.0;

fn placement_benches(c: &mut Criterion) {
    let policies = [
        GenerationPolicy::spiral_degrees(4, 12.0),
        GenerationPolicy::Elliptical,
        GenerationPolicy::Irregular,
    ];

    for policy in policies {
        let mut group = c.benchmark_group(format!("placement/{}", policy.tag()));

        for &count in &COUNTS {
            let config = GenerationConfig::new(count, MIN_DISTANCE, RADIUS_LIMIT, policy);
            group.throughput(common::elements_throughput(count));

            let mut rng = StdRng::seed_from_u64(0xC0FFEE_u64 ^ count as u64);
            group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
                b.iter(|| {
                    let report = generate_points(&config, &mut rng).expect("feasible packing");
                    black_box(report.points.len());
                });
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = placement_benches
}
criterion_main!(benches);
