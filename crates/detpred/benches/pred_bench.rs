//! Criterion benchmarks for the sidedness predicates.
//! Inputs come from the seeded samplers so runs are comparable across hosts.
//! Results land under target/criterion; run with: cargo bench -p detpred

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use detpred::predicates::{incircle, orient2d, orient3d};
use detpred::sampler::{draw_points2, draw_points3, BoxCfg, ReplayToken};

fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates");
    let cfg = BoxCfg::default();
    for &n in &[64usize, 1024] {
        group.bench_with_input(BenchmarkId::new("orient2d", n), &n, |b, &n| {
            b.iter_batched(
                || draw_points2(cfg, ReplayToken { seed: 43, index: 0 }, 3 * n).unwrap(),
                |pts| {
                    pts.chunks_exact(3)
                        .map(|q| orient2d(q[0], q[1], q[2]))
                        .sum::<f64>()
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("orient3d", n), &n, |b, &n| {
            b.iter_batched(
                || draw_points3(cfg, ReplayToken { seed: 44, index: 0 }, 4 * n).unwrap(),
                |pts| {
                    pts.chunks_exact(4)
                        .map(|q| orient3d(q[0], q[1], q[2], q[3]))
                        .sum::<f64>()
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("incircle", n), &n, |b, &n| {
            b.iter_batched(
                || draw_points2(cfg, ReplayToken { seed: 45, index: 0 }, 4 * n).unwrap(),
                |pts| {
                    pts.chunks_exact(4)
                        .map(|q| incircle(q[0], q[1], q[2], q[3]))
                        .sum::<f64>()
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_predicates);
criterion_main!(benches);
