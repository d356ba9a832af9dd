//! Criterion benchmarks for classification and the standard-form transform.
//! Batches of sampled conics, n in {1, 100, 1000}.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use conic::rand::{draw_central, draw_conic, AxesSign, ReplayToken, SampleCfg};
use conic::ConicSection;

fn sampled(n: usize, seed: u64) -> Vec<ConicSection> {
    let cfg = SampleCfg::default();
    (0..n as u64)
        .map(|index| draw_conic(cfg, ReplayToken { seed, index }))
        .collect()
}

fn sampled_central(n: usize, seed: u64) -> Vec<ConicSection> {
    let cfg = SampleCfg::default();
    (0..n as u64)
        .map(|index| draw_central(cfg, ReplayToken { seed, index }, AxesSign::Ellipse))
        .collect()
}

fn bench_conic(c: &mut Criterion) {
    let mut group = c.benchmark_group("conic");
    for &n in &[1usize, 100, 1000] {
        let conics = sampled(n, 43);
        group.bench_with_input(BenchmarkId::new("conic_type", n), &conics, |b, cs| {
            b.iter(|| {
                for c in cs {
                    let _ = black_box(c.conic_type());
                }
            })
        });

        let central = sampled_central(n, 44);
        group.bench_with_input(BenchmarkId::new("standard_form", n), &central, |b, cs| {
            b.iter(|| {
                for c in cs {
                    let _ = black_box(c.standard_form());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_conic);
criterion_main!(benches);
