//! Benchmarks for sine tone generation.

use std::hint::black_box;

use city_tones::tone::SineOscillator;
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("tone/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut osc = SineOscillator::new(440.0, 0.1, 48_000.0);
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
