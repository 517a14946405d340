//! Benchmarks for the realtime mixer.

use std::hint::black_box;

use city_tones::{
    catalog::{Catalog, CityId},
    config::{ManagerConfig, MixerConfig},
    manager::ToneLayerManager,
    tone::tone_channel,
};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_mixer(c: &mut Criterion) {
    let mut group = c.benchmark_group("tone/mixer");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // All four layers sounding, no control traffic
        let (generator, mut mixer) = tone_channel(48_000.0, MixerConfig::default());
        let catalog = Catalog::builtin().unwrap();
        let mut manager =
            ToneLayerManager::new(catalog, generator, &ManagerConfig::default()).unwrap();
        manager.select_and_play(CityId(1)).unwrap();
        group.bench_with_input(BenchmarkId::new("four_layers", size), &size, |b, _| {
            b.iter(|| {
                mixer.render_block(black_box(&mut buffer));
            })
        });

        // One layer toggled before every block
        let (generator, mut mixer) = tone_channel(48_000.0, MixerConfig::default());
        let catalog = Catalog::builtin().unwrap();
        let mut manager =
            ToneLayerManager::new(catalog, generator, &ManagerConfig::default()).unwrap();
        manager.select_and_play(CityId(1)).unwrap();
        group.bench_with_input(BenchmarkId::new("toggle_per_block", size), &size, |b, _| {
            b.iter(|| {
                manager.toggle_layer("green").unwrap();
                mixer.render_block(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
