//! Benchmarks for tone rendering.
//!
//! Run with: cargo bench
//!
//! The audio callback has to finish well within the block deadline.
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - tone/oscillator  Single sine tone
//!   - tone/mixer       Mixer with every layer sounding, plus control traffic

use criterion::{criterion_group, criterion_main};

mod tone;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(benches, tone::bench_oscillator, tone::bench_mixer);
criterion_main!(benches);
