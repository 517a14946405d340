//! Tone rendering benchmarks.

mod mixer;
mod oscillator;

pub use mixer::bench_mixer;
pub use oscillator::bench_oscillator;
