//! Sound of the City: pick a city, toggle sound layers, hear one sine tone
//! per enabled layer.
//!
//! The [`manager::ToneLayerManager`] keeps the set of sounding tones in step
//! with the playback state. It drives any [`tone::ToneGenerator`]; the
//! realtime implementation sends messages over a lock-free ring to a
//! [`tone::mixer::ToneMixer`] running on the audio thread.

pub mod catalog; // Fixed city and sound-layer tables
pub mod config;
pub mod error;
pub mod io; // Audio device output
pub mod manager; // Tone layer lifecycle
pub mod tone; // Tone generation and mixing

pub use error::{Result, ToneError};

pub const MAX_BLOCK_SIZE: usize = 2048;
pub const DEFAULT_SAMPLE_RATE: f32 = 48_000.0;
