#![allow(dead_code)]

use std::collections::BTreeMap;

use city_tones::{
    catalog::Catalog,
    config::ManagerConfig,
    manager::ToneLayerManager,
    tone::{ToneGenerator, ToneId},
    Result, ToneError,
};

/// In-memory generator that records every call
#[derive(Default)]
pub struct RecordingGenerator {
    next_id: u64,
    live: BTreeMap<u64, f32>,
    capacity: Option<usize>,
    pub created: usize,
    pub stop_calls: usize,
    pub rejected_stops: usize,
}

impl RecordingGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse new tones once `capacity` are live
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Frequencies of live tones, ascending
    pub fn live_frequencies(&self) -> Vec<f32> {
        let mut freqs: Vec<f32> = self.live.values().copied().collect();
        freqs.sort_by(f32::total_cmp);
        freqs
    }

    /// Simulate the audio system releasing every tone on its own
    pub fn release_all(&mut self) {
        self.live.clear();
    }
}

impl ToneGenerator for RecordingGenerator {
    type Handle = u64;

    fn create_tone(&mut self, frequency: f32, _gain: f32) -> Result<u64> {
        if self.capacity.is_some_and(|cap| self.live.len() >= cap) {
            return Err(ToneError::QueueFull);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.created += 1;
        self.live.insert(id, frequency);
        Ok(id)
    }

    fn stop(&mut self, handle: &u64) -> Result<()> {
        self.stop_calls += 1;
        match self.live.remove(handle) {
            Some(_) => Ok(()),
            None => {
                self.rejected_stops += 1;
                Err(ToneError::AlreadyStopped(ToneId(*handle)))
            }
        }
    }
}

pub fn manager_with<G: ToneGenerator>(generator: G, layers: &[&str]) -> ToneLayerManager<G> {
    let config = ManagerConfig::default().initial_layers(layers.iter().copied());
    ToneLayerManager::new(Catalog::builtin().unwrap(), generator, &config).unwrap()
}

pub const ALL_LAYERS: [&str; 4] = ["air", "temp", "green", "noise"];
