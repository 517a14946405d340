//! Session configuration.
//!
//! Defaults mirror the shipped demo: every layer starts enabled and each
//! tone plays at a tenth of full scale.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::builtin_layers;

/// Settings for a [`crate::manager::ToneLayerManager`]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerConfig {
    /// Linear amplitude of each tone (0.0-1.0)
    pub tone_gain: f32,
    /// Layer ids enabled when the session starts
    pub initial_layers: Vec<String>,
}

impl ManagerConfig {
    pub fn new() -> Self {
        Self {
            tone_gain: 0.1,
            initial_layers: builtin_layers().into_iter().map(|l| l.id).collect(),
        }
    }

    pub fn tone_gain(mut self, gain: f32) -> Self {
        self.tone_gain = gain.clamp(0.0, 1.0);
        self
    }

    pub fn initial_layers<I, S>(mut self, layers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial_layers = layers.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a comma-separated layer list such as `"air, noise"`.
    ///
    /// Blank entries are skipped; ids are validated later against the catalog.
    pub fn initial_layers_from_list(self, list: &str) -> Self {
        let layers: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        self.initial_layers(layers)
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings for the realtime tone mixer and its control ring
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixerConfig {
    /// Maximum number of simultaneously sounding tones
    pub max_voices: usize,
    /// Capacity of the UI -> audio message ring
    pub queue_capacity: usize,
}

impl MixerConfig {
    pub fn new() -> Self {
        Self {
            max_voices: 8,
            queue_capacity: 64,
        }
    }

    pub fn max_voices(mut self, voices: usize) -> Self {
        self.max_voices = voices.max(1);
        self
    }

    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self::new()
    }
}
