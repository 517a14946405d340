//! Tone layer lifecycle.
//!
//! [`ToneLayerManager`] owns the live tone handles, keyed by layer, and keeps
//! them consistent with the playback state and the enabled-layer set:
//!
//! - while Playing, exactly one tone sounds per enabled layer
//! - while Stopped, no tone sounds
//! - a handle is stopped and forgotten within the same call
//!
//! Dropping the manager stops every tone it still holds.

mod state;

use std::collections::BTreeMap;

use log::{debug, info, warn};

pub use state::{PlaybackState, Transport};

use crate::{
    catalog::{Catalog, City, CityId},
    config::ManagerConfig,
    error::Result,
    tone::ToneGenerator,
};

pub struct ToneLayerManager<G: ToneGenerator> {
    catalog: Catalog,
    generator: G,
    tone_gain: f32,
    /// Enabled flag per layer, in catalog order
    enabled: Vec<bool>,
    /// Live handles keyed by layer position
    active: BTreeMap<usize, G::Handle>,
    playback: PlaybackState,
}

impl<G: ToneGenerator> ToneLayerManager<G> {
    /// Create a stopped manager with the configured layers enabled
    pub fn new(catalog: Catalog, generator: G, config: &ManagerConfig) -> Result<Self> {
        let mut enabled = vec![false; catalog.layers().len()];
        for id in &config.initial_layers {
            enabled[catalog.layer_position(id)?] = true;
        }

        Ok(Self {
            catalog,
            generator,
            tone_gain: config.tone_gain,
            enabled,
            active: BTreeMap::new(),
            playback: PlaybackState::new(),
        })
    }

    /// Select a city and (re)start one tone per enabled layer.
    ///
    /// Reselecting the current city still stops and restarts every tone.
    pub fn select_and_play(&mut self, city_id: CityId) -> Result<()> {
        let city = self.catalog.city(city_id)?;
        info!("Selected city: {}, {}", city.name, city.country);
        let name = city.name.clone();

        self.stop_all();
        self.playback.select(city_id);
        self.start_enabled()?;

        info!("Now sonifying: {} with layers {:?}", name, self.active_layers());
        Ok(())
    }

    /// Flip between Playing and Stopped.
    ///
    /// With no city selected this does nothing.
    pub fn toggle_playback(&mut self) -> Result<()> {
        match self.playback.transport() {
            Transport::Playing => {
                self.stop_all();
                self.playback.stop();
                info!("Playback stopped");
            }
            Transport::Stopped => {
                if !self.playback.resume() {
                    debug!("Ignoring playback toggle: no city selected");
                    return Ok(());
                }
                self.start_enabled()?;
                info!("Playback resumed");
            }
        }
        Ok(())
    }

    /// Flip a layer's enabled flag and return the new value.
    ///
    /// Tones only change while playing; otherwise the flag takes effect on
    /// the next select or resume.
    pub fn toggle_layer(&mut self, layer_id: &str) -> Result<bool> {
        let index = self.catalog.layer_position(layer_id)?;
        let enabled = !self.enabled[index];

        if self.playback.is_playing() {
            if enabled {
                // A layer that could not start stays disabled
                self.start_layer(index)?;
            } else if let Some(handle) = self.active.remove(&index) {
                self.release(index, handle);
            }
        }
        self.enabled[index] = enabled;

        info!(
            "Toggled {}: {}",
            self.catalog.layers()[index].label,
            if enabled { "ON" } else { "OFF" }
        );
        Ok(enabled)
    }

    /// Stop every live tone and forget its handle
    pub fn stop_all(&mut self) {
        for (index, handle) in std::mem::take(&mut self.active) {
            self.release(index, handle);
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn transport(&self) -> Transport {
        self.playback.transport()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// The selected city, if any
    pub fn selected_city(&self) -> Option<&City> {
        self.playback
            .selected_city()
            .and_then(|id| self.catalog.city(id).ok())
    }

    pub fn is_layer_enabled(&self, layer_id: &str) -> Result<bool> {
        Ok(self.enabled[self.catalog.layer_position(layer_id)?])
    }

    /// Enabled layer ids in catalog order
    pub fn enabled_layers(&self) -> Vec<&str> {
        self.catalog
            .layers()
            .iter()
            .zip(&self.enabled)
            .filter(|(_, on)| **on)
            .map(|(layer, _)| layer.id.as_str())
            .collect()
    }

    /// Ids of layers with a live tone, in catalog order
    pub fn active_layers(&self) -> Vec<&str> {
        self.active
            .keys()
            .map(|&i| self.catalog.layers()[i].id.as_str())
            .collect()
    }

    /// True when `layer_id` currently has a live tone
    pub fn is_layer_sounding(&self, layer_id: &str) -> bool {
        self.catalog
            .layer_position(layer_id)
            .map(|i| self.active.contains_key(&i))
            .unwrap_or(false)
    }

    pub fn active_tone_count(&self) -> usize {
        self.active.len()
    }

    fn start_enabled(&mut self) -> Result<()> {
        for index in 0..self.enabled.len() {
            if self.enabled[index] {
                self.start_layer(index)?;
            }
        }
        Ok(())
    }

    fn start_layer(&mut self, index: usize) -> Result<()> {
        let frequency = self.catalog.layers()[index].frequency;
        let handle = self.generator.create_tone(frequency, self.tone_gain)?;

        // Never hold two handles for one layer
        if let Some(stale) = self.active.insert(index, handle) {
            self.release(index, stale);
        }
        Ok(())
    }

    fn release(&mut self, index: usize, handle: G::Handle) {
        if let Err(err) = self.generator.stop(&handle) {
            let label = &self.catalog.layers()[index].label;
            if err.is_already_stopped() {
                debug!("{label} tone already stopped: {err}");
            } else {
                warn!("Failed to stop {label} tone: {err}");
            }
        }
    }
}

impl<G: ToneGenerator> Drop for ToneLayerManager<G> {
    fn drop(&mut self) {
        self.stop_all();
    }
}
