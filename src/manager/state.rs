//! Playback state machine
//!
//! Two states, Stopped and Playing. Playing always has a selected city;
//! there is no paused state that keeps tones alive.

use std::fmt;

use crate::catalog::CityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    #[default]
    Stopped,
    Playing,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Stopped => write!(f, "Stopped"),
            Transport::Playing => write!(f, "Playing"),
        }
    }
}

/// Selected city plus transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    selected_city: Option<CityId>,
    transport: Transport,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_city(&self) -> Option<CityId> {
        self.selected_city
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn is_playing(&self) -> bool {
        self.transport == Transport::Playing
    }

    /// Select a city and start playing, whatever the previous state
    pub(crate) fn select(&mut self, city: CityId) {
        self.selected_city = Some(city);
        self.transport = Transport::Playing;
    }

    pub(crate) fn stop(&mut self) {
        self.transport = Transport::Stopped;
    }

    /// Resume the selected city. Returns false when nothing is selected.
    pub(crate) fn resume(&mut self) -> bool {
        if self.selected_city.is_none() {
            return false;
        }
        self.transport = Transport::Playing;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_without_city() {
        let state = PlaybackState::new();
        assert_eq!(state.transport(), Transport::Stopped);
        assert_eq!(state.selected_city(), None);
    }

    #[test]
    fn resume_requires_a_city() {
        let mut state = PlaybackState::new();
        assert!(!state.resume());
        assert!(!state.is_playing());

        state.select(CityId(3));
        state.stop();
        assert!(state.resume());
        assert!(state.is_playing());
        assert_eq!(state.selected_city(), Some(CityId(3)));
    }

    #[test]
    fn display() {
        assert_eq!(Transport::Playing.to_string(), "Playing");
        assert_eq!(Transport::Stopped.to_string(), "Stopped");
    }
}
