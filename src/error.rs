//! Error handling for city_tones

use thiserror::Error;

use crate::{catalog::CityId, tone::ToneId};

/// Result type alias for city_tones operations
pub type Result<T> = std::result::Result<T, ToneError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToneError {
    // Catalog errors
    #[error("Unknown city id: {0}")]
    UnknownCityId(CityId),

    #[error("Unknown layer id: {0}")]
    UnknownLayerId(String),

    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),

    // Tone errors
    #[error("Tone {0} was already stopped")]
    AlreadyStopped(ToneId),

    #[error("Tone queue is full")]
    QueueFull,

    // Device errors
    #[error("Audio device error: {0}")]
    Device(String),

    #[error("Audio stream error: {0}")]
    Stream(String),
}

impl ToneError {
    /// True for failures that only mean the tone is already silent.
    pub fn is_already_stopped(&self) -> bool {
        matches!(self, ToneError::AlreadyStopped(_))
    }
}
