use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display colour for a layer, packed as 0xRRGGBB
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerColor(pub u32);

impl LayerColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }
}

impl fmt::Display for LayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0xFF_FFFF)
    }
}

/// A named sound category mapped to one fixed frequency
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SoundLayer {
    pub id: String,
    pub label: String,
    /// Tone frequency in Hz
    pub frequency: f32,
    pub color: LayerColor,
}

impl SoundLayer {
    pub fn new(id: &str, label: &str, frequency: f32, color: u32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            frequency,
            color: LayerColor(color),
        }
    }
}

/// The four layers shipped with the demo
pub fn builtin_layers() -> Vec<SoundLayer> {
    vec![
        SoundLayer::new("air", "Air Pollution", 220.0, 0xFF6B6B),
        SoundLayer::new("temp", "Temperature", 330.0, 0xFFA07A),
        SoundLayer::new("green", "Green Space", 440.0, 0x4ECDC4),
        SoundLayer::new("noise", "Noise Pollution", 550.0, 0x95E1D3),
    ]
}
