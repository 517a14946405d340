//! Tone generation.
//!
//! [`ToneGenerator`] is the capability the manager consumes: start a
//! constant sine at a frequency, stop it again. The realtime implementation
//! lives in [`ring`] and feeds a [`mixer::ToneMixer`] on the audio thread.

/// Start/stop messages sent to the audio thread.
pub mod message;
/// Audio-thread mixer summing the live tones.
pub mod mixer;
/// Phase-accumulating sine oscillator.
pub mod oscillator;
/// Lock-free ring-buffer generator.
#[cfg(feature = "rtrb")]
pub mod ring;

use std::fmt;

use crate::error::Result;

pub use message::{ToneMessage, ToneReceiver};
pub use mixer::ToneMixer;
pub use oscillator::SineOscillator;
#[cfg(feature = "rtrb")]
pub use ring::{tone_channel, RingToneGenerator};

/// Identifier of one started tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToneId(pub u64);

impl fmt::Display for ToneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A platform capability that produces continuous sine tones
pub trait ToneGenerator {
    /// Opaque reference to a sounding tone
    type Handle;

    /// Start a constant-amplitude sine at `frequency` Hz, sounding immediately
    fn create_tone(&mut self, frequency: f32, gain: f32) -> Result<Self::Handle>;

    /// Stop a tone.
    ///
    /// Stopping a tone that was already released returns
    /// [`crate::ToneError::AlreadyStopped`]; callers may ignore it.
    fn stop(&mut self, handle: &Self::Handle) -> Result<()>;
}

/// Lend a generator to a manager while keeping access to it afterwards
impl<G: ToneGenerator + ?Sized> ToneGenerator for &mut G {
    type Handle = G::Handle;

    fn create_tone(&mut self, frequency: f32, gain: f32) -> Result<Self::Handle> {
        (**self).create_tone(frequency, gain)
    }

    fn stop(&mut self, handle: &Self::Handle) -> Result<()> {
        (**self).stop(handle)
    }
}
