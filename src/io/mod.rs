// Purpose - external interfaces: the audio output device

#[cfg(feature = "rtrb")]
pub mod output;

#[cfg(feature = "rtrb")]
pub use output::AudioOutput;
