//! Realtime tone generator.
//!
//! The UI thread owns a [`RingToneGenerator`]; the audio thread owns the
//! matching [`ToneMixer`]. They share nothing but a single-producer
//! single-consumer ring, so neither side ever blocks.
//!
//! A stop that does not fit in the ring is kept back and sent ahead of the
//! next message, so a full ring can delay a stop but never lose it.

use std::collections::{HashSet, VecDeque};

use rtrb::{Consumer, Producer, RingBuffer};

use super::{message::ToneMessage, mixer::ToneMixer, ToneGenerator, ToneId};
use crate::{
    config::MixerConfig,
    error::{Result, ToneError},
};

/// Create a connected generator/mixer pair
pub fn tone_channel(
    sample_rate: f32,
    config: MixerConfig,
) -> (RingToneGenerator, ToneMixer<Consumer<ToneMessage>>) {
    let (tx, rx) = RingBuffer::<ToneMessage>::new(config.queue_capacity.max(1));
    let generator = RingToneGenerator::new(tx);
    let mixer = ToneMixer::new(sample_rate, config.max_voices, rx);
    (generator, mixer)
}

pub struct RingToneGenerator {
    tx: Producer<ToneMessage>,
    next_id: u64,
    live: HashSet<ToneId>,
    /// Stops accepted while the ring was full, oldest first
    pending_stops: VecDeque<ToneId>,
}

impl RingToneGenerator {
    pub fn new(tx: Producer<ToneMessage>) -> Self {
        Self {
            tx,
            next_id: 0,
            live: HashSet::new(),
            pending_stops: VecDeque::new(),
        }
    }

    /// Send as many held-back stops as the ring has room for.
    ///
    /// Returns the number still waiting. Call it regularly (the UI does so
    /// every frame) so stops land even when no other tone call follows.
    pub fn flush(&mut self) -> usize {
        while let Some(&id) = self.pending_stops.front() {
            if self.tx.push(ToneMessage::Stop { id }).is_err() {
                break;
            }
            self.pending_stops.pop_front();
        }
        self.pending_stops.len()
    }

    /// Stops accepted but not yet handed to the audio thread
    pub fn pending_stops(&self) -> usize {
        self.pending_stops.len()
    }

    /// Tones started and not yet stopped
    pub fn live_tones(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, id: ToneId) -> bool {
        self.live.contains(&id)
    }
}

impl ToneGenerator for RingToneGenerator {
    type Handle = ToneId;

    fn create_tone(&mut self, frequency: f32, gain: f32) -> Result<ToneId> {
        // Held-back stops go first; a start must not overtake them
        if self.flush() > 0 {
            return Err(ToneError::QueueFull);
        }

        let id = ToneId(self.next_id);
        self.tx
            .push(ToneMessage::Start {
                id,
                frequency,
                gain,
            })
            .map_err(|_| ToneError::QueueFull)?;

        self.next_id += 1;
        self.live.insert(id);
        Ok(id)
    }

    fn stop(&mut self, handle: &ToneId) -> Result<()> {
        if !self.live.remove(handle) {
            return Err(ToneError::AlreadyStopped(*handle));
        }

        self.pending_stops.push_back(*handle);
        self.flush();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_tracked() {
        let (mut generator, _mixer) = tone_channel(48_000.0, MixerConfig::default());
        let a = generator.create_tone(220.0, 0.1).unwrap();
        let b = generator.create_tone(220.0, 0.1).unwrap();

        assert_ne!(a, b);
        assert_eq!(generator.live_tones(), 2);
        assert!(generator.is_live(a));
    }

    #[test]
    fn double_stop_reports_already_stopped() {
        let (mut generator, _mixer) = tone_channel(48_000.0, MixerConfig::default());
        let id = generator.create_tone(440.0, 0.1).unwrap();

        assert_eq!(generator.stop(&id), Ok(()));
        assert_eq!(generator.stop(&id), Err(ToneError::AlreadyStopped(id)));
    }

    #[test]
    fn full_ring_is_reported() {
        let config = MixerConfig::default().queue_capacity(1);
        let (mut generator, _mixer) = tone_channel(48_000.0, config);

        assert!(generator.create_tone(220.0, 0.1).is_ok());
        assert_eq!(generator.create_tone(330.0, 0.1), Err(ToneError::QueueFull));
        assert_eq!(generator.live_tones(), 1);
    }

    #[test]
    fn stop_on_full_ring_is_delivered_later() {
        let config = MixerConfig::default().queue_capacity(2);
        let (mut generator, mut mixer) = tone_channel(48_000.0, config);
        let air = generator.create_tone(220.0, 0.1).unwrap();
        let temp = generator.create_tone(330.0, 0.1).unwrap();

        // Ring holds both starts; the stops wait
        assert_eq!(generator.stop(&air), Ok(()));
        assert_eq!(generator.stop(&temp), Ok(()));
        assert_eq!(generator.live_tones(), 0);
        assert_eq!(generator.pending_stops(), 2);
        assert_eq!(generator.stop(&air), Err(ToneError::AlreadyStopped(air)));

        mixer.render_block(&mut [0.0f32; 64]);
        assert_eq!(mixer.active_voices(), 2);

        assert_eq!(generator.flush(), 0);
        mixer.render_block(&mut [0.0f32; 64]);
        assert_eq!(mixer.active_voices(), 0);
    }

    #[test]
    fn start_waits_behind_held_back_stops() {
        let config = MixerConfig::default().queue_capacity(1);
        let (mut generator, mut mixer) = tone_channel(48_000.0, config);
        let air = generator.create_tone(220.0, 0.1).unwrap();
        generator.stop(&air).unwrap();

        assert_eq!(generator.create_tone(440.0, 0.1), Err(ToneError::QueueFull));

        mixer.render_block(&mut [0.0f32; 16]);
        // The stop takes the freed slot, so the start still has to wait
        assert_eq!(generator.create_tone(440.0, 0.1), Err(ToneError::QueueFull));
        assert_eq!(generator.pending_stops(), 0);

        mixer.render_block(&mut [0.0f32; 16]);
        generator.create_tone(440.0, 0.1).unwrap();
        mixer.render_block(&mut [0.0f32; 16]);
        assert_eq!(mixer.active_frequencies().collect::<Vec<_>>(), [440.0]);
    }

    #[test]
    fn dropping_the_generator_silences_the_mixer() {
        let config = MixerConfig::default().queue_capacity(1);
        let (mut generator, mut mixer) = tone_channel(48_000.0, config);
        let air = generator.create_tone(220.0, 0.1).unwrap();
        generator.stop(&air).unwrap();
        assert_eq!(generator.pending_stops(), 1);

        drop(generator);
        let mut out = [1.0f32; 32];
        mixer.render_block(&mut out);
        assert_eq!(mixer.active_voices(), 0);
        assert!(out.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn mixer_follows_generator() {
        let (mut generator, mut mixer) = tone_channel(48_000.0, MixerConfig::default());
        let air = generator.create_tone(220.0, 0.1).unwrap();
        generator.create_tone(550.0, 0.1).unwrap();
        mixer.render_block(&mut [0.0f32; 64]);
        assert_eq!(mixer.active_voices(), 2);

        generator.stop(&air).unwrap();
        mixer.render_block(&mut [0.0f32; 64]);
        assert_eq!(mixer.active_frequencies().collect::<Vec<_>>(), [550.0]);
    }
}
