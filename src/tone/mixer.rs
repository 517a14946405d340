use super::{
    message::{ToneMessage, ToneReceiver},
    oscillator::SineOscillator,
    ToneId,
};

struct Voice {
    id: ToneId,
    osc: SineOscillator,
}

/// Sums every live tone into a mono block on the audio thread.
///
/// Voice slots are allocated up front; rendering never allocates.
pub struct ToneMixer<R: ToneReceiver> {
    rx: R,
    sample_rate: f32,
    voices: Vec<Option<Voice>>,
    dropped_starts: u64,
}

impl<R: ToneReceiver> ToneMixer<R> {
    pub fn new(sample_rate: f32, max_voices: usize, rx: R) -> Self {
        let voices = (0..max_voices.max(1)).map(|_| None).collect();

        Self {
            rx,
            sample_rate,
            voices,
            dropped_starts: 0,
        }
    }

    /// Change the device rate. Only tones started afterwards pick it up.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn render_block(&mut self, out: &mut [f32]) {
        // Process control messages
        while let Some(msg) = self.rx.pop() {
            match msg {
                ToneMessage::Start {
                    id,
                    frequency,
                    gain,
                } => self.start(id, frequency, gain),
                ToneMessage::Stop { id } => self.stop(id),
            }
        }

        // Nobody is left to stop these
        if self.rx.is_closed() {
            self.voices.fill_with(|| None);
        }

        // Mix voices
        out.fill(0.0);
        for voice in self.voices.iter_mut().flatten() {
            voice.osc.render_add(out);
        }
    }

    /// Number of tones currently sounding
    pub fn active_voices(&self) -> usize {
        self.voices.iter().filter(|v| v.is_some()).count()
    }

    /// Frequencies of the sounding tones, in slot order
    pub fn active_frequencies(&self) -> impl Iterator<Item = f32> + '_ {
        self.voices.iter().flatten().map(|v| v.osc.frequency())
    }

    /// Starts dropped because every slot was taken
    pub fn dropped_starts(&self) -> u64 {
        self.dropped_starts
    }

    fn start(&mut self, id: ToneId, frequency: f32, gain: f32) {
        let osc = SineOscillator::new(frequency, gain, self.sample_rate);

        // Restarting an id replaces its voice
        if let Some(slot) = self.find_slot(id) {
            *slot = Some(Voice { id, osc });
            return;
        }

        match self.voices.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => *slot = Some(Voice { id, osc }),
            None => self.dropped_starts += 1,
        }
    }

    fn stop(&mut self, id: ToneId) {
        // Unknown ids were already stopped or never fit; nothing to do
        if let Some(slot) = self.find_slot(id) {
            *slot = None;
        }
    }

    fn find_slot(&mut self, id: ToneId) -> Option<&mut Option<Voice>> {
        self.voices
            .iter_mut()
            .find(|slot| matches!(slot, Some(v) if v.id == id))
    }
}
