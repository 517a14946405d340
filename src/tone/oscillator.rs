use std::f32::consts::TAU;

/*
Sine Tone
=========

Each sound layer is a single sine wave: one frequency, no harmonics, no
envelope. The oscillator keeps a phase in cycles (0.0..1.0) and advances it
by frequency / sample_rate per sample:

  sample[n] = gain * sin(2π * phase[n])
  phase[n+1] = fract(phase[n] + f / sr)

Wrapping the phase keeps precision constant no matter how long the tone
has been sounding. Layers sit at 220, 330, 440 and 550 Hz, so with all four
enabled at the default gain of 0.1 the mix peaks well below full scale.
*/

pub struct SineOscillator {
    frequency: f32,
    gain: f32,
    phase: f32,
    increment: f32,
}

impl SineOscillator {
    pub fn new(frequency: f32, gain: f32, sample_rate: f32) -> Self {
        Self {
            frequency,
            gain,
            phase: 0.0,
            increment: frequency / sample_rate,
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Overwrite `out` with the next block of samples
    pub fn render(&mut self, out: &mut [f32]) {
        out.fill(0.0);
        self.render_add(out);
    }

    /// Add the next block of samples onto `out`
    #[inline]
    pub fn render_add(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample += self.gain * (TAU * self.phase).sin();
            self.phase += self.increment;
            if self.phase >= 1.0 {
                self.phase -= 1.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_sine() {
        let sample_rate = 48_000.0;
        let frequency = 440.0;
        let mut osc = SineOscillator::new(frequency, 1.0, sample_rate);

        let mut buffer = vec![0.0f32; 128];
        osc.render(&mut buffer);

        // sample n should be sin(2pi f n / sr)
        let sample_index = 12;
        let expected = (TAU * frequency * sample_index as f32 / sample_rate).sin();
        let actual = buffer[sample_index];
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn gain_scales_amplitude() {
        let mut osc = SineOscillator::new(220.0, 0.1, 48_000.0);
        let mut buffer = vec![0.0f32; 48_000];
        osc.render(&mut buffer);

        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        assert!((peak - 0.1).abs() < 1e-3, "peak was {peak}");
    }

    #[test]
    fn phase_continues_across_blocks() {
        let mut whole = SineOscillator::new(330.0, 1.0, 48_000.0);
        let mut split = SineOscillator::new(330.0, 1.0, 48_000.0);

        let mut a = vec![0.0f32; 256];
        whole.render(&mut a);

        let mut b = vec![0.0f32; 256];
        split.render(&mut b[..100]);
        split.render(&mut b[100..]);

        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).abs() < 1e-6);
        }
    }

    #[test]
    fn render_add_accumulates() {
        let mut osc = SineOscillator::new(440.0, 0.5, 48_000.0);
        let mut buffer = vec![1.0f32; 64];
        osc.render_add(&mut buffer);
        // first sample is sin(0) = 0, so the offset survives untouched
        assert_eq!(buffer[0], 1.0);
        assert!(buffer[1] > 1.0);
    }
}
