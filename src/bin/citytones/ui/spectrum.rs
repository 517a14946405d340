//! Spectrum view
//!
//! FFT of the tapped mix over the band the layers live in, with a marker
//! above every enabled layer's frequency.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

use city_tones::{manager::ToneLayerManager, tone::ToneGenerator};

/// Displayed band in Hz
const MIN_FREQ: f64 = 100.0;
const MAX_FREQ: f64 = 800.0;

const FLOOR_DB: f64 = -100.0;

pub struct SpectrumAnalyzer {
    /// Hann window coefficients
    window: Vec<f32>,
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
    /// FFT bins inside the displayed band
    bins: std::ops::Range<usize>,
    /// Hz per FFT bin
    bin_width: f64,
    /// (frequency_hz, magnitude_db)
    spectrum: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    pub fn new(buffer_len: usize, sample_rate: f32) -> Self {
        let buffer_len = buffer_len.max(2);
        let fft = FftPlanner::<f32>::new().plan_fft_forward(buffer_len);

        let denom = (buffer_len - 1) as f32;
        let window = (0..buffer_len)
            .map(|i| 0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / denom).cos()))
            .collect();

        let bin_width = sample_rate as f64 / buffer_len as f64;
        let half = buffer_len / 2;
        let first = ((MIN_FREQ / bin_width).floor() as usize).min(half);
        let last = ((MAX_FREQ / bin_width).ceil() as usize).clamp(first, half);
        let bins = first..last;

        let spectrum = bins
            .clone()
            .map(|i| (i as f64 * bin_width, FLOOR_DB))
            .collect();

        Self {
            window,
            fft,
            scratch: vec![Complex::new(0.0, 0.0); buffer_len],
            bins,
            bin_width,
            spectrum,
        }
    }

    /// Recompute from a full window of samples; other lengths are ignored
    pub fn update(&mut self, buffer: &[f32]) {
        if buffer.len() != self.window.len() {
            return;
        }

        for ((slot, &sample), &w) in self.scratch.iter_mut().zip(buffer).zip(&self.window) {
            *slot = Complex::new(sample * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        for (point, index) in self.spectrum.iter_mut().zip(self.bins.clone()) {
            let bin = self.scratch[index];
            let power = (bin.re * bin.re + bin.im * bin.im).max(1e-12);
            *point = (
                index as f64 * self.bin_width,
                (10.0 * (power as f64).log10()).max(FLOOR_DB),
            );
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }
}

pub fn render_spectrum<G: ToneGenerator>(
    frame: &mut Frame,
    area: Rect,
    spectrum: &[(f64, f64)],
    manager: &ToneLayerManager<G>,
) {
    let block = Block::default()
        .title(" Spectrum ")
        .borders(Borders::ALL);

    let max_db = spectrum
        .iter()
        .map(|(_, db)| *db)
        .fold(FLOOR_DB, f64::max)
        .max(0.0)
        + 10.0;

    let markers: Vec<(f64, f64)> = manager
        .catalog()
        .layers()
        .iter()
        .filter(|l| manager.is_layer_enabled(&l.id).unwrap_or(false))
        .map(|l| (l.frequency as f64, max_db))
        .collect();

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(spectrum),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&markers),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([MIN_FREQ, MAX_FREQ])
                .labels(vec!["100", "450", "800"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, max_db])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
