//! Waveform oscilloscope widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Samples shown; about five periods of the lowest layer at 48 kHz
const SCOPE_LEN: usize = 1024;

/// Four tones at the default gain stay inside this range
const SCOPE_RANGE: f64 = 0.5;

/// Render the waveform oscilloscope
pub fn render_waveform(frame: &mut Frame, area: Rect, audio_buffer: &[f32]) {
    let block = Block::default()
        .title(" Waveform ")
        .borders(Borders::ALL);

    let window = &audio_buffer[audio_buffer.len().saturating_sub(SCOPE_LEN)..];
    let data: Vec<(f64, f64)> = window
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64, (sample as f64).clamp(-SCOPE_RANGE, SCOPE_RANGE)))
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, window.len().max(1) as f64])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-SCOPE_RANGE, SCOPE_RANGE])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
