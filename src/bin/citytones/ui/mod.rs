//! TUI module for citytones
//!
//! Presentation only: renders the catalogs and the manager's state. Nothing
//! here mutates playback.

mod cities;
mod layers;
pub mod spectrum;
mod transport;
mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use city_tones::{manager::ToneLayerManager, tone::ToneGenerator};

use cities::render_cities;
use layers::render_layers;
use spectrum::render_spectrum;
use transport::{render_transport, AudioStats};
use waveform::render_waveform;

/// Everything one frame needs, borrowed from the app
pub struct View<'a, G: ToneGenerator> {
    pub manager: &'a ToneLayerManager<G>,
    pub cursor: usize,
    pub status: &'a str,
    pub audio: &'a [f32],
    pub spectrum: &'a [(f64, f64)],
    pub sample_rate: f32,
}

pub fn render<G: ToneGenerator>(frame: &mut Frame, view: &View<'_, G>) {
    let area = frame.area();

    // Main layout: transport, catalogs, scopes, status, help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Transport bar
            Constraint::Min(8),     // Cities | layers
            Constraint::Length(10), // Waveform | spectrum
            Constraint::Length(1),  // Status line
            Constraint::Length(1),  // Help bar
        ])
        .split(area);

    let stats = AudioStats::from_buffer(view.audio);
    render_transport(frame, chunks[0], view.manager, view.sample_rate, &stats);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_cities(frame, middle[0], view.manager, view.cursor);
    render_layers(frame, middle[1], view.manager);

    let scopes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_waveform(frame, scopes[0], view.audio);
    render_spectrum(frame, scopes[1], view.spectrum, view.manager);

    let status = Paragraph::new(format!(" {}", view.status))
        .style(Style::default().fg(Color::White));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(
        " [↑/↓] City  [Enter] Select  [Space] Play/Pause  [1-4] Layers  [Q] Quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}
