//! Transport bar widget - shows play state, the sonified city and audio stats

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use city_tones::{manager::ToneLayerManager, tone::ToneGenerator};

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    /// Compute audio stats from a buffer
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// Render the transport bar
pub fn render_transport<G: ToneGenerator>(
    frame: &mut Frame,
    area: Rect,
    manager: &ToneLayerManager<G>,
    sample_rate: f32,
    audio_stats: &AudioStats,
) {
    let block = Block::default()
        .title(" Sound of the City ")
        .borders(Borders::ALL);

    let mut spans = Vec::new();

    // The play/pause control only exists once a city is chosen
    match manager.selected_city() {
        Some(city) => {
            let playing = manager.is_playing();
            let (symbol, label) = if playing { ("⏸", "Pause") } else { ("▶", "Play") };
            spans.push(Span::styled(
                format!(" {} {}  ", symbol, label),
                Style::default().fg(if playing { Color::Green } else { Color::Yellow }),
            ));
            spans.push(Span::raw("Now sonifying: "));
            spans.push(Span::styled(
                format!("{}, {}  ", city.name, city.country),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        None => spans.push(Span::styled(
            " No city selected  ",
            Style::default().fg(Color::DarkGray),
        )),
    }

    spans.push(Span::styled(
        format!("{} tones  ", manager.active_tone_count()),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::styled(
        format!("{:.1}kHz  ", sample_rate / 1000.0),
        Style::default().fg(Color::DarkGray),
    ));
    spans.push(Span::styled(
        format!("Peak: {:.2}  RMS: {:.2}", audio_stats.peak, audio_stats.rms),
        Style::default().fg(Color::Magenta),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
