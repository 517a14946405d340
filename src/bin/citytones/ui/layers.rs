//! Sound layer toggles

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use city_tones::{manager::ToneLayerManager, tone::ToneGenerator};

pub fn render_layers<G: ToneGenerator>(
    frame: &mut Frame,
    area: Rect,
    manager: &ToneLayerManager<G>,
) {
    let block = Block::default()
        .title(" Sound Layers ")
        .borders(Borders::ALL);

    let lines: Vec<Line> = manager
        .catalog()
        .layers()
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let enabled = manager.is_layer_enabled(&layer.id).unwrap_or(false);
            let (r, g, b) = layer.color.rgb();
            let color = Color::Rgb(r, g, b);

            let label_style = if enabled {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let sounding = if manager.is_layer_sounding(&layer.id) {
                "♪"
            } else {
                " "
            };

            Line::from(vec![
                Span::styled(format!(" [{}] ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(if enabled { "[x] " } else { "[ ] " }),
                Span::styled(format!("{:<16}", layer.label), label_style),
                Span::styled(
                    format!("{:>4.0} Hz ", layer.frequency),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled("■ ", Style::default().fg(color)),
                Span::raw(sounding),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
