//! City list widget

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use city_tones::{manager::ToneLayerManager, tone::ToneGenerator};

pub fn render_cities<G: ToneGenerator>(
    frame: &mut Frame,
    area: Rect,
    manager: &ToneLayerManager<G>,
    cursor: usize,
) {
    let block = Block::default()
        .title(" Select a City ")
        .borders(Borders::ALL);

    let selected = manager.selected_city().map(|c| c.id);

    let lines: Vec<Line> = manager
        .catalog()
        .cities()
        .iter()
        .enumerate()
        .map(|(i, city)| {
            let is_selected = selected == Some(city.id);
            let icon = if is_selected && manager.is_playing() {
                "🔊"
            } else {
                "🔇"
            };

            let mut name_style = Style::default().fg(Color::White);
            if is_selected {
                name_style = name_style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if i == cursor {
                name_style = name_style.add_modifier(Modifier::REVERSED);
            }

            Line::from(vec![
                Span::raw(format!(" {} ", icon)),
                Span::styled(format!("{:<10}", city.name), name_style),
                Span::styled(
                    format!(" {}", city.country),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
