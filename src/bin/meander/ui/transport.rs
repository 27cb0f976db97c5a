//! Transport bar: key, step, tempo, and percussion indicators.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use meander::clock::Transport;

use super::state::EngineUpdate;

pub fn render_transport(
    frame: &mut Frame,
    area: Rect,
    update: Option<&EngineUpdate>,
    transport: Transport,
    kick_flash: bool,
    hat_flash: bool,
) {
    let (key, step, toggles) = match update {
        Some(update) => (
            update.snapshot.key.as_str(),
            update.snapshot.step,
            update.snapshot.toggles,
        ),
        None => ("-", 0, Default::default()),
    };

    let indicator = |label: &'static str, enabled: bool, flash: bool| -> Vec<Span<'static>> {
        let style = if flash {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if enabled {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        vec![
            Span::styled(if enabled { "● " } else { "○ " }, style),
            Span::styled(label, style),
            Span::raw("  "),
        ]
    };

    let mut spans = vec![
        Span::styled(
            format!(" key {} ", key),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("│ step {} │ {:.0} BPM │ ", step, transport.bpm())),
    ];
    spans.extend(indicator("kick", toggles.kick, kick_flash));
    spans.extend(indicator("hat", toggles.hat, hat_flash));
    spans.extend(indicator("decor", toggles.decor, false));

    let widget = Paragraph::new(Line::from(spans))
        .block(Block::default().title(" meander ").borders(Borders::ALL));
    frame.render_widget(widget, area);
}
