//! Pattern lanes: one row per voice with a live step cursor.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::state::EngineUpdate;

const LANE_COLORS: [Color; 3] = [Color::Cyan, Color::Magenta, Color::Yellow];

pub fn render_lanes(frame: &mut Frame, area: Rect, update: Option<&EngineUpdate>) {
    let block = Block::default().title(" Voices ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(update) = update else {
        let waiting = Paragraph::new("waiting for the first tick...")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(waiting, inner);
        return;
    };

    let voices = &update.snapshot.voices;
    if voices.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = voices.iter().map(|_| Constraint::Length(2)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, voice) in voices.iter().enumerate() {
        let color = LANE_COLORS[index % LANE_COLORS.len()];

        let mut cells: Vec<Span> = vec![Span::styled(
            format!(" {:<5} ", voice.name),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];
        for (slot, &degree) in voice.pattern.iter().enumerate() {
            let style = if slot == voice.step {
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };
            cells.push(Span::styled(format!("{:>3}", degree), style));
            cells.push(Span::raw(" "));
        }

        let frequency = update
            .frequencies
            .get(index)
            .copied()
            .unwrap_or_default();
        let readout = Line::from(Span::styled(
            format!(
                "        {:>6.1} Hz · filter {:.2} · feedback {}%",
                frequency, voice.filter_log, voice.feedback_pct
            ),
            Style::default().fg(Color::DarkGray),
        ));

        let lane = Paragraph::new(vec![Line::from(cells), readout]);
        frame.render_widget(lane, rows[index]);
    }
}
