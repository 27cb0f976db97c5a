//! Decorative texture strip for the alternate visual mode.
//!
//! Scatters short colored runs across its area, redrawn fresh every frame.
//! Purely cosmetic: nothing here reads back into the engine.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SCATTER_COLORS: [Color; 4] = [Color::Cyan, Color::Magenta, Color::Yellow, Color::Green];

/// Fraction of cells lit per frame.
const DENSITY: f64 = 0.12;

pub fn render_scatter(frame: &mut Frame, area: Rect, rng: &mut fastrand::Rng, active: bool) {
    if !active || area.height == 0 || area.width == 0 {
        return;
    }

    let mut lines = Vec::with_capacity(area.height as usize);
    for _ in 0..area.height {
        let mut spans = Vec::new();
        for _ in 0..area.width {
            if rng.f64() < DENSITY {
                let color = SCATTER_COLORS[rng.usize(..SCATTER_COLORS.len())];
                spans.push(Span::styled("▪", Style::default().fg(color)));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
