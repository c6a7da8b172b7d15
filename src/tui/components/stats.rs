//! Count-up statistics row.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

/// Render one column per stat. Drawing the row marks it as seen.
pub fn render_stats(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    now: Instant,
    registry: &mut InteractionRegistry,
) {
    if area.is_empty() || app.stats.is_empty() {
        return;
    }
    registry.mark_stats_visible();

    let columns = Layout::horizontal(
        app.stats
            .iter()
            .map(|_| Constraint::Fill(1))
            .collect::<Vec<_>>(),
    )
    .split(area);

    for (entry, &column) in app.stats.iter().zip(columns.iter()) {
        let value = Line::from(vec![
            Span::styled(
                entry.counter.value(now).to_string(),
                Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(entry.stat.suffix.clone(), Style::new().fg(AMBER)),
        ]);
        let label = Line::styled(entry.stat.label.to_uppercase(), Style::new().fg(TEXT_DIM));
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
            .flex(ratatui::layout::Flex::Center)
            .split(column);
        frame.render_widget(Paragraph::new(value).alignment(Alignment::Center), rows[0]);
        frame.render_widget(Paragraph::new(label).alignment(Alignment::Center), rows[1]);
    }
}
