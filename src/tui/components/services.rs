//! Services grid.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::theme::*;

use super::{section_block, title_span, truncate, wrap_text};

/// Render services in two columns: bold title, then a wrapped description.
pub fn render_services(frame: &mut Frame, area: Rect, app: &App) {
    let block = section_block(Line::from(title_span("SERVIÇOS")), false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.services.is_empty() || inner.height == 0 {
        return;
    }

    let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
        .spacing(2)
        .split(inner);

    let per_column = app.services.len().div_ceil(2);
    for (column, services) in columns.iter().zip(app.services.chunks(per_column)) {
        let width = column.width.saturating_sub(2) as usize;
        let mut lines = vec![];
        for service in services {
            lines.push(Line::from(vec![
                Span::styled("■ ", Style::new().fg(AMBER)),
                Span::styled(
                    truncate(&service.title, width),
                    Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.extend(
                wrap_text(&service.description, width)
                    .into_iter()
                    .take(2)
                    .map(|l| Line::styled(format!("  {}", l), Style::new().fg(TEXT_DIM))),
            );
        }
        frame.render_widget(Paragraph::new(lines), *column);
    }
}
