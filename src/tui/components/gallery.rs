//! Gallery carousel: the workshop's logbook of finished jobs.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, CarouselId, Focus};
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

use super::{
    counter_label, register_carousel_area, render_arrows, render_dots, section_block,
    slide_area, title_span, wrap_text,
};

/// Render the gallery panel.
pub fn render_gallery(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    now: Instant,
    registry: &mut InteractionRegistry,
) {
    let gallery = &app.gallery;

    let mut title = vec![
        title_span("PROJETOS"),
        Span::styled("Logbook de Operações ", Style::new().fg(TEXT_DIM)),
    ];
    if gallery.is_paused() {
        title.push(Span::styled("⏸ ", Style::new().fg(AMBER)));
    }
    let block = section_block(Line::from(title), app.focus == Focus::Gallery);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    register_carousel_area(registry, CarouselId::Gallery, area);

    if inner.height < 5 || inner.width < 12 {
        return;
    }

    let rows = Layout::vertical([
        Constraint::Length(1), // Logbook badge
        Constraint::Length(1),
        Constraint::Min(1),    // Title + description
        Constraint::Length(1), // Counter + arrows
        Constraint::Length(1), // Progress dots
    ])
    .split(inner);

    let item = gallery.current();

    let badge = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!(" LOGBOOK #{} ", item.logbook_number()),
            Style::new()
                .fg(Color::Black)
                .bg(AMBER_DARK)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", item.year), Style::new().fg(TEXT_DIM)),
    ]);
    frame.render_widget(Paragraph::new(badge), rows[0]);

    let body = slide_area(rows[2], gallery.transition(now));
    let mut lines = vec![
        Line::styled(
            item.title.to_uppercase(),
            Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];
    lines.extend(
        wrap_text(&item.description, body.width as usize)
            .into_iter()
            .map(|l| Line::styled(l, Style::new().fg(TEXT_BODY))),
    );
    frame.render_widget(Paragraph::new(lines), body);

    let counter = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            counter_label(gallery.current_index(), gallery.len()),
            Style::new().fg(AMBER),
        ),
    ]);
    frame.render_widget(Paragraph::new(counter), rows[3]);
    render_arrows(frame, rows[3], CarouselId::Gallery, registry);

    let dots = Rect::new(rows[4].x + 1, rows[4].y, rows[4].width.saturating_sub(1), 1);
    render_dots(
        frame,
        dots,
        CarouselId::Gallery,
        gallery.len(),
        gallery.current_index(),
        registry,
    );
}
