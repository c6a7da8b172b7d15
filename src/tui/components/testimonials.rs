//! Testimonials carousel with half-star ratings.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
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

/// How one of the five stars is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

/// Break a 0-5 rating into five stars; a fraction of .5 or more shows a half star.
pub fn star_fills(rating: f32) -> [StarFill; 5] {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = rating % 1.0 >= 0.5;
    std::array::from_fn(|i| {
        if i < full {
            StarFill::Full
        } else if i == full && half {
            StarFill::Half
        } else {
            StarFill::Empty
        }
    })
}

fn star_line(rating: f32) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for fill in star_fills(rating) {
        let (glyph, color) = match fill {
            StarFill::Full => ("★", AMBER),
            StarFill::Half => ("★", AMBER_DIM),
            StarFill::Empty => ("☆", BORDER),
        };
        spans.push(Span::styled(glyph, Style::new().fg(color)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(format!("{:.1}", rating), Style::new().fg(TEXT_DIM)));
    Line::from(spans)
}

/// Render the testimonials panel.
pub fn render_testimonials(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    now: Instant,
    registry: &mut InteractionRegistry,
) {
    let carousel = &app.testimonials;

    let mut title = vec![title_span("TESTEMUNHOS")];
    if carousel.is_paused() {
        title.push(Span::styled("⏸ ", Style::new().fg(AMBER)));
    }
    let block = section_block(Line::from(title), app.focus == Focus::Testimonials);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    register_carousel_area(registry, CarouselId::Testimonials, area);

    if inner.height < 5 || inner.width < 12 {
        return;
    }

    let rows = Layout::vertical([
        Constraint::Length(1), // Stars
        Constraint::Length(1),
        Constraint::Min(1),    // Quote
        Constraint::Length(1), // Name
        Constraint::Length(1), // Counter + arrows
        Constraint::Length(1), // Dots
    ])
    .split(inner);

    let testimonial = carousel.current();
    frame.render_widget(Paragraph::new(star_line(testimonial.stars)), rows[0]);

    let body = slide_area(rows[2], carousel.transition(now));
    let quote = format!("“{}”", testimonial.quote);
    let lines: Vec<Line> = wrap_text(&quote, body.width as usize)
        .into_iter()
        .map(|l| {
            Line::styled(
                l,
                Style::new().fg(TEXT_BODY).add_modifier(Modifier::ITALIC),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), body);

    let name = Line::from(vec![
        Span::styled(" ── ", Style::new().fg(AMBER_DARK)),
        Span::styled(
            testimonial.name.to_uppercase(),
            Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(name), rows[3]);

    let counter = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            counter_label(carousel.current_index(), carousel.len()),
            Style::new().fg(AMBER),
        ),
    ]);
    frame.render_widget(Paragraph::new(counter), rows[4]);
    render_arrows(frame, rows[4], CarouselId::Testimonials, registry);

    let dots = Rect::new(rows[5].x + 1, rows[5].y, rows[5].width.saturating_sub(1), 1);
    render_dots(
        frame,
        dots,
        CarouselId::Testimonials,
        carousel.len(),
        carousel.current_index(),
        registry,
    );
}
