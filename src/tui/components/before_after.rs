//! Before/after comparison cards with a draggable divider.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

use super::{truncate, wrap_text};

/// Rows of the comparison track
const TRACK_HEIGHT: u16 = 3;

/// One row of a track: "before" cells, the divider, then "after" cells.
///
/// `split` is the column of the divider, clamped into the track.
pub fn split_spans(width: u16, split: u16, dragging: bool, handle_row: bool) -> Vec<Span<'static>> {
    if width == 0 {
        return vec![];
    }
    let divider = split.min(width - 1) as usize;
    let after = width as usize - divider - 1;

    let (glyph, color) = match (handle_row, dragging) {
        (true, true) => ("◆", AMBER),
        (true, false) => ("◆", TEXT_WHITE),
        (false, _) => ("┃", TEXT_WHITE),
    };

    [
        Span::styled("▒".repeat(divider), Style::new().fg(TEXT_DIM)),
        Span::styled(glyph, Style::new().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled("▓".repeat(after), Style::new().fg(AMBER_DARK)),
    ]
    .into_iter()
    .filter(|span| !span.content.is_empty())
    .collect()
}

/// Render every comparison card side by side.
pub fn render_before_after(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    registry: &mut InteractionRegistry,
) {
    if app.comparisons.is_empty() || area.height < TRACK_HEIGHT + 2 {
        return;
    }

    let cards = Layout::horizontal(
        app.comparisons
            .iter()
            .map(|_| Constraint::Fill(1))
            .collect::<Vec<_>>(),
    )
    .split(area);

    for (card, (comparison, &card_area)) in app.comparisons.iter().zip(cards.iter()).enumerate() {
        let dragging = comparison.slider.is_dragging();
        let focused = app.focus == Focus::Comparison(card);
        let border = if focused || dragging { AMBER } else { BORDER };

        let title_width = card_area.width.saturating_sub(10) as usize;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(border))
            .title(Span::styled(
                format!(" {} ", truncate(&comparison.project.title, title_width)),
                Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
            ))
            .title_top(
                Line::from(Span::styled(
                    format!(" {:.0}% ", comparison.slider.position()),
                    Style::new().fg(AMBER),
                ))
                .alignment(Alignment::Right),
            );
        let inner = block.inner(card_area);
        frame.render_widget(block, card_area);

        if inner.height < TRACK_HEIGHT + 1 || inner.width < 4 {
            continue;
        }

        let rows = Layout::vertical([
            Constraint::Length(TRACK_HEIGHT),
            Constraint::Length(1), // Labels
            Constraint::Min(0),    // Description
        ])
        .split(inner);

        let track = rows[0];
        let split = comparison.slider.split_column(track.width);
        let lines: Vec<Line> = (0..track.height)
            .map(|row| Line::from(split_spans(track.width, split, dragging, row == track.height / 2)))
            .collect();
        frame.render_widget(Paragraph::new(lines), track);
        registry.register_track(card, track.into());

        let project = &comparison.project;
        frame.render_widget(
            Paragraph::new(Span::styled(
                project.before_label.clone(),
                Style::new().fg(TEXT_DIM).add_modifier(Modifier::BOLD),
            )),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                project.after_label.clone(),
                Style::new().fg(AMBER).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
            rows[1],
        );

        let description: Vec<Line> = wrap_text(&project.description, rows[2].width as usize)
            .into_iter()
            .take(2)
            .map(|l| Line::styled(l, Style::new().fg(TEXT_BODY)))
            .collect();
        frame.render_widget(Paragraph::new(description), rows[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(spans: &[Span]) -> Vec<usize> {
        spans.iter().map(|s| s.content.chars().count()).collect()
    }

    #[test]
    fn test_split_spans_middle() {
        let spans = split_spans(10, 5, false, false);
        assert_eq!(widths(&spans), vec![5, 1, 4]);
        assert_eq!(spans[1].content, "┃");
    }

    #[test]
    fn test_split_spans_edges_skip_empty() {
        assert_eq!(widths(&split_spans(10, 0, false, false)), vec![1, 9]);
        assert_eq!(widths(&split_spans(10, 10, false, false)), vec![9, 1]);
        assert!(split_spans(0, 0, false, false).is_empty());
    }

    #[test]
    fn test_split_spans_handle_highlights_while_dragging() {
        let idle = split_spans(10, 5, false, true);
        let dragging = split_spans(10, 5, true, true);
        assert_eq!(idle[1].content, "◆");
        assert_eq!(idle[1].style.fg, Some(TEXT_WHITE));
        assert_eq!(dragging[1].style.fg, Some(AMBER));
    }
}
