//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `header` - Brand line, the rotating hero strip and the footer
//! - `gallery` - Work-item carousel with logbook badge and navigation
//! - `testimonials` - Testimonial carousel with star ratings
//! - `before_after` - Drag-to-compare cards
//! - `stats` - Count-up numbers
//! - `services` - Services grid
//! - `contact` - Workshop address, hours and phone
//! - `help_popup` - Help overlay with keybindings

mod before_after;
mod contact;
mod gallery;
mod header;
mod help_popup;
mod services;
mod stats;
mod testimonials;

pub use before_after::render_before_after;
pub use contact::render_contact;
pub use gallery::render_gallery;
pub use header::{render_footer, render_header, render_hero};
pub use help_popup::render_help_popup;
pub use services::render_services;
pub use stats::render_stats;
pub use testimonials::render_testimonials;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{CarouselId, ClickRegion};
use crate::carousel::{Direction, Step, Transition};
use crate::events::Action;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

/// Maximum horizontal shift of sliding content
const SLIDE_COLUMNS: u16 = 3;

/// Wrap text to fit within width, preserving words where possible.
///
/// Words longer than the width are split across lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = vec![];
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();
            while chars.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                lines.push(chars.drain(..width).collect());
            }
            if chars.is_empty() {
                continue;
            }
            if line_len > 0 && line_len + 1 + chars.len() > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line_len += chars.len();
            line.extend(chars);
        }
        lines.push(line);
    }
    lines
}

/// Cut `text` to `width` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Area for sliding content: settled content sits `SLIDE_COLUMNS` in from the
/// left; during a transition it starts offset in the navigation direction.
pub fn slide_area(area: Rect, transition: Option<Transition>) -> Rect {
    let shift = match transition {
        Some(Transition {
            direction,
            progress,
        }) if direction != Direction::None => {
            ((1.0 - progress) * f32::from(SLIDE_COLUMNS)).round() as i32 * direction.sign()
        }
        _ => 0,
    };
    let left = ((SLIDE_COLUMNS as i32 + shift).max(0) as u16).min(area.width);
    let width = area.width.saturating_sub(SLIDE_COLUMNS * 2);
    Rect::new(area.x + left, area.y, width, area.height)
}

/// "01 / 04" style position label.
pub fn counter_label(index: usize, len: usize) -> String {
    format!("{:02} / {:02}", index + 1, len)
}

/// Bordered section with a bold title; amber border while focused.
pub fn section_block(title: Line<'static>, focused: bool) -> Block<'static> {
    let border = if focused { AMBER } else { BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(border))
        .title(title)
}

pub fn title_span(text: &str) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
    )
}

/// Render clickable progress dots for a carousel on a single row.
pub fn render_dots(
    frame: &mut Frame,
    area: Rect,
    carousel: CarouselId,
    len: usize,
    current: usize,
    registry: &mut InteractionRegistry,
) {
    if area.height == 0 {
        return;
    }
    let mut spans = vec![];
    let mut x = area.x;
    for idx in 0..len {
        let (glyph, color) = if idx == current {
            ("━━━━", AMBER_DARK)
        } else {
            ("──", BORDER)
        };
        let width = glyph.chars().count() as u16;
        if x + width > area.right() {
            break;
        }
        registry.register_click(
            "progress_dot",
            ClickRegion::new(x, area.y, width, 1),
            Action::Navigate(carousel, Step::JumpTo(idx)),
        );
        spans.push(Span::styled(glyph, Style::new().fg(color)));
        spans.push(Span::raw(" "));
        x += width + 1;
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render prev/next arrow buttons at the right end of a row.
pub fn render_arrows(
    frame: &mut Frame,
    area: Rect,
    carousel: CarouselId,
    registry: &mut InteractionRegistry,
) {
    if area.width < 8 || area.height == 0 {
        return;
    }
    let prev = Rect::new(area.right() - 8, area.y, 3, 1);
    let next = Rect::new(area.right() - 4, area.y, 3, 1);
    let style = Style::new().fg(TEXT_WHITE).bg(PANEL);

    frame.render_widget(Paragraph::new(Span::styled(" ◀ ", style)), prev);
    frame.render_widget(Paragraph::new(Span::styled(" ▶ ", style)), next);

    registry.register_click(
        "carousel_prev",
        prev.into(),
        Action::Navigate(carousel, Step::Prev),
    );
    registry.register_click(
        "carousel_next",
        next.into(),
        Action::Navigate(carousel, Step::Next),
    );
}

/// Hover pause and wheel navigation over a carousel's whole area.
pub fn register_carousel_area(registry: &mut InteractionRegistry, carousel: CarouselId, area: Rect) {
    registry.register_hover(carousel, area.into());
    registry.register_scroll(
        "carousel_wheel",
        area.into(),
        Action::Navigate(carousel, Step::Prev),
        Action::Navigate(carousel, Step::Next),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("um\ndois", 10), vec!["um", "dois"]);
        assert_eq!(wrap_text("sem largura", 0), vec!["sem largura"]);
    }

    #[test]
    fn test_wrap_text_counts_chars_not_bytes() {
        assert_eq!(wrap_text("Suspensão ação", 9), vec!["Suspensão", "ação"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Chassis", 10), "Chassis");
        assert_eq!(truncate("Chassis & Suspensão", 8), "Chassis…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_counter_label() {
        assert_eq!(counter_label(0, 4), "01 / 04");
        assert_eq!(counter_label(11, 12), "12 / 12");
    }

    #[test]
    fn test_slide_area_settled() {
        let area = Rect::new(10, 2, 40, 5);
        assert_eq!(slide_area(area, None), Rect::new(13, 2, 34, 5));
    }

    #[test]
    fn test_slide_area_enters_from_direction() {
        let area = Rect::new(10, 2, 40, 5);
        let forward = Transition {
            direction: Direction::Forward,
            progress: 0.0,
        };
        let backward = Transition {
            direction: Direction::Backward,
            progress: 0.0,
        };
        assert_eq!(slide_area(area, Some(forward)).x, 16);
        assert_eq!(slide_area(area, Some(backward)).x, 10);
    }

    #[test]
    fn test_slide_area_without_direction_stays_put() {
        let area = Rect::new(10, 2, 40, 5);
        let still = Transition {
            direction: Direction::None,
            progress: 0.0,
        };
        assert_eq!(slide_area(area, Some(still)), slide_area(area, None));
    }

    #[test]
    fn test_slide_area_narrow() {
        let area = Rect::new(0, 0, 4, 1);
        let rect = slide_area(area, None);
        assert_eq!(rect.width, 0);
        assert!(rect.x <= area.right());
    }
}
