//! Brand line, the rotating hero strip and the footer.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, CarouselId};
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

use super::{register_carousel_area, render_dots, truncate};

/// Brand and tagline at the bottom of the page.
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let brand_width = app.brand.chars().count() + 4;
    let line = Line::from(vec![
        Span::styled(
            format!(" {}  ", app.brand),
            Style::new()
                .fg(BORDER)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
        Span::styled(
            truncate(&app.tagline, (area.width as usize).saturating_sub(brand_width)),
            Style::new().fg(TEXT_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Texture per hero background, cycled by index
const BACKGROUND_PATTERNS: &[&str] = &["░▒", "╱╲", "▚▞", "·:", "═─", "◢◣", "▁▂▃▂"];

/// Render the brand on the left and autoplay state on the right.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let brand = app.brand.strip_prefix("F ").unwrap_or(&app.brand);
    let left = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            "F ",
            Style::new()
                .fg(AMBER_DARK)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
        Span::styled(
            brand.to_string(),
            Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(left), area);

    let autoplay = if app.autoplay() { "▶ auto" } else { "⏸ manual" };
    let right = Line::from(vec![
        Span::styled(autoplay, Style::new().fg(TEXT_DIM)),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), area);
}

/// Background rows for the hero: a repeated pattern, shifted per row.
pub fn hero_texture(index: usize, width: u16, height: u16) -> Vec<String> {
    let pattern: Vec<char> = BACKGROUND_PATTERNS[index % BACKGROUND_PATTERNS.len()]
        .chars()
        .collect();
    (0..height as usize)
        .map(|row| {
            (0..width as usize)
                .map(|col| pattern[(col + row) % pattern.len()])
                .collect()
        })
        .collect()
}

/// Render the hero: textured background, slogan, and background dots.
pub fn render_hero(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    now: Instant,
    registry: &mut InteractionRegistry,
) {
    if area.height == 0 {
        return;
    }
    let hero = &app.hero;
    register_carousel_area(registry, CarouselId::Hero, area);

    // Crossfade: darker texture during the first half of a change
    let fading = hero
        .transition(now)
        .map(|t| t.progress < 0.5)
        .unwrap_or(false);
    let texture_color = if fading { PANEL } else { BORDER };
    let texture: Vec<Line> = hero_texture(hero.current_index(), area.width, area.height)
        .into_iter()
        .map(|row| Line::styled(row, Style::new().fg(texture_color)))
        .collect();
    frame.render_widget(Paragraph::new(texture), area);

    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1), // Slogan
        Constraint::Length(1), // Background name
        Constraint::Fill(1),
        Constraint::Length(1), // Dots
    ])
    .split(area);

    let slogan = Line::from(Span::styled(
        format!("  {}  ", app.slogan.to_uppercase()),
        Style::new()
            .fg(AMBER)
            .bg(BACKGROUND)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(slogan).alignment(Alignment::Center), rows[1]);

    let caption = Line::from(Span::styled(
        format!(" {} ", hero.current()),
        Style::new().fg(TEXT_DIM).bg(BACKGROUND),
    ));
    frame.render_widget(Paragraph::new(caption).alignment(Alignment::Center), rows[2]);

    let dots_width = (hero.len() as u16 * 3 + 2).min(area.width);
    let dots_area = Rect::new(
        rows[4].x + (rows[4].width.saturating_sub(dots_width)) / 2,
        rows[4].y,
        dots_width,
        rows[4].height,
    );
    render_dots(
        frame,
        dots_area,
        CarouselId::Hero,
        hero.len(),
        hero.current_index(),
        registry,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_texture_dimensions() {
        let rows = hero_texture(0, 6, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "░▒░▒░▒");
        // Each row is shifted by one
        assert_eq!(rows[1], "▒░▒░▒░");
    }

    #[test]
    fn test_hero_texture_cycles_patterns() {
        let first = hero_texture(1, 4, 1);
        let wrapped = hero_texture(1 + BACKGROUND_PATTERNS.len(), 4, 1);
        assert_eq!(first, wrapped);
        assert_eq!(first[0], "╱╲╱╲");
    }
}
