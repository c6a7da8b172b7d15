use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::components::{
    render_before_after, render_contact, render_footer, render_gallery, render_header,
    render_help_popup, render_hero, render_services, render_stats, render_testimonials,
};
use super::interaction::InteractionRegistry;
use super::theme::*;
use crate::app::{App, Focus};

/// Draw the whole page, registering hit regions into `registry`.
pub fn render(frame: &mut Frame, app: &App, registry: &mut InteractionRegistry, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::new().bg(BACKGROUND)), area);

    // Main vertical layout: brand, hero, carousels, comparisons, stats, services, footer, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(1),  // Brand
        Constraint::Length(5),  // Hero
        Constraint::Min(10),    // Gallery | testimonials
        Constraint::Length(9),  // Before/after
        Constraint::Length(4),  // Stats
        Constraint::Length(8),  // Services | contact
        Constraint::Length(1),  // Footer
        Constraint::Length(1),  // Hotkeys
    ])
    .split(area);

    render_header(frame, main_layout[0], app);
    render_hero(frame, main_layout[1], app, now, registry);

    let carousels = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_layout[2]);
    render_gallery(frame, carousels[0], app, now, registry);
    render_testimonials(frame, carousels[1], app, now, registry);

    render_before_after(frame, main_layout[3], app, registry);
    render_stats(frame, main_layout[4], app, now, registry);

    let footer = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_layout[5]);
    render_services(frame, footer[0], app);
    render_contact(frame, footer[1], app);

    render_footer(frame, main_layout[6], app);
    render_hotkeys(frame, main_layout[7], app);

    if app.show_help {
        render_help_popup(frame, area, app, registry);
    }
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::new().fg(TEXT_WHITE));
    let text = |t: &'static str| Span::styled(t, Style::new().fg(TEXT_DIM));

    let mut spans = vec![Span::raw(" "), key("[Tab]"), text(" focus • ")];
    match app.focus {
        Focus::Comparison(_) => {
            spans.extend([key("[h/l]"), text(" divider • "), key("[r]"), text("eset • ")]);
        }
        Focus::Gallery | Focus::Testimonials => {
            spans.extend([key("[h/l]"), text(" slide • "), key("[1-9]"), text(" jump • ")]);
        }
    }
    spans.extend([
        key("[p]"),
        text(" autoplay • "),
        key("[?]"),
        text(" help • "),
        key("[q]"),
        text("uit"),
    ]);
    spans.push(Span::styled(
        format!("   {}", app.focus.label()),
        Style::new().fg(AMBER),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::SiteContent;
    use crate::events::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App, now: Instant) -> (Terminal<TestBackend>, InteractionRegistry) {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut registry = InteractionRegistry::new();
        terminal
            .draw(|f| render(f, app, &mut registry, now))
            .unwrap();
        (terminal, registry)
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_full_page() {
        let now = Instant::now();
        let app = App::new(SiteContent::builtin(), &Config::default(), now).unwrap();
        let (terminal, registry) = draw(&app, now);

        let text = screen_text(&terminal);
        assert!(text.contains("GARAGE"));
        assert!(text.contains("LOGBOOK #101"));
        assert!(text.contains("Preservando a história automotiva"));
        assert!(text.contains("01 / "));
        assert!(registry.stats_visible());
        for card in 0..app.comparisons.len() {
            assert!(registry.track(card).is_some());
        }
    }

    #[test]
    fn test_help_popup_captures_clicks() {
        let now = Instant::now();
        let mut app = App::new(SiteContent::builtin(), &Config::default(), now).unwrap();
        app.show_help = true;
        let (terminal, registry) = draw(&app, now);

        assert!(screen_text(&terminal).contains("Keyboard Shortcuts"));
        assert_eq!(registry.handle_click(60, 20), Action::CloseHelp);
    }

    #[test]
    fn test_render_tiny_terminal() {
        let now = Instant::now();
        let app = App::new(SiteContent::builtin(), &Config::default(), now).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        let mut registry = InteractionRegistry::new();
        terminal
            .draw(|f| render(f, &app, &mut registry, now))
            .unwrap();
    }
}
