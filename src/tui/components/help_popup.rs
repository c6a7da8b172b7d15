//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::tui::interaction::{InteractionRegistry, InteractiveRegion};
use crate::tui::theme::*;

/// Keep the popup above every region drawn beneath it.
const POPUP_PRIORITY: i32 = 100;

fn binding(keys: &'static str, what: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<8}", keys), Style::new().fg(TEXT_WHITE)),
        Span::styled(what, Style::new().fg(TEXT_DIM)),
    ])
}

/// Render the help popup with keyboard and mouse shortcuts.
pub fn render_help_popup(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    registry: &mut InteractionRegistry,
) {
    let popup_width = 52u16;
    let popup_height = 24u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::new().fg(TEXT_WHITE).bold(),
        )),
        Line::raw(""),
        Line::styled("Carousels", Style::new().fg(AMBER).bold()),
        binding("Tab", "Focus next section"),
        binding("S-Tab", "Focus previous section"),
        binding("h/←", "Previous slide"),
        binding("l/→", "Next slide"),
        binding("1-9", "Jump to slide"),
        binding("p", "Toggle autoplay"),
        Line::raw(""),
        Line::styled("Antes & Depois", Style::new().fg(AMBER).bold()),
        binding("h/l", "Move the divider"),
        binding("r", "Reset divider to 50%"),
        binding("drag", "Drag the divider with the mouse"),
        Line::raw(""),
        binding("?", "Toggle help"),
        binding("q", "Quit"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Focus   ", Style::new().fg(TEXT_DIM)),
            Span::styled(app.focus.label(), Style::new().fg(AMBER)),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Press ", Style::new().fg(TEXT_DIM)),
            Span::styled("?", Style::new().fg(TEXT_WHITE)),
            Span::styled(" or ", Style::new().fg(TEXT_DIM)),
            Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
            Span::styled(" to close", Style::new().fg(TEXT_DIM)),
        ]),
    ];
    lines.truncate(popup_area.height.saturating_sub(2) as usize);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(AMBER))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);

    registry.register(
        InteractiveRegion::clickable("help_popup", popup_area.into(), Action::CloseHelp)
            .with_priority(POPUP_PRIORITY),
    );
}
