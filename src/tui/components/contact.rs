//! Workshop contact card.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::content::ContactInfo;
use crate::tui::theme::*;

use super::{section_block, title_span};

/// Label/value pairs shown in the contact card.
pub fn contact_lines(contacts: &ContactInfo) -> Vec<(&'static str, String)> {
    vec![
        ("Morada", contacts.address.clone()),
        ("Horário", contacts.hours.clone()),
        ("Telefone", contacts.local_phone().to_string()),
        ("Email", contacts.email.clone()),
        ("WhatsApp", format!("wa.me/{}", contacts.whatsapp)),
        ("Mapa", contacts.map_url.clone()),
    ]
}

pub fn render_contact(frame: &mut Frame, area: Rect, app: &App) {
    let block = section_block(Line::from(title_span("CONTACTOS")), false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = contact_lines(&app.contacts)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<9}", label),
                    Style::new().fg(AMBER).add_modifier(Modifier::BOLD),
                ),
                Span::styled(value, Style::new().fg(TEXT_BODY)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
