//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by UI components during each render. Pointer motion drives the
//! hover pause; button down/drag/up on a comparison track drives its slider.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Pointer coordinate at the centre of a terminal cell.
fn cell_center(column: u16) -> f32 {
    f32::from(column) + 0.5
}

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;
    let registry = &app.interactions;

    match mouse.kind {
        MouseEventKind::Moved => Action::Hover(registry.hover_target(x, y)),
        MouseEventKind::ScrollUp => registry.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => registry.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) if app.show_help => registry.handle_click(x, y),
        MouseEventKind::Down(MouseButton::Left) => match registry.track_at(x, y) {
            Some((card, bounds)) => Action::BeginDrag {
                card,
                client_x: cell_center(x),
                bounds: bounds.track_bounds(),
            },
            None => registry.handle_click(x, y),
        },
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(card) = app.active_drag() else {
                return Action::None;
            };
            match registry.track(card) {
                Some(bounds) if bounds.contains(x, y) => Action::DragTo {
                    card,
                    client_x: cell_center(x),
                    bounds: bounds.track_bounds(),
                },
                // Leaving the track ends the gesture
                _ => Action::EndDrag,
            }
        }
        MouseEventKind::Up(MouseButton::Left) if app.active_drag().is_some() => Action::EndDrag,
        _ => Action::None,
    }
}
