//! Central event handler that routes terminal events to keyboard and mouse handling.

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

/// Central event handler for the application.
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event (keyboard, mouse, focus) and return an action.
    pub fn handle_event(app: &App, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, *key),
            Event::Mouse(mouse) => handle_mouse_event(app, *mouse),
            // Same as the pointer leaving every element
            Event::FocusLost => Action::PointerLeft,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::SiteContent;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};
    use std::time::Instant;

    fn app() -> App {
        App::new(SiteContent::builtin(), &Config::default(), Instant::now()).unwrap()
    }

    #[test]
    fn test_focus_lost_releases_pointer() {
        assert_eq!(
            EventHandler::handle_event(&app(), &Event::FocusLost),
            Action::PointerLeft
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(
            EventHandler::handle_event(&app(), &Event::Key(release)),
            Action::None
        );
        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            EventHandler::handle_event(&app(), &Event::Key(press)),
            Action::Quit
        );
    }

    #[test]
    fn test_resize_ignored() {
        assert_eq!(
            EventHandler::handle_event(&app(), &Event::Resize(80, 24)),
            Action::None
        );
    }
}
