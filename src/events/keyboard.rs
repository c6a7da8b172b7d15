//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};
use crate::carousel::Step;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if app.show_help {
        return handle_help_mode(key);
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Char('p') => Action::ToggleAutoplay,

        KeyCode::Char('h') | KeyCode::Left => step_or_nudge(app, Step::Prev, -app.nudge_step),
        KeyCode::Char('l') | KeyCode::Right => step_or_nudge(app, Step::Next, app.nudge_step),

        // Jump by number (1-based on screen)
        KeyCode::Char(c @ '1'..='9') => match app.focus.carousel() {
            Some(id) => Action::Navigate(id, Step::JumpTo(c as usize - '1' as usize)),
            None => Action::None,
        },

        KeyCode::Char('r') => match app.focus {
            Focus::Comparison(card) => Action::ResetSlider(card),
            _ => Action::None,
        },

        _ => Action::None,
    }
}

/// Arrow keys rotate the focused carousel or move the focused slider.
fn step_or_nudge(app: &App, step: Step, delta: f32) -> Action {
    match app.focus {
        Focus::Comparison(card) => Action::NudgeSlider { card, delta },
        focus => match focus.carousel() {
            Some(id) => Action::Navigate(id, step),
            None => Action::None,
        },
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => Action::CloseHelp,
        _ => Action::None,
    }
}
