//! Event handling module for keyboard, mouse, and focus events.
//!
//! Handlers translate crossterm events into `Action`s; `App::apply` is the only
//! place that turns an action into a state change.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
