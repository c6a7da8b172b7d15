//! Terminal rendering of the workshop site.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;
