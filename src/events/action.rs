//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or tested
//! without a terminal.

use crate::app::CarouselId;
use crate::carousel::{Step, TrackBounds};

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Focus ===
    /// Focus the next section
    FocusNext,
    /// Focus the previous section
    FocusPrev,

    // === Carousels ===
    /// Manual next/prev/jump on a carousel
    Navigate(CarouselId, Step),
    /// Pointer now over this carousel (None = over none of them)
    Hover(Option<CarouselId>),
    /// Turn auto-advance on or off for every carousel
    ToggleAutoplay,

    // === Before/after slider ===
    /// Pointer pressed on a comparison track
    BeginDrag {
        card: usize,
        client_x: f32,
        bounds: TrackBounds,
    },
    /// Pointer moved while pressed
    DragTo {
        card: usize,
        client_x: f32,
        bounds: TrackBounds,
    },
    /// Pointer released or left the track
    EndDrag,
    /// Terminal lost focus: ends drags and hover
    PointerLeft,
    /// Move the split by a number of percentage points
    NudgeSlider { card: usize, delta: f32 },
    /// Re-centre the split
    ResetSlider(usize),

    // === No-op ===
    /// No action (event was not handled)
    None,
}
