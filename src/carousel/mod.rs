//! Carousel and slider interaction model.
//!
//! - `selector` - cyclic index with direction and pause flag
//! - `auto_advance` - re-armable deadline driving automatic rotation
//! - `rotator` - `Carousel<T>`, the selector and timer owned together by a view
//! - `slider` - drag-driven percentage position for the before/after split
//!
//! Everything here is synchronous and takes the current `Instant` explicitly;
//! the event loop decides when to wake up from `Carousel::next_deadline`.

mod auto_advance;
mod rotator;
mod selector;
mod slider;

pub use rotator::{Carousel, CarouselConfig, Step, Transition};
pub use selector::Direction;
pub use slider::{DragSlider, TrackBounds};
