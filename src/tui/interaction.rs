//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the matching component. The registry is rebuilt on
//! every frame, so regions always match what is on screen.
//!
//! Three kinds of region exist:
//! - click/scroll regions that map directly to an `Action`
//! - hover regions that pause a carousel while the pointer is over them
//! - slider tracks that start and feed a drag gesture
//!
//! # Example
//!
//! ```ignore
//! // During render:
//! registry.register_click(
//!     "gallery_next",
//!     ClickRegion::new(x, y, 3, 1),
//!     Action::Navigate(CarouselId::Gallery, Step::Next),
//! );
//! registry.register_hover(CarouselId::Gallery, area.into());
//! ```

use crate::app::{CarouselId, ClickRegion};
use crate::events::Action;
use crate::log;

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    pub on_scroll_up: Option<Action>,

    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
    hover: Vec<(CarouselId, ClickRegion)>,
    tracks: Vec<(usize, ClickRegion)>,
    stats_visible: bool,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    pub fn register_scroll(
        &mut self,
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) {
        self.register(InteractiveRegion::scrollable(
            id,
            bounds,
            scroll_up,
            scroll_down,
        ));
    }

    /// Area that pauses `carousel` while hovered
    pub fn register_hover(&mut self, carousel: CarouselId, bounds: ClickRegion) {
        self.hover.push((carousel, bounds));
    }

    /// Drag track of before/after card `card`
    pub fn register_track(&mut self, card: usize, bounds: ClickRegion) {
        self.tracks.push((card, bounds));
    }

    pub fn mark_stats_visible(&mut self) {
        self.stats_visible = true;
    }

    pub fn stats_visible(&self) -> bool {
        self.stats_visible
    }

    /// Carousel under the pointer, if any.
    pub fn hover_target(&self, x: u16, y: u16) -> Option<CarouselId> {
        self.hover
            .iter()
            .find(|(_, bounds)| bounds.contains(x, y))
            .map(|(id, _)| *id)
    }

    /// Slider track under the pointer, if any.
    pub fn track_at(&self, x: u16, y: u16) -> Option<(usize, ClickRegion)> {
        self.tracks
            .iter()
            .find(|(_, bounds)| bounds.contains(x, y))
            .copied()
    }

    pub fn track(&self, card: usize) -> Option<ClickRegion> {
        self.tracks
            .iter()
            .find(|(c, _)| *c == card)
            .map(|(_, bounds)| *bounds)
    }

    /// Highest-priority region containing the point that `pick` accepts.
    fn best_match<'a>(
        &'a self,
        x: u16,
        y: u16,
        pick: impl Fn(&'a InteractiveRegion) -> Option<&'a Action>,
    ) -> Option<(&'static str, Action)> {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .filter_map(|r| pick(r).map(|action| (r.priority, r.id, action)))
            .max_by_key(|(priority, _, _)| *priority)
            .map(|(_, id, action)| (id, action.clone()))
    }

    fn dispatch(&self, kind: &str, hit: Option<(&'static str, Action)>) -> Action {
        match hit {
            Some((id, action)) => {
                log::log_event(&format!("{} on {}: {:?}", kind, id, action));
                action
            }
            None => Action::None,
        }
    }

    /// Action of the highest-priority clickable region containing the point.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.dispatch("click", self.best_match(x, y, |r| r.on_click.as_ref()))
    }

    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.dispatch("scroll up", self.best_match(x, y, |r| r.on_scroll_up.as_ref()))
    }

    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.dispatch("scroll down", self.best_match(x, y, |r| r.on_scroll_down.as_ref()))
    }
}
