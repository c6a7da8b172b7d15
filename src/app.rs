use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::carousel::{Carousel, DragSlider, Step, TrackBounds};
use crate::config::Config;
use crate::content::{BeforeAfterProject, ContactInfo, Service, SiteContent, Stat, Testimonial, WorkItem};
use crate::countup::CountUp;
use crate::error::Result;
use crate::events::Action;
use crate::log;
use crate::tui::interaction::InteractionRegistry;

/// Redraw cadence while something is animating
pub const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Longest the event loop sleeps when nothing is scheduled
pub const IDLE_WAKE: Duration = Duration::from_secs(1);

/// Screen-cell rectangle used for hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }

    /// Horizontal extent as slider track geometry.
    pub fn track_bounds(&self) -> TrackBounds {
        TrackBounds::from_columns(self.x, self.width)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// The auto-advancing views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselId {
    Hero,
    Gallery,
    Testimonials,
}

/// Section receiving keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Gallery,
    Testimonials,
    Comparison(usize),
}

impl Focus {
    pub fn label(self) -> String {
        match self {
            Focus::Gallery => "Projetos".to_string(),
            Focus::Testimonials => "Testemunhos".to_string(),
            Focus::Comparison(card) => format!("Antes & Depois {}", card + 1),
        }
    }

    /// Carousel driven by h/l and digits while this section is focused.
    pub fn carousel(self) -> Option<CarouselId> {
        match self {
            Focus::Gallery => Some(CarouselId::Gallery),
            Focus::Testimonials => Some(CarouselId::Testimonials),
            Focus::Comparison(_) => None,
        }
    }
}

/// One before/after card and its split slider.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub project: BeforeAfterProject,
    pub slider: DragSlider,
}

/// A stats entry and its count-up animation.
#[derive(Debug, Clone)]
pub struct StatCounter {
    pub stat: Stat,
    pub counter: CountUp,
}

pub struct App {
    pub brand: String,
    pub slogan: String,
    pub tagline: String,
    pub services: Vec<Service>,
    pub contacts: ContactInfo,

    pub hero: Carousel<String>,
    pub gallery: Carousel<WorkItem>,
    pub testimonials: Carousel<Testimonial>,
    pub comparisons: Vec<Comparison>,
    pub stats: Vec<StatCounter>,

    pub focus: Focus,
    pub show_help: bool,
    pub should_quit: bool,
    /// Carousel under the mouse pointer
    pub hovered: Option<CarouselId>,
    /// Hit-test regions from the last render
    pub interactions: InteractionRegistry,
    pub nudge_step: f32,
}

impl App {
    /// Mount every view from validated content.
    pub fn new(content: SiteContent, config: &Config, now: Instant) -> Result<Self> {
        let hero = Carousel::mount("hero", content.hero_backgrounds, config.hero(), now)?;
        let gallery = Carousel::mount("gallery", content.work_items, config.gallery(), now)?;
        let testimonials = Carousel::mount(
            "testimonials",
            content.testimonials,
            config.testimonials(),
            now,
        )?;

        let comparisons = content
            .before_after
            .into_iter()
            .map(|project| Comparison {
                project,
                slider: DragSlider::new(),
            })
            .collect();

        let stats = content
            .stats
            .into_iter()
            .map(|stat| StatCounter {
                counter: CountUp::new(stat.value, Duration::from_millis(stat.duration_ms)),
                stat,
            })
            .collect();

        Ok(Self {
            brand: content.brand,
            slogan: content.slogan,
            tagline: content.tagline,
            services: content.services,
            contacts: content.contacts,
            hero,
            gallery,
            testimonials,
            comparisons,
            stats,
            focus: Focus::default(),
            show_help: false,
            should_quit: false,
            hovered: None,
            interactions: InteractionRegistry::new(),
            nudge_step: config.slider.nudge_step,
        })
    }

    /// Apply a user intent.
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::OpenHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::FocusNext => self.focus = self.cycle_focus(1),
            Action::FocusPrev => self.focus = self.cycle_focus(-1),
            Action::Navigate(id, step) => self.navigate(id, step, now),
            Action::Hover(target) => self.set_hovered(target, now),
            Action::BeginDrag {
                card,
                client_x,
                bounds,
            } => {
                self.end_drags();
                if let Some(comparison) = self.comparisons.get_mut(card) {
                    comparison.slider.begin_drag();
                    comparison.slider.move_to(client_x, bounds);
                    self.focus = Focus::Comparison(card);
                    log::log_event(&format!("drag started on card {}", card));
                }
            }
            Action::DragTo {
                card,
                client_x,
                bounds,
            } => {
                if let Some(comparison) = self.comparisons.get_mut(card) {
                    comparison.slider.move_to(client_x, bounds);
                }
            }
            Action::EndDrag => self.end_drags(),
            Action::PointerLeft => {
                self.end_drags();
                self.set_hovered(None, now);
            }
            Action::NudgeSlider { card, delta } => {
                if let Some(comparison) = self.comparisons.get_mut(card) {
                    comparison.slider.nudge(delta);
                }
            }
            Action::ResetSlider(card) => {
                if let Some(comparison) = self.comparisons.get_mut(card) {
                    comparison.slider.reset();
                }
            }
            Action::ToggleAutoplay => {
                let autoplay = !self.autoplay();
                self.hero.set_autoplay(autoplay, now);
                self.gallery.set_autoplay(autoplay, now);
                self.testimonials.set_autoplay(autoplay, now);
                log::log_event(&format!("autoplay {}", if autoplay { "on" } else { "off" }));
            }
        }
    }

    fn navigate(&mut self, id: CarouselId, step: Step, now: Instant) {
        let result = match id {
            CarouselId::Hero => self.hero.step(step, now),
            CarouselId::Gallery => self.gallery.step(step, now),
            CarouselId::Testimonials => self.testimonials.step(step, now),
        };
        if let Err(e) = result {
            log::log_warning(&format!("{:?} navigation ignored: {}", id, e));
        }
    }

    fn set_hovered(&mut self, target: Option<CarouselId>, now: Instant) {
        if self.hovered == target {
            return;
        }
        self.hovered = target;
        self.hero.set_hovered(target == Some(CarouselId::Hero), now);
        self.gallery.set_hovered(target == Some(CarouselId::Gallery), now);
        self.testimonials
            .set_hovered(target == Some(CarouselId::Testimonials), now);
    }

    fn end_drags(&mut self) {
        for (card, comparison) in self.comparisons.iter_mut().enumerate() {
            if comparison.slider.is_dragging() {
                comparison.slider.end_drag();
                log::log_event(&format!(
                    "drag ended on card {} at {:.1}%",
                    card,
                    comparison.slider.position()
                ));
            }
        }
    }

    fn cycle_focus(&self, delta: isize) -> Focus {
        let mut order = vec![Focus::Gallery, Focus::Testimonials];
        order.extend((0..self.comparisons.len()).map(Focus::Comparison));

        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let len = order.len() as isize;
        order[(current + delta).rem_euclid(len) as usize]
    }

    pub fn autoplay(&self) -> bool {
        self.gallery.autoplay()
    }

    /// Card whose slider is mid-gesture.
    pub fn active_drag(&self) -> Option<usize> {
        self.comparisons.iter().position(|c| c.slider.is_dragging())
    }

    /// Apply due auto-advance ticks. Returns true if anything rotated.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for (name, advanced) in [
            ("hero", self.hero.poll(now)),
            ("gallery", self.gallery.poll(now)),
            ("testimonials", self.testimonials.poll(now)),
        ] {
            if advanced {
                log::log_event(&format!("{} auto-advanced", name));
                changed = true;
            }
        }
        changed
    }

    /// Whether frames are needed for transitions or counters.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.hero.transition(now).is_some()
            || self.gallery.transition(now).is_some()
            || self.testimonials.transition(now).is_some()
            || self.stats.iter().any(|s| s.counter.is_animating(now))
    }

    /// When the event loop should wake up next.
    pub fn next_wake(&self, now: Instant) -> Instant {
        let cap = if self.is_animating(now) {
            now + FRAME_INTERVAL
        } else {
            now + IDLE_WAKE
        };
        [
            self.hero.next_deadline(),
            self.gallery.next_deadline(),
            self.testimonials.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .fold(cap, Instant::min)
    }

    /// Take the hit regions of a fresh render and start counters that became visible.
    pub fn after_render(&mut self, interactions: InteractionRegistry, now: Instant) {
        if interactions.stats_visible() && !self.stats.iter().all(|s| s.counter.is_started()) {
            log::log_event("stats visible, starting counters");
            for entry in &mut self.stats {
                entry.counter.start(now);
            }
        }
        self.interactions = interactions;
    }

    /// Tear down every view. Nothing mutates after this.
    pub fn unmount(&mut self) {
        self.end_drags();
        self.hero.unmount();
        self.gallery.unmount();
        self.testimonials.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(now: Instant) -> App {
        App::new(SiteContent::builtin(), &Config::default(), now).unwrap()
    }

    #[test]
    fn test_click_region_contains() {
        let region = ClickRegion::new(10, 10, 20, 10);
        assert!(region.contains(10, 10));
        assert!(region.contains(29, 19));
        assert!(!region.contains(30, 20));
        assert!(!region.contains(9, 10));
    }

    #[test]
    fn test_new_mounts_builtin_content() {
        let now = Instant::now();
        let app = app(now);
        assert_eq!(app.gallery.len(), 4);
        assert_eq!(app.comparisons.len(), 2);
        assert_eq!(app.focus, Focus::Gallery);
    }

    #[test]
    fn test_new_fails_on_empty_gallery() {
        let mut content = SiteContent::builtin();
        content.work_items.clear();
        assert!(App::new(content, &Config::default(), Instant::now()).is_err());
    }

    #[test]
    fn test_focus_cycles_through_cards() {
        let now = Instant::now();
        let mut app = app(now);
        let mut seen = vec![];
        for _ in 0..4 {
            app.apply(Action::FocusNext, now);
            seen.push(app.focus);
        }
        assert_eq!(
            seen,
            vec![
                Focus::Testimonials,
                Focus::Comparison(0),
                Focus::Comparison(1),
                Focus::Gallery
            ]
        );
        app.apply(Action::FocusPrev, now);
        assert_eq!(app.focus, Focus::Comparison(1));
    }

    #[test]
    fn test_hover_pauses_only_target() {
        let now = Instant::now();
        let mut app = app(now);
        app.apply(Action::Hover(Some(CarouselId::Gallery)), now);
        assert!(app.gallery.is_paused());
        assert!(!app.testimonials.is_paused());

        app.apply(Action::Hover(Some(CarouselId::Testimonials)), now);
        assert!(!app.gallery.is_paused());
        assert!(app.testimonials.is_paused());

        app.apply(Action::PointerLeft, now);
        assert!(!app.testimonials.is_paused());
    }

    #[test]
    fn test_tick_rotates_due_carousels() {
        let now = Instant::now();
        let mut app = app(now);
        assert!(!app.tick(now + Duration::from_millis(4000)));
        assert!(app.tick(now + Duration::from_millis(5000)));
        assert_eq!(app.hero.current_index(), 1);
        assert_eq!(app.gallery.current_index(), 0);
        assert!(app.tick(now + Duration::from_millis(7500)));
        assert_eq!(app.gallery.current_index(), 1);
    }

    #[test]
    fn test_hovered_gallery_does_not_rotate() {
        let now = Instant::now();
        let mut app = app(now);
        app.apply(Action::Hover(Some(CarouselId::Gallery)), now);
        app.tick(now + Duration::from_secs(60));
        assert_eq!(app.gallery.current_index(), 0);
    }

    #[test]
    fn test_invalid_jump_is_ignored() {
        let now = Instant::now();
        let mut app = app(now);
        app.apply(Action::Navigate(CarouselId::Gallery, Step::JumpTo(2)), now);
        app.apply(Action::Navigate(CarouselId::Gallery, Step::JumpTo(40)), now);
        assert_eq!(app.gallery.current_index(), 2);
    }

    #[test]
    fn test_drag_lifecycle() {
        let now = Instant::now();
        let mut app = app(now);
        let bounds = TrackBounds::new(10.0, 40.0);

        app.apply(
            Action::BeginDrag {
                card: 1,
                client_x: 20.0,
                bounds,
            },
            now,
        );
        assert_eq!(app.active_drag(), Some(1));
        assert_eq!(app.focus, Focus::Comparison(1));
        assert_eq!(app.comparisons[1].slider.position(), 25.0);

        app.apply(
            Action::DragTo {
                card: 1,
                client_x: 40.0,
                bounds,
            },
            now,
        );
        assert_eq!(app.comparisons[1].slider.position(), 75.0);

        app.apply(Action::EndDrag, now);
        assert_eq!(app.active_drag(), None);
        app.apply(
            Action::DragTo {
                card: 1,
                client_x: 10.0,
                bounds,
            },
            now,
        );
        assert_eq!(app.comparisons[1].slider.position(), 75.0);
        assert_eq!(app.comparisons[0].slider.position(), 50.0);
    }

    #[test]
    fn test_toggle_autoplay() {
        let now = Instant::now();
        let mut app = app(now);
        app.apply(Action::ToggleAutoplay, now);
        assert!(!app.autoplay());
        assert!(!app.tick(now + Duration::from_secs(60)));
        app.apply(Action::ToggleAutoplay, now);
        assert!(app.autoplay());
    }

    #[test]
    fn test_next_wake_prefers_earliest_deadline() {
        let now = Instant::now();
        let app = app(now);
        // Nothing animating and the hero deadline is further than the idle cap
        assert_eq!(app.next_wake(now), now + IDLE_WAKE);
        let later = now + Duration::from_millis(4500);
        assert_eq!(app.next_wake(later), now + Duration::from_millis(5000));
    }

    #[test]
    fn test_next_wake_uses_frame_interval_while_animating() {
        let now = Instant::now();
        let mut app = app(now);
        app.apply(Action::Navigate(CarouselId::Gallery, Step::Next), now);
        assert_eq!(app.next_wake(now), now + FRAME_INTERVAL);
    }

    #[test]
    fn test_after_render_starts_visible_counters() {
        let now = Instant::now();
        let mut app = app(now);
        app.after_render(InteractionRegistry::new(), now);
        assert!(!app.stats[0].counter.is_started());

        let mut registry = InteractionRegistry::new();
        registry.mark_stats_visible();
        app.after_render(registry, now);
        assert!(app.stats.iter().all(|s| s.counter.is_started()));
    }

    #[test]
    fn test_unmount_stops_rotation() {
        let now = Instant::now();
        let mut app = app(now);
        app.unmount();
        assert!(!app.tick(now + Duration::from_secs(600)));
        assert_eq!(app.next_wake(now), now + IDLE_WAKE);
        assert_eq!(app.hero.current_index(), 0);
    }
}
