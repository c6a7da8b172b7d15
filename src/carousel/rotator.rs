//! Auto-advancing carousel shared by the hero, gallery and testimonials views.

use std::time::{Duration, Instant};

use crate::error::CarouselError;
use crate::log;

use super::auto_advance::AutoAdvance;
use super::selector::{Direction, RotatingSelector};

/// How long a slide-in transition lasts after the active item changes.
pub const TRANSITION: Duration = Duration::from_millis(300);

/// Per-view carousel settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub interval: Duration,
    /// Hovering the view suspends auto-advance
    pub pause_on_hover: bool,
    pub autoplay: bool,
}

impl CarouselConfig {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pause_on_hover: true,
            autoplay: true,
        }
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }
}

/// A manual navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
    JumpTo(usize),
}

/// In-flight slide animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub direction: Direction,
    /// 0.0 when the item just changed, 1.0 when settled
    pub progress: f32,
}

/// A mounted carousel over a fixed list of items.
///
/// Owns its selector and its timer. Navigation goes through `next`, `prev`,
/// `jump_to` and timer polls; nothing else touches the index.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    name: &'static str,
    items: Vec<T>,
    selector: RotatingSelector,
    timer: AutoAdvance,
    config: CarouselConfig,
    mounted: bool,
    changed_at: Option<Instant>,
}

impl<T> Carousel<T> {
    /// Mount a carousel and arm its timer from `now` when autoplay is on.
    pub fn mount(
        name: &'static str,
        items: Vec<T>,
        config: CarouselConfig,
        now: Instant,
    ) -> Result<Self, CarouselError> {
        let selector = RotatingSelector::new(items.len())?;
        let mut timer = AutoAdvance::new(config.interval);
        if config.autoplay {
            timer.arm(now);
        }
        log::log_event(&format!(
            "{} mounted: {} items, interval {}ms, autoplay {}",
            name,
            items.len(),
            config.interval.as_millis(),
            config.autoplay
        ));
        Ok(Self {
            name,
            items,
            selector,
            timer,
            config,
            mounted: true,
            changed_at: None,
        })
    }

    pub fn len(&self) -> usize {
        self.selector.len()
    }

    pub fn current_index(&self) -> usize {
        self.selector.current_index()
    }

    pub fn current(&self) -> &T {
        &self.items[self.selector.current_index()]
    }

    pub fn direction(&self) -> Direction {
        self.selector.direction()
    }

    pub fn is_paused(&self) -> bool {
        self.selector.is_paused()
    }

    pub fn autoplay(&self) -> bool {
        self.config.autoplay
    }

    /// When the event loop must wake up for this carousel.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn next(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        self.selector.next();
        self.changed_at = Some(now);
    }

    pub fn prev(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        self.selector.prev();
        self.changed_at = Some(now);
    }

    pub fn jump_to(&mut self, index: usize, now: Instant) -> Result<(), CarouselError> {
        if !self.mounted {
            return Ok(());
        }
        self.selector.jump_to(index)?;
        self.changed_at = Some(now);
        Ok(())
    }

    /// Apply a manual navigation step.
    pub fn step(&mut self, step: Step, now: Instant) -> Result<(), CarouselError> {
        match step {
            Step::Next => self.next(now),
            Step::Prev => self.prev(now),
            Step::JumpTo(index) => self.jump_to(index, now)?,
        }
        Ok(())
    }

    /// Apply the hover pause condition.
    ///
    /// Pausing disarms the timer; un-pausing arms a full fresh interval.
    /// Returns true if the pause state changed.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) -> bool {
        if !self.mounted || !self.config.pause_on_hover {
            return false;
        }
        if !self.selector.set_paused(hovered) {
            return false;
        }
        if hovered {
            self.timer.disarm();
        } else if self.config.autoplay {
            self.timer.arm(now);
        }
        log::log_event(&format!(
            "{} {}",
            self.name,
            if hovered { "paused" } else { "resumed" }
        ));
        true
    }

    /// Turn auto-advance on or off. Turning it on arms a full interval.
    pub fn set_autoplay(&mut self, autoplay: bool, now: Instant) {
        if !self.mounted || self.config.autoplay == autoplay {
            return;
        }
        self.config.autoplay = autoplay;
        if autoplay && !self.selector.is_paused() {
            self.timer.arm(now);
        } else {
            self.timer.disarm();
        }
    }

    /// Apply an auto-advance tick if one is due. Returns true if the item changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.mounted || self.selector.is_paused() || !self.config.autoplay {
            return false;
        }
        if !self.timer.fire_if_due(now) {
            return false;
        }
        self.selector.next();
        self.changed_at = Some(now);
        true
    }

    /// Slide animation state, if one is still running at `now`.
    pub fn transition(&self, now: Instant) -> Option<Transition> {
        let changed_at = self.changed_at?;
        let elapsed = now.saturating_duration_since(changed_at);
        if elapsed >= TRANSITION {
            return None;
        }
        Some(Transition {
            direction: self.direction(),
            progress: elapsed.as_secs_f32() / TRANSITION.as_secs_f32(),
        })
    }

    /// Tear down: release the timer. No later poll or navigation has any effect.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.timer.disarm();
        log::log_event(&format!("{} unmounted", self.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(7000);

    fn gallery(now: Instant) -> Carousel<&'static str> {
        Carousel::mount(
            "gallery",
            vec!["v8", "mustang", "chassis", "workshop"],
            CarouselConfig::new(INTERVAL),
            now,
        )
        .unwrap()
    }

    #[test]
    fn test_mount_exposes_items() {
        let start = Instant::now();
        let mut carousel = gallery(start);
        assert_eq!(carousel.len(), 4);
        assert_eq!(*carousel.current(), "v8");
        assert_eq!(carousel.direction(), Direction::None);

        carousel.prev(start);
        assert_eq!(*carousel.current(), "workshop");
        assert_eq!(carousel.transition(start).map(|t| t.direction), Some(Direction::Backward));
    }

    #[test]
    fn test_mount_rejects_empty() {
        let result = Carousel::<u8>::mount(
            "empty",
            vec![],
            CarouselConfig::new(INTERVAL),
            Instant::now(),
        );
        assert!(matches!(result, Err(CarouselError::Empty)));
    }

    #[test]
    fn test_auto_advance_uses_next() {
        let start = Instant::now();
        let mut carousel = gallery(start);

        assert!(!carousel.poll(start + INTERVAL / 2));
        assert!(carousel.poll(start + INTERVAL));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.direction(), Direction::Forward);
        assert_eq!(*carousel.current(), "mustang");
    }

    #[test]
    fn test_auto_advance_wraps() {
        let start = Instant::now();
        let mut carousel = gallery(start);
        for tick in 1..=4 {
            assert!(carousel.poll(start + INTERVAL * tick));
        }
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_manual_navigation_keeps_timer_phase() {
        let start = Instant::now();
        let mut carousel = gallery(start);

        carousel.next(start + Duration::from_millis(6900));
        assert_eq!(carousel.next_deadline(), Some(start + INTERVAL));
        assert!(carousel.poll(start + INTERVAL));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_paused_never_advances() {
        let start = Instant::now();
        let mut carousel = gallery(start);

        assert!(carousel.set_hovered(true, start + Duration::from_millis(100)));
        assert_eq!(carousel.next_deadline(), None);
        for tick in 1..20 {
            assert!(!carousel.poll(start + INTERVAL * tick));
        }
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_resume_rearms_full_interval() {
        let start = Instant::now();
        let mut carousel = gallery(start);

        // Pause with 6s of the 7s interval already elapsed
        carousel.set_hovered(true, start + Duration::from_millis(6000));
        let resumed = start + Duration::from_millis(10_000);
        carousel.set_hovered(false, resumed);

        assert!(!carousel.poll(resumed));
        assert!(!carousel.poll(resumed + Duration::from_millis(1000)));
        assert!(!carousel.poll(resumed + INTERVAL - Duration::from_millis(1)));
        assert!(carousel.poll(resumed + INTERVAL));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_repeated_hover_is_not_a_transition() {
        let start = Instant::now();
        let mut carousel = gallery(start);

        assert!(!carousel.set_hovered(false, start + Duration::from_millis(3000)));
        assert_eq!(carousel.next_deadline(), Some(start + INTERVAL));
    }

    #[test]
    fn test_hover_ignored_without_pause_on_hover() {
        let start = Instant::now();
        let config = CarouselConfig::new(Duration::from_millis(5000)).with_pause_on_hover(false);
        let mut hero = Carousel::mount("hero", vec![1, 2, 3], config, start).unwrap();

        assert!(!hero.set_hovered(true, start));
        assert!(!hero.is_paused());
        assert!(hero.poll(start + Duration::from_millis(5000)));
    }

    #[test]
    fn test_autoplay_toggle() {
        let start = Instant::now();
        let mut carousel = gallery(start);

        carousel.set_autoplay(false, start);
        assert!(!carousel.poll(start + INTERVAL * 3));

        let on = start + INTERVAL * 3;
        carousel.set_autoplay(true, on);
        assert_eq!(carousel.next_deadline(), Some(on + INTERVAL));
        assert!(carousel.poll(on + INTERVAL));
    }

    #[test]
    fn test_autoplay_on_while_paused_stays_disarmed() {
        let start = Instant::now();
        let config = CarouselConfig::new(INTERVAL).with_autoplay(false);
        let mut carousel = Carousel::mount("testimonials", vec!['a', 'b'], config, start).unwrap();
        assert_eq!(carousel.next_deadline(), None);

        carousel.set_hovered(true, start);
        carousel.set_autoplay(true, start);
        assert_eq!(carousel.next_deadline(), None);

        carousel.set_hovered(false, start + INTERVAL);
        assert_eq!(carousel.next_deadline(), Some(start + INTERVAL * 2));
    }

    #[test]
    fn test_no_changes_after_unmount() {
        let start = Instant::now();
        let mut carousel = gallery(start);
        carousel.unmount();

        assert_eq!(carousel.next_deadline(), None);
        for tick in 1..10 {
            assert!(!carousel.poll(start + INTERVAL * tick));
        }
        carousel.next(start);
        carousel.set_hovered(true, start);
        carousel.set_hovered(false, start);
        assert_eq!(carousel.next_deadline(), None);
        assert_eq!(carousel.current_index(), 0);

        // Second teardown is harmless
        carousel.unmount();
    }

    #[test]
    fn test_jump_out_of_range_keeps_item() {
        let start = Instant::now();
        let mut carousel = gallery(start);
        carousel.jump_to(2, start).unwrap();

        assert!(carousel.jump_to(9, start).is_err());
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.direction(), Direction::Forward);
    }

    #[test]
    fn test_step_dispatch() {
        let start = Instant::now();
        let mut carousel = gallery(start);
        carousel.step(Step::Prev, start).unwrap();
        assert_eq!(carousel.current_index(), 3);
        carousel.step(Step::Next, start).unwrap();
        assert_eq!(carousel.current_index(), 0);
        carousel.step(Step::JumpTo(2), start).unwrap();
        assert_eq!(carousel.current_index(), 2);
        assert!(carousel.step(Step::JumpTo(4), start).is_err());
    }

    #[test]
    fn test_transition_progress() {
        let start = Instant::now();
        let mut carousel = gallery(start);
        assert_eq!(carousel.transition(start), None);

        carousel.prev(start);
        let mid = carousel.transition(start + TRANSITION / 2).unwrap();
        assert_eq!(mid.direction, Direction::Backward);
        assert!((mid.progress - 0.5).abs() < 0.01);
        assert_eq!(carousel.transition(start + TRANSITION), None);
    }
}
