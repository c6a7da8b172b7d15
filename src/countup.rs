//! Animated count-up for the stats section.
//!
//! Counts from zero to a target with an ease-out-quart curve, starting the
//! first time the section becomes visible.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut counter = CountUp::new(150, Duration::from_millis(2000));
//!
//! // When the stats row is first rendered:
//! counter.start(Instant::now());
//!
//! // On every frame:
//! let shown = counter.value(Instant::now());
//! ```

use std::time::{Duration, Instant};

/// Ease-out-quart: fast start, slow settle. `progress` is clamped to 0..=1.
pub fn ease_out_quart(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Count-up animation towards a fixed target.
#[derive(Debug, Clone)]
pub struct CountUp {
    /// Final value shown once the animation settles
    target: u32,
    /// Time to reach the target
    duration: Duration,
    /// Start of the animation, None until first visible
    started: Option<Instant>,
}

impl CountUp {
    pub fn new(target: u32, duration: Duration) -> Self {
        Self {
            target,
            duration,
            started: None,
        }
    }

    /// Start counting. Later calls keep the original start time.
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    fn progress(&self, now: Instant) -> f32 {
        match self.started {
            None => 0.0,
            Some(_) if self.duration.is_zero() => 1.0,
            Some(start) => {
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
        }
    }

    /// Value to display at `now`, rounded down like a ticking odometer.
    pub fn value(&self, now: Instant) -> u32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.target;
        }
        (ease_out_quart(progress) * self.target as f32).floor() as u32
    }

    /// Whether the counter still needs frames.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started.is_some() && self.progress(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_quart_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(2.0), 1.0);
        assert_eq!(ease_out_quart(-1.0), 0.0);
        // 1 - 0.5^4
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_not_started_shows_zero() {
        let counter = CountUp::new(150, Duration::from_millis(2000));
        let now = Instant::now();
        assert_eq!(counter.value(now + Duration::from_secs(60)), 0);
        assert!(!counter.is_animating(now));
    }

    #[test]
    fn test_counts_to_target() {
        let start = Instant::now();
        let mut counter = CountUp::new(500, Duration::from_millis(2000));
        counter.start(start);

        assert_eq!(counter.value(start), 0);
        // Halfway: floor(0.9375 * 500)
        assert_eq!(counter.value(start + Duration::from_millis(1000)), 468);
        assert_eq!(counter.value(start + Duration::from_millis(2000)), 500);
        assert_eq!(counter.value(start + Duration::from_millis(9000)), 500);
        assert!(!counter.is_animating(start + Duration::from_millis(2000)));
    }

    #[test]
    fn test_start_is_idempotent() {
        let start = Instant::now();
        let mut counter = CountUp::new(100, Duration::from_millis(1000));
        counter.start(start);
        counter.start(start + Duration::from_millis(900));
        assert_eq!(counter.value(start + Duration::from_millis(1000)), 100);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let start = Instant::now();
        let mut counter = CountUp::new(25, Duration::ZERO);
        counter.start(start);
        assert_eq!(counter.value(start), 25);
    }
}
