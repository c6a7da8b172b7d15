//! Cyclic index selection with direction tracking.

use crate::error::CarouselError;

/// Most recent navigation direction.
///
/// Only used to pick the slide-in animation; never affects which item is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

impl Direction {
    /// Column offset sign for a slide-in: forward content enters from the right.
    pub fn sign(self) -> i32 {
        match self {
            Direction::None => 0,
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Index into a fixed-size ordered list.
///
/// The selector never sees the items themselves, only their count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotatingSelector {
    len: usize,
    current: usize,
    direction: Direction,
    paused: bool,
}

impl RotatingSelector {
    /// Create a selector over `len` items, starting at index 0.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            len,
            current: 0,
            direction: Direction::None,
            paused: false,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance one item, wrapping from last to first.
    pub fn next(&mut self) {
        self.direction = Direction::Forward;
        self.current = (self.current + 1) % self.len;
    }

    /// Step back one item, wrapping from first to last.
    pub fn prev(&mut self) {
        self.direction = Direction::Backward;
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Select an explicit index.
    ///
    /// Out-of-range targets are rejected and leave the selector untouched.
    /// Jumping to the current index counts as backward.
    pub fn jump_to(&mut self, target: usize) -> Result<(), CarouselError> {
        if target >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index: target,
                len: self.len,
            });
        }
        self.direction = if target > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = target;
        Ok(())
    }

    /// Set the pause flag. Returns true if it changed.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        let changed = self.paused != paused;
        self.paused = paused;
        changed
    }
}
