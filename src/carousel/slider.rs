//! Pointer-driven split position for the before/after comparison.

/// Initial split, centred on the track.
pub const DEFAULT_POSITION: f32 = 50.0;

/// Horizontal extent of the interactive track, in the host's coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    pub left: f32,
    pub width: f32,
}

impl TrackBounds {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Bounds of a track spanning whole terminal cells.
    pub fn from_columns(x: u16, width: u16) -> Self {
        Self::new(f32::from(x), f32::from(width))
    }

    fn is_usable(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}

/// Percentage position (0-100) that only moves during a drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSlider {
    position: f32,
    dragging: bool,
}

impl Default for DragSlider {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            dragging: false,
        }
    }
}

impl DragSlider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// End the gesture. Called for release, pointer leave and focus loss alike.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Recompute the position from an absolute pointer coordinate.
    ///
    /// Ignored outside a drag, and for degenerate bounds or coordinates.
    /// Returns true if the position was recomputed.
    pub fn move_to(&mut self, client_x: f32, bounds: TrackBounds) -> bool {
        if !self.dragging || !bounds.is_usable() || !client_x.is_finite() {
            return false;
        }
        let raw = (client_x - bounds.left) * 100.0 / bounds.width;
        self.position = raw.clamp(0.0, 100.0);
        true
    }

    /// Shift the position by `delta` percentage points (keyboard control).
    pub fn nudge(&mut self, delta: f32) {
        if delta.is_finite() {
            self.position = (self.position + delta).clamp(0.0, 100.0);
        }
    }

    pub fn reset(&mut self) {
        self.position = DEFAULT_POSITION;
        self.dragging = false;
    }

    /// Number of columns of a `width`-wide track left of the divider.
    pub fn split_column(&self, width: u16) -> u16 {
        let split = (self.position / 100.0 * f32::from(width)).round();
        (split as u16).min(width)
    }
}
