//! Scroll State - Scroll position and smooth scroll animation
//!
//! Offsets are in terminal rows but kept fractional so centered scroll targets
//! land where the navigator computed them; rendering rounds to whole rows.

/// Fraction of the remaining distance covered per animation tick
const EASE_FACTOR: f64 = 0.25;

/// Distance at which an animation snaps to its target
const SNAP_DISTANCE: f64 = 0.5;

/// Manages scroll state for one scrollable area
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (0 = top, max = bottom)
    pub offset: f64,
    /// Maximum scroll offset for bounds checking
    pub max_scroll: f64,
    /// Destination of a smooth scroll in flight
    target: Option<f64>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            max_scroll: 0.0,
            target: None,
        }
    }

    // =========================================================================
    // Core Scroll Operations
    // =========================================================================

    /// Scroll up by the given amount. Interrupts any smooth scroll.
    pub fn scroll_up(&mut self, amount: f64) {
        self.target = None;
        self.offset = (self.offset - amount).max(0.0);
    }

    /// Scroll down by the given amount. Interrupts any smooth scroll.
    pub fn scroll_down(&mut self, amount: f64) {
        self.target = None;
        self.offset = (self.offset + amount).min(self.max_scroll);
    }

    /// Jump straight to an offset
    pub fn jump_to(&mut self, offset: f64) {
        self.target = None;
        self.offset = self.clamp(offset);
    }

    /// Start (or redirect) a smooth scroll toward `offset`
    pub fn animate_to(&mut self, offset: f64) {
        self.target = Some(self.clamp(offset));
    }

    pub fn scroll_to_top(&mut self) {
        self.jump_to(0.0);
    }

    pub fn scroll_to_end(&mut self) {
        self.jump_to(self.max_scroll);
    }

    /// Advance the smooth scroll by one frame. Returns true while animating.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let remaining = target - self.offset;
        if remaining.abs() <= SNAP_DISTANCE {
            self.offset = target;
            self.target = None;
            return false;
        }
        self.offset += remaining * EASE_FACTOR;
        true
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// First visible row
    pub fn row(&self) -> usize {
        self.offset.round().max(0.0) as usize
    }

    // =========================================================================
    // Max Scroll Updates
    // =========================================================================

    /// Update the maximum scroll value based on content and viewport height
    pub fn update_max_scroll(&mut self, content_height: f64, viewport_height: f64) {
        self.max_scroll = (content_height - viewport_height).max(0.0);

        // Clamp current offset and any target to the valid range
        if self.offset > self.max_scroll {
            self.offset = self.max_scroll;
        }
        if let Some(target) = self.target {
            self.target = Some(self.clamp(target));
        }
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
