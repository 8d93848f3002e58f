//! Navbar scroll affordances

use crate::config::ProgressConfig;

/// Derives the navbar's scrolled style and progress line from the scroll offset
#[derive(Debug, Clone)]
pub struct ScrollProgress {
    scrolled_threshold: f64,
}

impl ScrollProgress {
    pub fn new(config: &ProgressConfig) -> Self {
        Self {
            scrolled_threshold: config.scrolled_threshold,
        }
    }

    /// Whether the page has scrolled far enough for the solid navbar
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.scrolled_threshold
    }

    /// Fraction of the scrollable distance covered, in `[0, 1]`
    pub fn fraction(&self, scroll_y: f64, content_height: f64, viewport_height: f64) -> f64 {
        let scrollable = content_height - viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (scroll_y / scrollable).clamp(0.0, 1.0)
    }
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self::new(&ProgressConfig::default())
    }
}
