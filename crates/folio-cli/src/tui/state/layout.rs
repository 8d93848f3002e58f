//! Layout State - Centralized layout area tracking
//!
//! Owns all cached layout rectangles used for hit testing and rendering.

use ratatui::layout::Rect;

/// Cached layout areas for hit testing and rendering
///
/// Updated each frame before rendering, used for mouse event handling.
#[derive(Debug, Default)]
pub struct LayoutState {
    /// Whole frame
    pub frame_area: Option<Rect>,
    /// Fixed navbar overlaying the top of the viewport
    pub navbar_area: Option<Rect>,
    /// Scrolling document viewport (navbar overlays its top rows)
    pub viewport_area: Option<Rect>,
    /// Paginated document container on the resume route
    pub pages_area: Option<Rect>,
    /// Status bar area
    pub status_bar_area: Option<Rect>,
    /// Clickable navbar links, by index into the link list
    pub nav_link_areas: Vec<(usize, Rect)>,
}

impl LayoutState {
    /// Create a new empty layout state
    pub fn new() -> Self {
        Self::default()
    }

    /// Navbar link under a screen position
    pub fn nav_link_at(&self, column: u16, row: u16) -> Option<usize> {
        self.nav_link_areas
            .iter()
            .find(|(_, area)| area.contains((column, row).into()))
            .map(|(index, _)| *index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_hit_testing() {
        let mut layout = LayoutState::new();
        layout.nav_link_areas = vec![(0, Rect::new(10, 1, 4, 1)), (1, Rect::new(16, 1, 8, 1))];

        assert_eq!(layout.nav_link_at(11, 1), Some(0));
        assert_eq!(layout.nav_link_at(20, 1), Some(1));
        assert_eq!(layout.nav_link_at(14, 1), None);
        assert_eq!(layout.nav_link_at(11, 2), None);
    }
}
