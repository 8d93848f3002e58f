//! Document page visibility tracking
//!
//! Follows which page of a paginated document is visible inside its scroll
//! container, and keeps the page render width in step with the container.
//! The observer set is rebuilt whenever the page count or the container
//! width changes, since pages re-render at a new size and old observations
//! would describe elements that no longer exist.

use crate::config::PaginationConfig;
use crate::geometry::Bounds;
use crate::observer::{IntersectionEntry, IntersectionObserver, ObserverOptions};

/// Load state of the paginated document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DocumentStatus {
    #[default]
    Loading,
    Loaded,
    /// Terminal: never retried automatically
    Failed { reason: String },
}

/// Snapshot read by the UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationState {
    /// 1-based, within `[1, total_pages]` once `total_pages > 0`
    pub current_page: usize,
    /// Zero until the document loads
    pub total_pages: usize,
    /// Container content width (client width minus padding)
    pub container_width: f64,
}

impl PaginationState {
    /// `(current, total)` once the page count is known
    pub fn ratio(&self) -> Option<(usize, usize)> {
        (self.total_pages > 0).then_some((self.current_page, self.total_pages))
    }
}

/// Vertical stack of equally sized pages, in container content coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageStack {
    pub page_width: f64,
    pub page_height: f64,
    pub gap: f64,
}

impl PageStack {
    /// Stack for pages rendered at `page_width` with the given height/width ratio
    pub fn new(page_width: f64, aspect_ratio: f64, gap: f64) -> Self {
        Self {
            page_width,
            page_height: (page_width * aspect_ratio).max(0.0),
            gap,
        }
    }

    /// Bounds of a 1-based page relative to the top of the content
    pub fn page_bounds(&self, page: usize) -> Bounds {
        let index = page.saturating_sub(1) as f64;
        Bounds::new(
            0.0,
            index * (self.page_height + self.gap),
            self.page_width,
            self.page_height,
        )
    }

    pub fn content_height(&self, total_pages: usize) -> f64 {
        if total_pages == 0 {
            return 0.0;
        }
        total_pages as f64 * self.page_height + (total_pages - 1) as f64 * self.gap
    }

    /// First page whose bounds reach `offset`
    pub fn page_at(&self, offset: f64, total_pages: usize) -> usize {
        let stride = self.page_height + self.gap;
        if total_pages == 0 || stride <= 0.0 {
            return 1;
        }
        let page = (offset.max(0.0) / stride).floor() as usize + 1;
        page.min(total_pages)
    }
}

/// Tracks the visible page of a paginated document
#[derive(Debug)]
pub struct PageVisibilityTracker {
    config: PaginationConfig,
    state: PaginationState,
    status: DocumentStatus,
    observer: Option<IntersectionObserver<usize>>,
    /// `(total_pages, container_width)` the observer was built for
    observed_layout: Option<(usize, f64)>,
    registration_cycles: usize,
}

impl PageVisibilityTracker {
    pub fn new(config: PaginationConfig) -> Self {
        let state = PaginationState {
            current_page: 1,
            total_pages: 0,
            container_width: config.initial_width,
        };
        Self {
            config,
            state,
            status: DocumentStatus::Loading,
            observer: None,
            observed_layout: None,
            registration_cycles: 0,
        }
    }

    pub fn get_state(&self) -> PaginationState {
        self.state
    }

    pub fn status(&self) -> &DocumentStatus {
        &self.status
    }

    /// Number of observer (re)registrations so far
    pub fn registration_cycles(&self) -> usize {
        self.registration_cycles
    }

    /// Width every page renders at
    pub fn render_width(&self) -> f64 {
        self.state.container_width.min(self.config.max_page_width)
    }

    pub fn on_document_loaded(&mut self, total_pages: usize) {
        tracing::info!(pages = total_pages, "Document loaded");
        self.status = DocumentStatus::Loaded;
        self.state.total_pages = total_pages;
        self.state.current_page = self.state.current_page.clamp(1, total_pages.max(1));
    }

    pub fn on_document_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(reason = %reason, "Document failed to load");
        self.status = DocumentStatus::Failed { reason };
        self.state.total_pages = 0;
        self.state.current_page = 1;
        self.detach();
    }

    /// Recompute the content width from the container's measured client width
    ///
    /// Returns whether the width changed.
    pub fn on_container_resize(&mut self, client_width: f64) -> bool {
        let width = (client_width - self.config.padding).max(0.0);
        if width == self.state.container_width {
            return false;
        }
        tracing::debug!(width, "Pagination container resized");
        self.state.container_width = width;
        true
    }

    /// Observe the rendered pages inside the container
    ///
    /// `pages[i]` holds the viewport bounds of page `i + 1`. The observer set is
    /// rebuilt first if the page count or container width changed since the last
    /// call. Returns the current page once the document has pages.
    pub fn attach(
        &mut self,
        container: Bounds,
        pages: &[Bounds],
        total_pages: usize,
    ) -> Option<usize> {
        self.sync_registration(total_pages);

        let entries = match self.observer.as_mut() {
            Some(observer) => observer.compute(container, |page| pages.get(page - 1).copied()),
            None => Vec::new(),
        };
        self.apply(&entries);
        self.state.ratio().map(|(current, _)| current)
    }

    /// Apply intersection reports in arrival order, last one wins
    pub fn apply(&mut self, entries: &[IntersectionEntry<usize>]) {
        let total = self.state.total_pages;
        if total == 0 {
            return;
        }
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            self.state.current_page = entry.target.clamp(1, total);
        }
    }

    /// Drop all page observations
    pub fn detach(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
        self.observed_layout = None;
    }

    /// Status bar text. Never renders a ratio before the page count is known.
    pub fn status_label(&self) -> String {
        match (&self.status, self.state.ratio()) {
            (DocumentStatus::Failed { .. }, _) => "Failed to load document".to_string(),
            (_, Some((current, total))) => format!("Page {} of {}", current, total),
            (_, None) => "Page -- of --".to_string(),
        }
    }

    fn sync_registration(&mut self, total_pages: usize) {
        if matches!(self.status, DocumentStatus::Failed { .. }) {
            self.detach();
            return;
        }

        if total_pages != self.state.total_pages {
            self.state.total_pages = total_pages;
            self.state.current_page = self.state.current_page.clamp(1, total_pages.max(1));
        }

        if total_pages == 0 {
            self.detach();
            return;
        }

        let layout = (total_pages, self.state.container_width);
        if self.observed_layout == Some(layout) {
            return;
        }

        self.detach();
        let mut observer = IntersectionObserver::new(ObserverOptions {
            threshold: self.config.visibility_threshold,
            ..Default::default()
        });
        for page in 1..=total_pages {
            observer.observe(page);
        }
        self.observer = Some(observer);
        self.observed_layout = Some(layout);
        self.registration_cycles += 1;
        tracing::debug!(
            pages = total_pages,
            width = layout.1,
            cycle = self.registration_cycles,
            "Registered page observers"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> PageVisibilityTracker {
        PageVisibilityTracker::new(PaginationConfig::default())
    }

    /// Container 0..1000 tall; pages 1000 tall with a 32 gap, scrolled by `offset`
    fn pages(total: usize, offset: f64) -> Vec<Bounds> {
        let stack = PageStack::new(800.0, 1.25, 32.0);
        (1..=total)
            .map(|p| {
                let b = stack.page_bounds(p);
                Bounds::new(b.x, b.y - offset, b.width, b.height)
            })
            .collect()
    }

    fn container() -> Bounds {
        Bounds::new(0.0, 0.0, 800.0, 1000.0)
    }

    #[test]
    fn test_placeholder_before_load() {
        let t = tracker();
        assert_eq!(t.get_state().total_pages, 0);
        assert_eq!(t.get_state().ratio(), None);
        assert_eq!(t.status_label(), "Page -- of --");
        assert!(!t.status_label().contains("of 0"));
    }

    #[test]
    fn test_tracks_visible_page() {
        let mut t = tracker();
        t.on_document_loaded(3);

        assert_eq!(t.attach(container(), &pages(3, 0.0), 3), Some(1));
        assert_eq!(t.status_label(), "Page 1 of 3");

        // Page 2 spans 1032..2032; at offset 1032 it fills the container
        assert_eq!(t.attach(container(), &pages(3, 1032.0), 3), Some(2));
        assert_eq!(t.attach(container(), &pages(3, 2064.0), 3), Some(3));
        assert_eq!(t.status_label(), "Page 3 of 3");
    }

    #[test]
    fn test_half_visible_threshold() {
        let mut t = tracker();
        t.on_document_loaded(2);
        t.attach(container(), &pages(2, 0.0), 2);

        // Page 2 is 1000 tall and shows 1000 - (1032 - 400) = 368 -> 36.8%
        assert_eq!(t.attach(container(), &pages(2, 400.0), 2), Some(1));
        // 1000 - (1032 - 600) = 568 -> 56.8%
        assert_eq!(t.attach(container(), &pages(2, 600.0), 2), Some(2));
    }

    #[test]
    fn test_current_page_stays_in_range() {
        let mut t = tracker();
        t.on_document_loaded(2);
        t.apply(&[IntersectionEntry::new(9, true, 1.0)]);
        assert_eq!(t.get_state().current_page, 2);

        t.apply(&[IntersectionEntry::new(0, true, 1.0)]);
        assert_eq!(t.get_state().current_page, 1);

        // Shrinking the document clamps the current page
        t.apply(&[IntersectionEntry::new(2, true, 1.0)]);
        t.attach(container(), &pages(1, 0.0), 1);
        assert_eq!(t.get_state().current_page, 1);
    }

    #[test]
    fn test_resize_recomputes_width_and_reregisters_once() {
        let mut t = tracker();
        t.on_document_loaded(3);
        t.attach(container(), &pages(3, 0.0), 3);
        assert_eq!(t.registration_cycles(), 1);

        assert!(t.on_container_resize(600.0));
        assert_eq!(t.get_state().container_width, 552.0);
        assert_eq!(t.render_width(), 552.0);

        t.attach(container(), &pages(3, 0.0), 3);
        t.attach(container(), &pages(3, 0.0), 3);
        assert_eq!(t.registration_cycles(), 2);

        // Wider than the cap renders at the cap
        t.on_container_resize(2000.0);
        assert_eq!(t.render_width(), 800.0);
        t.attach(container(), &pages(3, 0.0), 3);
        assert_eq!(t.registration_cycles(), 3);

        // Same width again is not a change
        assert!(!t.on_container_resize(2000.0));
        t.attach(container(), &pages(3, 0.0), 3);
        assert_eq!(t.registration_cycles(), 3);
    }

    #[test]
    fn test_failure_is_terminal() {
        let mut t = tracker();
        t.on_document_failed("unreadable");

        assert_eq!(
            t.status(),
            &DocumentStatus::Failed {
                reason: "unreadable".into()
            }
        );
        assert_eq!(t.attach(container(), &pages(2, 0.0), 2), None);
        assert_eq!(t.registration_cycles(), 0);
        assert_eq!(t.status_label(), "Failed to load document");
    }

    #[test]
    fn test_page_stack_geometry() {
        let stack = PageStack::new(100.0, 1.5, 4.0);
        assert_eq!(stack.page_height, 150.0);
        assert_eq!(stack.page_bounds(2).y, 154.0);
        assert_eq!(stack.content_height(3), 458.0);
        assert_eq!(stack.page_at(160.0, 3), 2);
        assert_eq!(stack.page_at(10_000.0, 3), 3);
    }
}
