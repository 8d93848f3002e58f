//! Resume route - paginated document viewer
//!
//! Pages render as equally sized sheets stacked in a scrolling container.
//! The visible page is tracked by the core `PageVisibilityTracker`; this
//! view only supplies geometry and the wrapped page text.

use std::path::PathBuf;

use folio_core::{
    Bounds, DocumentStatus, PageStack, PageVisibilityTracker, PagedDocument, PaginationConfig,
};
use ratatui::layout::Rect;

use super::ScrollState;

/// Page height per column of width. Terminal cells are about twice as tall as
/// they are wide, so a portrait sheet is shorter in rows than in columns.
const PAGE_ASPECT: f64 = 0.65;

/// Columns between the sheet edge and its text
const PAGE_MARGIN: usize = 3;

/// Where the document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Builtin,
    File(PathBuf),
}

impl DocumentSource {
    pub fn label(&self) -> String {
        match self {
            DocumentSource::Builtin => crate::tui::content::SAMPLE_RESUME_NAME.to_string(),
            DocumentSource::File(path) => path.display().to_string(),
        }
    }
}

/// Resume route view state
#[derive(Debug)]
pub struct ResumeView {
    pub scroll: ScrollState,
    pub tracker: PageVisibilityTracker,
    source: DocumentSource,
    document: Option<PagedDocument>,
    gap: f64,
    stack: Option<PageStack>,
    /// Wrapped text per page at the current render width
    page_lines: Vec<Vec<String>>,
    container: Option<Rect>,
}

impl ResumeView {
    pub fn new(config: PaginationConfig, source: DocumentSource) -> Self {
        Self {
            scroll: ScrollState::new(),
            gap: config.page_gap,
            tracker: PageVisibilityTracker::new(config),
            source,
            document: None,
            stack: None,
            page_lines: Vec::new(),
            container: None,
        }
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    pub fn status(&self) -> &DocumentStatus {
        self.tracker.status()
    }

    pub fn document(&self) -> Option<&PagedDocument> {
        self.document.as_ref()
    }

    pub fn on_loaded(&mut self, document: PagedDocument) {
        self.tracker.on_document_loaded(document.page_count());
        self.document = Some(document);
        self.stack = None;
    }

    pub fn on_failed(&mut self, reason: impl Into<String>) {
        self.tracker.on_document_failed(reason);
        self.document = None;
        self.stack = None;
        self.page_lines.clear();
    }

    /// Size pages to the container. Re-wraps when the container width moves
    /// and re-sizes sheets when its height moves.
    pub fn layout(&mut self, container: Rect) {
        let resized = self.tracker.on_container_resize(container.width as f64);
        let reshaped = self.container.map(|c| c.height) != Some(container.height);
        self.container = Some(container);

        let Some(document) = &self.document else {
            return;
        };
        if !resized && !reshaped && self.stack.is_some() {
            return;
        }

        let width = self.tracker.render_width().floor();
        let wrap_width = (width as usize).saturating_sub(PAGE_MARGIN * 2).max(1);
        self.page_lines = document
            .pages()
            .iter()
            .map(|page| wrap_page(page, wrap_width))
            .collect();

        // Sheets grow to fit the longest page, but never past the height at
        // which half a sheet no longer fits in the container
        let mut stack = PageStack::new(width, PAGE_ASPECT, self.gap);
        let tallest = self.page_lines.iter().map(Vec::len).max().unwrap_or(0) as f64 + 2.0;
        stack.page_height = stack
            .page_height
            .ceil()
            .max(tallest)
            .min(max_page_height(container.height));

        self.scroll.update_max_scroll(
            stack.content_height(document.page_count()),
            container.height as f64,
        );
        tracing::debug!(
            width,
            page_height = stack.page_height,
            "Laid out document pages"
        );
        self.stack = Some(stack);
    }

    /// One visibility pass over the pages as currently scrolled
    pub fn observe(&mut self) -> Option<usize> {
        let container = self.container?;
        let total = self.document.as_ref().map_or(0, PagedDocument::page_count);
        let pages = self.page_rects(container);
        self.tracker.attach(rect_bounds(container), &pages, total)
    }

    pub fn stack(&self) -> Option<&PageStack> {
        self.stack.as_ref()
    }

    pub fn page_lines(&self, page: usize) -> &[String] {
        page.checked_sub(1)
            .and_then(|i| self.page_lines.get(i))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn content_height(&self) -> f64 {
        match (&self.stack, &self.document) {
            (Some(stack), Some(doc)) => stack.content_height(doc.page_count()),
            _ => 0.0,
        }
    }

    /// Smooth scroll so `page` starts at the top of the container
    pub fn scroll_to_page(&mut self, page: usize) {
        let Some(stack) = self.stack else {
            return;
        };
        let total = self.tracker.get_state().total_pages;
        if total == 0 {
            return;
        }
        self.scroll
            .animate_to(stack.page_bounds(page.clamp(1, total)).y);
    }

    /// Page after the one under the container's top edge
    pub fn next_page(&mut self) {
        if let Some(page) = self.page_at_top() {
            self.scroll_to_page(page + 1);
        }
    }

    /// Start of the page under the top edge, or the page before when
    /// already aligned to it
    pub fn previous_page(&mut self) {
        let (Some(stack), Some(page)) = (self.stack, self.page_at_top()) else {
            return;
        };
        let aligned = (stack.page_bounds(page).y - self.scroll.offset).abs() < 1.0;
        let target = if aligned { page.saturating_sub(1) } else { page };
        self.scroll_to_page(target.max(1));
    }

    fn page_at_top(&self) -> Option<usize> {
        let stack = self.stack?;
        let total = self.tracker.get_state().total_pages;
        (total > 0).then(|| stack.page_at(self.scroll.offset, total))
    }

    /// Screen bounds of every page, horizontally centered in the container
    fn page_rects(&self, container: Rect) -> Vec<Bounds> {
        let (Some(stack), Some(doc)) = (&self.stack, &self.document) else {
            return Vec::new();
        };
        let left = container.x as f64 + ((container.width as f64 - stack.page_width) / 2.0).max(0.0);
        (1..=doc.page_count())
            .map(|page| {
                let b = stack.page_bounds(page);
                Bounds::new(
                    left,
                    container.y as f64 + b.y - self.scroll.offset,
                    b.width,
                    b.height,
                )
            })
            .collect()
    }
}

/// Tallest sheet that can still be more than half visible in `container_height` rows
fn max_page_height(container_height: u16) -> f64 {
    (container_height as f64 * 2.0 - 1.0).max(1.0)
}

fn rect_bounds(rect: Rect) -> Bounds {
    Bounds::new(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    )
}

fn wrap_page(text: &str, width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| {
            if line.trim().is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(|l| l.into_owned())
                    .collect()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn terminal_config() -> PaginationConfig {
        PaginationConfig {
            padding: 4.0,
            max_page_width: 60.0,
            initial_width: 60.0,
            visibility_threshold: 0.5,
            page_gap: 1.0,
        }
    }

    fn loaded(pages: usize) -> ResumeView {
        let text = (1..=pages)
            .map(|p| format!("Page {} heading\n\nSome body text.", p))
            .collect::<Vec<_>>()
            .join("\u{0c}");
        let doc = PagedDocument::parse(Path::new("cv.txt"), &text).unwrap();
        let mut view = ResumeView::new(terminal_config(), DocumentSource::Builtin);
        view.on_loaded(doc);
        view
    }

    #[test]
    fn test_container_width_drives_page_width() {
        let mut view = loaded(3);
        view.layout(Rect::new(0, 3, 50, 30));
        assert_eq!(view.tracker.get_state().container_width, 46.0);
        assert_eq!(view.stack().unwrap().page_width, 46.0);

        view.layout(Rect::new(0, 3, 200, 30));
        assert_eq!(view.stack().unwrap().page_width, 60.0);
    }

    #[test]
    fn test_scrolling_changes_current_page() {
        let mut view = loaded(3);
        view.layout(Rect::new(0, 3, 64, 30));
        assert_eq!(view.observe(), Some(1));

        let stack = *view.stack().unwrap();
        view.scroll.jump_to(stack.page_bounds(2).y);
        assert_eq!(view.observe(), Some(2));
        assert_eq!(view.tracker.status_label(), "Page 2 of 3");
    }

    #[test]
    fn test_next_and_previous_page() {
        let mut view = loaded(3);
        view.layout(Rect::new(0, 3, 64, 30));
        let stack = *view.stack().unwrap();

        view.next_page();
        while view.scroll.tick() {}
        assert_eq!(view.scroll.offset, stack.page_bounds(2).y);

        view.previous_page();
        while view.scroll.tick() {}
        assert_eq!(view.scroll.offset, 0.0);
    }

    #[test]
    fn test_failure_has_no_pages() {
        let mut view = ResumeView::new(terminal_config(), DocumentSource::Builtin);
        view.on_failed("missing");
        view.layout(Rect::new(0, 3, 64, 30));
        assert_eq!(view.observe(), None);
        assert!(view.page_lines(1).is_empty());
        assert_eq!(view.tracker.status_label(), "Failed to load document");
    }

    #[test]
    fn test_sheets_stay_under_twice_the_container() {
        let mut view = ResumeView::new(crate::terminal_defaults().pagination, DocumentSource::Builtin);
        view.on_loaded(
            PagedDocument::parse(Path::new("cv.txt"), "one\x0ctwo\x0cthree").unwrap(),
        );
        view.layout(Rect::new(0, 3, 80, 20));
        assert_eq!(view.stack().unwrap().page_height, 39.0);

        // Height-only resize re-sizes the sheets
        view.layout(Rect::new(0, 3, 80, 12));
        assert_eq!(view.stack().unwrap().page_height, 23.0);

        for page in 1..=3 {
            let top = view.stack().unwrap().page_bounds(page).y;
            view.scroll.jump_to(top);
            view.observe();
            assert_eq!(view.tracker.status_label(), format!("Page {} of 3", page));
        }
    }

    #[test]
    fn test_pages_fit_their_text() {
        let mut view = loaded(1);
        view.layout(Rect::new(0, 3, 14, 30));
        let stack = view.stack().unwrap();
        assert!(stack.page_height >= view.page_lines(1).len() as f64);
    }
}
