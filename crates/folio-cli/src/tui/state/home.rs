//! Home route document - sections stacked in one scrolling column
//!
//! Lays the portfolio sections out as styled lines at the current terminal
//! width and exposes their row ranges as regions, so the navigation core
//! can observe and scroll to them.

use folio_core::{ObservedRegion, RegionSource, ScrollBehavior, ScrollHost};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::ScrollState;
use crate::tui::content::SectionContent;
use crate::tui::theme::Theme;

/// Columns of margin on each side of section text
const SIDE_MARGIN: usize = 4;

/// Blank rows above and below each section's text
const SECTION_PADDING: usize = 2;

/// Narrowest wrap width before text stops shrinking
const MIN_WRAP_WIDTH: usize = 20;

/// Row range of one section in document coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    pub id: &'static str,
    pub top: usize,
    pub height: usize,
}

/// Cache key for the last layout pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LayoutCache {
    width: u16,
    viewport_height: u16,
}

/// Home route view state
#[derive(Debug, Default)]
pub struct HomeView {
    pub scroll: ScrollState,
    lines: Vec<Line<'static>>,
    sections: Vec<SectionLayout>,
    cache: Option<LayoutCache>,
    viewport_height: u16,
    mounted: bool,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay sections out for a viewport. Skips work when nothing changed.
    ///
    /// `top_inset` keeps the first section's text clear of the navbar.
    pub fn layout(
        &mut self,
        content: &[SectionContent],
        width: u16,
        viewport_height: u16,
        top_inset: u16,
        theme: &Theme,
    ) {
        let key = LayoutCache {
            width,
            viewport_height,
        };
        if self.cache == Some(key) {
            return;
        }

        let wrap_width = (width as usize)
            .saturating_sub(SIDE_MARGIN * 2)
            .max(MIN_WRAP_WIDTH);
        let mut lines = Vec::new();
        let mut sections = Vec::with_capacity(content.len());

        for (i, section) in content.iter().enumerate() {
            let top = lines.len();
            let padding_top = if i == 0 {
                SECTION_PADDING + top_inset as usize
            } else {
                SECTION_PADDING
            };
            lines.extend(std::iter::repeat_with(Line::default).take(padding_top));
            lines.extend(section_lines(section, wrap_width, theme));
            lines.extend(std::iter::repeat_with(Line::default).take(SECTION_PADDING));

            if section.fill_viewport {
                let min_height = top + viewport_height as usize;
                while lines.len() < min_height {
                    lines.push(Line::default());
                }
            }

            sections.push(SectionLayout {
                id: section.id,
                top,
                height: lines.len() - top,
            });
        }

        tracing::debug!(
            width,
            rows = lines.len(),
            sections = sections.len(),
            "Laid out home sections"
        );
        self.lines = lines;
        self.sections = sections;
        self.viewport_height = viewport_height;
        self.cache = Some(key);
        self.scroll
            .update_max_scroll(self.lines.len() as f64, viewport_height as f64);
    }

    /// Make the regions observable (route entered)
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Hide the regions (route left)
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn sections(&self) -> &[SectionLayout] {
        &self.sections
    }

    pub fn content_height(&self) -> usize {
        self.lines.len()
    }
}

impl RegionSource for HomeView {
    fn region(&self, id: &str) -> Option<ObservedRegion> {
        if !self.mounted {
            return None;
        }
        self.sections.iter().find(|s| s.id == id).map(|s| {
            ObservedRegion::new(
                s.id,
                s.top as f64 - self.scroll.offset,
                s.height as f64,
            )
        })
    }
}

impl ScrollHost for HomeView {
    fn scroll_y(&self) -> f64 {
        self.scroll.offset
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height as f64
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        match behavior {
            ScrollBehavior::Smooth => self.scroll.animate_to(top),
            ScrollBehavior::Instant => self.scroll.jump_to(top),
        }
    }
}

fn section_lines(section: &SectionContent, wrap_width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let indent = " ".repeat(SIDE_MARGIN);
    let mut lines = vec![
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(
                section.eyebrow.to_uppercase(),
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(
                section.title.to_string(),
                Style::default()
                    .fg(theme.title_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    for paragraph in section.paragraphs {
        lines.push(Line::default());
        for wrapped in textwrap::wrap(paragraph, wrap_width) {
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(wrapped.into_owned(), Style::default().fg(theme.text_color)),
            ]));
        }
    }
    lines
}
