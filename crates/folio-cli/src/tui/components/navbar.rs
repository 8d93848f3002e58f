//! Navbar - fixed header with brand, section links, and scroll progress
//!
//! Transparent at the top of the home page, solid once the page has
//! scrolled or on any other route. The bottom row doubles as a progress
//! line for the scrolling document.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::content::{NavLink, BRAND};
use crate::tui::theme::Theme;

/// Navbar height in rows
pub const NAVBAR_HEIGHT: u16 = 3;

/// Columns between link labels
const LINK_GAP: u16 = 1;

/// Everything the navbar needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct NavbarView<'a> {
    pub links: &'a [NavLink],
    /// Index of the highlighted link
    pub active: Option<usize>,
    pub solid: bool,
    /// Scroll progress in `[0, 1]`
    pub progress: f64,
}

/// Link labels with their hotkey, compact when space is short
fn link_label(index: usize, link: &NavLink, compact: bool) -> String {
    if compact {
        format!(" {} ", index + 1)
    } else {
        format!(" {} {} ", index + 1, link.label)
    }
}

fn labels_width(labels: &[String]) -> u16 {
    let text: u16 = labels.iter().map(|l| l.width() as u16).sum();
    text + LINK_GAP * labels.len().saturating_sub(1) as u16
}

/// Render the navbar. Returns the clickable link areas for hit testing.
pub fn render_navbar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    view: NavbarView<'_>,
) -> Vec<(usize, Rect)> {
    if area.height == 0 || area.width == 0 {
        return Vec::new();
    }

    if view.solid {
        let bg = Paragraph::new("").style(Style::default().bg(theme.navbar_solid_bg_color));
        f.render_widget(bg, area);
    }

    let row = area.y + area.height.saturating_sub(1) / 2;
    let buf = f.buffer_mut();
    let brand_end = area.x + 2 + BRAND.width() as u16;
    buf.set_stringn(
        area.x + 2,
        row,
        BRAND,
        area.width.saturating_sub(2) as usize,
        Style::default()
            .fg(theme.title_color)
            .add_modifier(Modifier::BOLD),
    );

    let available = area.width.saturating_sub(brand_end - area.x + 2);
    let mut labels: Vec<String> = view
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| link_label(i, link, false))
        .collect();
    if labels_width(&labels) > available {
        labels = view
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| link_label(i, link, true))
            .collect();
    }

    let mut areas = Vec::with_capacity(labels.len());
    let total = labels_width(&labels);
    if total <= available {
        let mut x = area.x + area.width - 2 - total;
        for (i, label) in labels.iter().enumerate() {
            let width = label.width() as u16;
            let style = if view.active == Some(i) {
                Style::default()
                    .fg(theme.navbar_solid_bg_color)
                    .bg(theme.accent_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_color)
            };
            buf.set_stringn(x, row, label, width as usize, style);
            areas.push((i, Rect::new(x, row, width, 1)));
            x += width + LINK_GAP;
        }
    }

    // Progress line along the bottom row
    if area.height > 1 {
        let bottom = area.y + area.height - 1;
        let filled = (area.width as f64 * view.progress.clamp(0.0, 1.0)).round() as u16;
        for x in 0..area.width {
            let Some(cell) = buf.cell_mut((area.x + x, bottom)) else {
                continue;
            };
            if x < filled {
                cell.set_char('━').set_fg(theme.accent_color);
            } else if view.solid {
                cell.set_char('─').set_fg(theme.border_color);
            }
        }
    }

    areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::content::nav_links;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(width: u16, view: impl Fn(&[NavLink]) -> NavbarView<'_>) -> (Vec<(usize, Rect)>, String) {
        let links = nav_links();
        let mut terminal = Terminal::new(TestBackend::new(width, NAVBAR_HEIGHT)).unwrap();
        let mut areas = Vec::new();
        terminal
            .draw(|f| {
                areas = render_navbar(f, Rect::new(0, 0, width, NAVBAR_HEIGHT), &Theme::default(), view(&links));
            })
            .unwrap();
        let buf = terminal.backend().buffer();
        let text = (0..width).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        (areas, text)
    }

    #[test]
    fn test_links_are_hit_testable() {
        let (areas, text) = draw(120, |links| NavbarView {
            links,
            active: Some(1),
            solid: false,
            progress: 0.0,
        });
        assert_eq!(areas.len(), 5);
        assert!(text.contains("2 Projects"));
        assert!(text.contains("5 Full Resume"));
        for pair in areas.windows(2) {
            assert!(pair[0].1.right() < pair[1].1.x);
        }
    }

    #[test]
    fn test_narrow_navbar_compacts_labels() {
        let (areas, text) = draw(40, |links| NavbarView {
            links,
            active: None,
            solid: true,
            progress: 0.5,
        });
        assert_eq!(areas.len(), 5);
        assert!(!text.contains("Projects"));
    }
}
