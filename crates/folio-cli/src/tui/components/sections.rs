//! Home document rendering

use ratatui::{layout::Rect, style::Style, text::Text, widgets::Paragraph, Frame};

use super::scrollbars::render_document_scrollbar;
use crate::tui::state::HomeView;
use crate::tui::theme::Theme;

/// Draw the visible slice of the home sections plus its scrollbar
pub fn render_sections(f: &mut Frame, area: Rect, home: &HomeView, theme: &Theme) {
    let lines = home.lines();
    let start = home.scroll.row().min(lines.len());
    let end = (start + area.height as usize).min(lines.len());

    f.render_widget(
        Paragraph::new(Text::from(lines[start..end].to_vec()))
            .style(Style::default().bg(theme.bg_color)),
        area,
    );
    render_document_scrollbar(
        f,
        area,
        start,
        lines.len(),
        area.height as usize,
        theme,
    );
}
