//! Paginated document rendering
//!
//! Draws each page as a light sheet centered in the container. Pages are
//! clipped to the container, so a partly scrolled page shows only its
//! visible rows.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use folio_core::DocumentStatus;

use super::scrollbars::render_document_scrollbar;
use crate::tui::state::ResumeView;
use crate::tui::theme::Theme;
use crate::tui::utils::centered_offset;

/// Columns between a sheet's edge and its text
const TEXT_INSET: u16 = 3;

/// Rows between a sheet's top and its first line
const TOP_INSET: i64 = 1;

pub fn render_pages(f: &mut Frame, area: Rect, resume: &ResumeView, theme: &Theme) {
    match resume.status() {
        DocumentStatus::Loading => render_notice(
            f,
            area,
            vec![Line::styled(
                "Loading document…",
                Style::default().fg(theme.dim_color),
            )],
        ),
        DocumentStatus::Failed { reason } => render_notice(
            f,
            area,
            vec![
                Line::styled(
                    "Failed to load document",
                    Style::default()
                        .fg(theme.error_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(reason.clone(), Style::default().fg(theme.dim_color)),
                Line::default(),
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(theme.text_color)),
                    Span::styled(
                        "d",
                        Style::default()
                            .fg(theme.accent_color)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" to open {} externally", resume.source().label()),
                        Style::default().fg(theme.text_color),
                    ),
                ]),
            ],
        ),
        DocumentStatus::Loaded => {
            render_sheets(f.buffer_mut(), area, resume, theme);
            render_document_scrollbar(
                f,
                area,
                resume.scroll.row(),
                resume.content_height().ceil() as usize,
                area.height as usize,
                theme,
            );
        }
    }
}

fn render_notice(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16;
    let top = area.y + centered_offset(area.height, height);
    let notice = Rect::new(area.x, top, area.width, height.min(area.height));
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), notice);
}

fn render_sheets(buf: &mut Buffer, area: Rect, resume: &ResumeView, theme: &Theme) {
    let (Some(stack), Some(doc)) = (resume.stack(), resume.document()) else {
        return;
    };
    let sheet_width = (stack.page_width as u16).min(area.width);
    let left = area.x + centered_offset(area.width, sheet_width);
    let offset = resume.scroll.row() as i64;
    let sheet_style = Style::default()
        .bg(theme.page_bg_color)
        .fg(theme.page_text_color);
    let text_width = sheet_width.saturating_sub(TEXT_INSET * 2) as usize;

    for page in 1..=doc.page_count() {
        let bounds = stack.page_bounds(page);
        let top = bounds.y.round() as i64 - offset;
        let height = bounds.height.round() as i64;
        if top + height <= 0 || top >= area.height as i64 {
            continue;
        }

        let lines = resume.page_lines(page);
        for row in top.max(0)..(top + height).min(area.height as i64) {
            let y = area.y + row as u16;
            for x in left..left + sheet_width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ').set_style(sheet_style);
                }
            }

            let line_index = row - top - TOP_INSET;
            if let Some(text) = usize::try_from(line_index).ok().and_then(|i| lines.get(i)) {
                buf.set_stringn(left + TEXT_INSET, y, text, text_width, sheet_style);
            }
        }

        // Page number in the sheet's bottom-right corner
        let last_row = top + height - 1;
        if (0..area.height as i64).contains(&last_row) {
            let label = format!("{} / {}", page, doc.page_count());
            let x = (left + sheet_width).saturating_sub(label.len() as u16 + TEXT_INSET);
            buf.set_stringn(
                x,
                area.y + last_row as u16,
                &label,
                label.len(),
                sheet_style.add_modifier(Modifier::DIM),
            );
        }
    }
}
