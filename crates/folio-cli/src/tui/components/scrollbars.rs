//! Scrollbar rendering
//!
//! 1-char wide, filled track with the thumb inside. Shared by the home
//! document and the paginated resume.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, Frame};

use crate::tui::theme::Theme;

/// Buffer-level scrollbar renderer
///
/// Visual: ░ (track) and █ (thumb)
pub fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    thumb_color: Color,
    track_color: Color,
) {
    // Clear first so no stale glyphs remain when the bar disappears
    for y in 0..area.height {
        if let Some(cell) = buf.cell_mut((area.x, area.y + y)) {
            cell.set_char(' ');
            cell.set_fg(Color::Reset);
        }
    }

    if total <= visible || area.height == 0 {
        return;
    }

    let height = area.height as usize;

    // Minimum thumb of 2 rows for visibility
    let thumb_size = ((visible as f32 / total as f32) * height as f32)
        .max(2.0)
        .min(height as f32)
        .round() as usize;

    let max_offset = total.saturating_sub(visible);
    let thumb_pos = if max_offset > 0 {
        ((offset.min(max_offset) as f32 / max_offset as f32)
            * height.saturating_sub(thumb_size) as f32)
            .round() as usize
    } else {
        0
    };

    for y in 0..height {
        let is_thumb = y >= thumb_pos && y < thumb_pos + thumb_size;
        let (ch, color) = if is_thumb {
            ('█', thumb_color)
        } else {
            ('░', track_color)
        };
        if let Some(cell) = buf.cell_mut((area.x, area.y + y as u16)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

/// Scrollbar along the right edge of a scrolling document
pub fn render_document_scrollbar(
    f: &mut Frame,
    area: Rect,
    offset: usize,
    total_lines: usize,
    visible_height: usize,
    theme: &Theme,
) {
    if area.width == 0 {
        return;
    }
    let bar = Rect::new(area.x + area.width - 1, area.y, 1, area.height);
    render_scrollbar(
        f.buffer_mut(),
        bar,
        offset,
        total_lines,
        visible_height,
        theme.scrollbar_thumb_color,
        theme.scrollbar_track_color,
    );
}
