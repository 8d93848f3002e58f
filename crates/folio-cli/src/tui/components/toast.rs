//! Toasts
//!
//! Short notices stacked upward from the status bar in the bottom-right
//! corner. The newest sits lowest. A toast's bottom border drains as it
//! ages out.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Theme;
use crate::tui::utils::truncate_ellipsis;

const MAX_TOASTS: usize = 3;

const LIFETIME: Duration = Duration::from_secs(5);

const MIN_WIDTH: u16 = 24;
const MAX_WIDTH: u16 = 48;

/// Border rows plus one line of text
const HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn color(self, theme: &Theme) -> Color {
        match self {
            ToastKind::Success => theme.success_color,
            ToastKind::Error => theme.error_color,
        }
    }

    fn title(self) -> &'static str {
        match self {
            ToastKind::Success => " done ",
            ToastKind::Error => " error ",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
    lifetime: Duration,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
            lifetime: LIFETIME,
        }
    }

    #[cfg(test)]
    fn lasting(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Share of the lifetime still left, in `[0, 1]`
    fn remaining(&self, now: Instant) -> f64 {
        let left = self.lifetime.saturating_sub(now.duration_since(self.shown_at));
        if self.lifetime.is_zero() {
            return 0.0;
        }
        left.as_secs_f64() / self.lifetime.as_secs_f64()
    }

    fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.lifetime
    }
}

/// Live toasts, oldest first
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast. A message already on screen is not repeated, and the
    /// oldest toast makes room when the queue is full.
    pub fn push(&mut self, toast: Toast) {
        if self.toasts.iter().any(|t| t.message == toast.message) {
            return;
        }
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(toast);
    }

    /// Drop expired toasts. True when the screen needs a redraw.
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.expired(now));
        // Live toasts redraw every frame so their countdown moves
        before != self.toasts.len() || !self.toasts.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Newest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }
}

/// Draw the queue above the status bar, which is the last row of `frame`
pub fn render_toasts(buf: &mut Buffer, frame: Rect, queue: &ToastQueue, theme: &Theme) {
    let width = MAX_WIDTH.min(frame.width);
    if width < MIN_WIDTH {
        return;
    }

    let now = Instant::now();
    let mut bottom = frame.bottom().saturating_sub(1);
    for toast in queue.visible() {
        if bottom < frame.y + HEIGHT {
            break;
        }
        let toast_width = fitted_width(&toast.message, width);
        let area = Rect::new(
            frame.right() - toast_width,
            bottom - HEIGHT,
            toast_width,
            HEIGHT,
        );
        render_toast(buf, area, toast, now, theme);
        bottom -= HEIGHT;
    }
}

/// Message width plus borders and padding, kept within `[MIN_WIDTH, max]`
fn fitted_width(message: &str, max: u16) -> u16 {
    let wanted = message.width() as u16 + 4;
    wanted.clamp(MIN_WIDTH, max)
}

fn render_toast(buf: &mut Buffer, area: Rect, toast: &Toast, now: Instant, theme: &Theme) {
    let color = toast.kind.color(theme);
    let inner_width = area.width.saturating_sub(2);
    let drained = (inner_width as f64 * toast.remaining(now)).round() as usize;

    let countdown = Line::from(vec![
        Span::styled("━".repeat(drained), Style::default().fg(color)),
        Span::styled(
            "─".repeat((inner_width as usize).saturating_sub(drained)),
            Style::default().fg(theme.dim_color),
        ),
    ]);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme.navbar_solid_bg_color))
        .title(Span::styled(
            toast.kind.title(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(countdown);

    let text = truncate_ellipsis(&toast.message, inner_width.saturating_sub(2) as usize);
    Paragraph::new(Line::styled(format!(" {}", text), Style::default().fg(theme.text_color)))
        .block(block)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_queue_skips_repeats_and_evicts_oldest() {
        let mut queue = ToastQueue::new();
        queue.push(Toast::success("one"));
        queue.push(Toast::success("one"));
        assert_eq!(queue.visible().count(), 1);

        queue.push(Toast::error("two"));
        queue.push(Toast::success("three"));
        queue.push(Toast::success("four"));
        let messages: Vec<_> = queue.visible().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["four", "three", "two"]);
    }

    #[test]
    fn test_expired_toasts_leave_the_queue() {
        let mut queue = ToastQueue::new();
        queue.push(Toast::error("gone").lasting(Duration::ZERO));
        assert!(queue.tick());
        assert!(queue.is_empty());
        assert!(!queue.tick());
    }

    #[test]
    fn test_newest_toast_sits_above_the_status_bar() {
        let frame = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(frame);
        let mut queue = ToastQueue::new();
        queue.push(Toast::success("Opened cv.txt"));
        queue.push(Toast::error("Failed to load document"));

        render_toasts(&mut buf, frame, &queue, &Theme::default());

        // Rows 8..11 hold the newest toast; row 11 stays for the status bar
        assert!(row_text(&buf, 9).contains("Failed to load document"));
        assert!(row_text(&buf, 8).contains("error"));
        assert!(row_text(&buf, 6).contains("Opened cv.txt"));
        assert!(row_text(&buf, 11).trim().is_empty());
    }

    #[test]
    fn test_narrow_frames_skip_toasts() {
        let frame = Rect::new(0, 0, 20, 12);
        let mut buf = Buffer::empty(frame);
        let mut queue = ToastQueue::new();
        queue.push(Toast::error("Failed to load document"));

        render_toasts(&mut buf, frame, &queue, &Theme::default());
        assert!((0..12).all(|y| row_text(&buf, y).trim().is_empty()));
    }
}
