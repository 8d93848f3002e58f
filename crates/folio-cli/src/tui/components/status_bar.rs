//! Status bar component - bottom bar with route, location, shortcuts

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::router::Route;
use crate::tui::theme::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Widest the location text may grow before truncation
const MAX_LOCATION_WIDTH: usize = 40;

/// Render the status bar at the bottom of the screen
///
/// `location` is the active section on the home route and the pagination
/// label on the resume route.
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    route: Route,
    location: &str,
    location_failed: bool,
) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let path = route.path();
    let location = truncate_ellipsis(location, MAX_LOCATION_WIDTH);
    let location_color = if location_failed {
        theme.error_color
    } else {
        theme.text_color
    };

    let left_spans = vec![
        Span::raw(" "),
        Span::styled(path, Style::default().fg(theme.dim_color)),
        Span::styled(" │ ", Style::default().fg(theme.dim_color)),
        Span::styled(location.clone(), Style::default().fg(location_color)),
    ];
    let left_width = (1 + path.width() + 3 + location.width()) as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left_width), Constraint::Fill(1)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);

    let commands = build_commands_for_width(chunks[1].width as usize, route, theme);
    f.render_widget(
        Paragraph::new(Line::from(commands)).alignment(Alignment::Right),
        chunks[1],
    );
}

/// Command hints that fit in `width`, highest priority kept first
fn build_commands_for_width<'a>(width: usize, route: Route, theme: &'a Theme) -> Vec<Span<'a>> {
    // (key, description), highest priority first
    let commands: &[(&str, &str)] = match route {
        Route::Home => &[
            (" q ", "quit "),
            (" 1-5 ", "jump "),
            (" ↑↓ ", "scroll "),
            (" r ", "resume "),
        ],
        Route::Resume => &[
            (" q ", "quit "),
            (" h ", "home "),
            (" n/p ", "page "),
            (" d ", "open "),
            (" Esc ", "back "),
        ],
    };

    let mut spans = Vec::new();
    let mut used_width = 0;

    for (key, desc) in commands {
        let cmd_width = key.width() + desc.width() + 1;
        if used_width + cmd_width > width {
            continue;
        }
        spans.push(Span::styled(
            *key,
            Style::default().bg(theme.border_color).fg(theme.text_color),
        ));
        spans.push(Span::styled(*desc, Style::default().fg(theme.dim_color)));
        spans.push(Span::raw(" "));
        used_width += cmd_width;
    }

    spans
}
