//! Color palette

use ratatui::style::Color;

/// Colors used across the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub accent_color: Color,
    pub title_color: Color,
    pub border_color: Color,
    pub navbar_solid_bg_color: Color,
    pub status_bar_bg_color: Color,
    pub page_bg_color: Color,
    pub page_text_color: Color,
    pub scrollbar_thumb_color: Color,
    pub scrollbar_track_color: Color,
    pub success_color: Color,
    pub error_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_color: Color::Reset,
            text_color: Color::Rgb(229, 229, 229),
            dim_color: Color::Rgb(140, 140, 150),
            accent_color: Color::Rgb(96, 165, 250),
            title_color: Color::White,
            border_color: Color::Rgb(64, 64, 72),
            navbar_solid_bg_color: Color::Rgb(24, 24, 27),
            status_bar_bg_color: Color::Rgb(18, 18, 20),
            page_bg_color: Color::Rgb(245, 245, 244),
            page_text_color: Color::Rgb(28, 25, 23),
            scrollbar_thumb_color: Color::Rgb(120, 120, 130),
            scrollbar_track_color: Color::Rgb(40, 40, 46),
            success_color: Color::Rgb(74, 222, 128),
            error_color: Color::Rgb(248, 113, 113),
        }
    }
}
