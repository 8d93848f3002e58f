//! Mouse event handling
//!
//! Wheel scrolling for the mounted view and navbar link clicks.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::App;
use crate::tui::router::Route;

/// Rows moved per wheel notch
const WHEEL_STEP: f64 = 3.0;

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_mounted_view(-WHEEL_STEP),
            MouseEventKind::ScrollDown => self.scroll_mounted_view(WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(index) = self.layout.nav_link_at(mouse.column, mouse.row) else {
                    return;
                };
                if let Some(target) = self.links.get(index).map(|l| l.target.clone()) {
                    tracing::debug!(link = index, "Navbar click");
                    self.navigate(&target);
                }
            }
            _ => {}
        }
    }

    fn scroll_mounted_view(&mut self, delta: f64) {
        let scroll = match self.router.route() {
            Route::Home => &mut self.home.scroll,
            Route::Resume => &mut self.resume.scroll,
        };
        if delta < 0.0 {
            scroll.scroll_up(-delta);
        } else {
            scroll.scroll_down(delta);
        }
    }
}
