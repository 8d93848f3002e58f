//! Keyboard event handlers

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use folio_core::NavigationTarget;

use crate::tui::app::App;
use crate::tui::router::Route;

/// Rows moved per arrow key press
const LINE_STEP: f64 = 1.0;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let is_press =
            key_event.kind == KeyEventKind::Press || key_event.kind == KeyEventKind::Repeat;
        if !is_press {
            return;
        }

        let code = key_event.code;
        if code == KeyCode::Char('q')
            || (key_event.modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        match code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(target) = self.links.get(index).map(|l| l.target.clone()) {
                    self.navigate(&target);
                }
            }
            KeyCode::Char('r') => {
                let route = self
                    .links
                    .iter()
                    .find(|l| matches!(l.target, NavigationTarget::Route { .. }))
                    .map(|l| l.target.clone());
                if let Some(target) = route {
                    self.navigate(&target);
                }
            }
            KeyCode::Char('h') => {
                let home = NavigationTarget::section(self.config.navigation.home_section.clone());
                self.navigate(&home);
            }
            KeyCode::Char('d') => self.open_document_externally(),
            KeyCode::Esc => {
                if self.router.route() != Route::Home {
                    self.router.back();
                }
            }
            _ => self.handle_scroll_key(code),
        }
    }

    fn handle_scroll_key(&mut self, code: KeyCode) {
        let route = self.router.route();
        if route == Route::Resume {
            match code {
                KeyCode::Char('n') => return self.resume.next_page(),
                KeyCode::Char('p') => return self.resume.previous_page(),
                _ => {}
            }
        }

        let page_step = self.page_step();
        let scroll = match route {
            Route::Home => &mut self.home.scroll,
            Route::Resume => &mut self.resume.scroll,
        };

        match code {
            KeyCode::Up | KeyCode::Char('k') => scroll.scroll_up(LINE_STEP),
            KeyCode::Down | KeyCode::Char('j') => scroll.scroll_down(LINE_STEP),
            KeyCode::PageUp => scroll.scroll_up(page_step),
            KeyCode::PageDown | KeyCode::Char(' ') => scroll.scroll_down(page_step),
            KeyCode::Home | KeyCode::Char('g') => scroll.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => scroll.scroll_to_end(),
            _ => {}
        }
    }

    /// One screen of scrolling, less the rows hidden under the navbar
    fn page_step(&self) -> f64 {
        let visible = match self.router.route() {
            Route::Home => self.layout.viewport_area,
            Route::Resume => self.layout.pages_area,
        };
        visible.map_or(LINE_STEP, |area| {
            (area.height as f64 - self.config.navigation.navbar_offset).max(LINE_STEP)
        })
    }
}
