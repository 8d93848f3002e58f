//! Main TUI application
//!
//! Core application state and event loop.
//! Handler implementations are in the handlers/ module.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration, time::Instant};

use folio_core::{
    Bounds, FolioConfig, NavigationOutcome, NavigationTarget, Router, ScrollNavigator,
    ScrollProgress, SectionActivityTracker,
};

use crate::tui::components::{
    render_navbar, render_pages, render_sections, render_status_bar, render_toasts, NavbarView,
    Toast, ToastQueue, NAVBAR_HEIGHT,
};
use crate::tui::content::{nav_links, tracked_sections, NavLink, SECTIONS};
use crate::tui::router::{AppRouter, Route};
use crate::tui::state::{DocumentSource, HomeView, LayoutState, ResumeView};
use crate::tui::theme::Theme;
use crate::tui::utils::AsyncChannels;

/// Redraw interval while idle
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Startup options from the command line
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub document: DocumentSource,
    pub initial_route: String,
}

/// Main application state
pub struct App {
    pub(crate) config: FolioConfig,
    pub(crate) theme: Theme,
    pub(crate) links: Vec<NavLink>,
    /// Section ids the tracker observes on the home route
    pub(crate) sections: Vec<String>,
    pub(crate) router: AppRouter,
    /// Route whose view is currently mounted
    pub(crate) mounted_route: Option<Route>,
    pub(crate) home: HomeView,
    pub(crate) resume: ResumeView,
    pub(crate) tracker: SectionActivityTracker,
    pub(crate) navigator: ScrollNavigator,
    pub(crate) progress: ScrollProgress,
    pub(crate) layout: LayoutState,
    pub(crate) toasts: ToastQueue,
    pub(crate) channels: AsyncChannels,
    pub(crate) should_quit: bool,
    pub(crate) needs_redraw: bool,
}

impl App {
    pub fn new(config: FolioConfig, options: AppOptions) -> Self {
        let links = nav_links();
        let sections = tracked_sections(&links);
        tracing::info!(
            route = %options.initial_route,
            document = %options.document.label(),
            "Starting app"
        );

        Self {
            theme: Theme::default(),
            sections,
            links,
            router: AppRouter::new(&options.initial_route),
            mounted_route: None,
            home: HomeView::new(),
            resume: ResumeView::new(config.pagination.clone(), options.document),
            tracker: SectionActivityTracker::new(config.navigation.active_band()),
            navigator: ScrollNavigator::new(config.navigation.clone()),
            progress: ScrollProgress::new(&config.progress),
            layout: LayoutState::new(),
            toasts: ToastQueue::new(),
            channels: AsyncChannels::new(),
            should_quit: false,
            needs_redraw: true,
            config,
        }
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            let size = terminal.size()?;
            self.tick(Rect::new(0, 0, size.width, size.height), Instant::now());

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased; // Prefer events over timeout when both are ready

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) => {
                                self.handle_key(key);
                                self.needs_redraw = true;
                            }
                            Event::Mouse(mouse) => {
                                self.handle_mouse_event(mouse);
                                self.needs_redraw = true;
                            }
                            Event::Resize(_, _) => {
                                self.needs_redraw = true;
                            }
                            _ => {}
                        }
                    }
                }
                _ = tokio::time::sleep(FRAME_INTERVAL) => {
                    // Timeout - continue loop for animations and polling
                }
            }

            if self.should_quit {
                tracing::info!("Quitting");
                break;
            }
        }
        Ok(())
    }

    /// One frame of state updates, in dependency order: layout, route
    /// mounting, deferred scrolls, observation, animation.
    pub(crate) fn tick(&mut self, area: Rect, now: Instant) {
        self.sync_layout(area);
        self.apply_route_change();

        if let Some(outcome) = self.navigator.poll(now, &mut self.home, &mut self.tracker) {
            self.log_outcome(&outcome);
            self.needs_redraw = true;
        }

        if self.poll_document_load().needs_redraw {
            self.needs_redraw = true;
        }

        self.observe();

        let animating = match self.router.route() {
            Route::Home => self.home.scroll.tick(),
            Route::Resume => self.resume.scroll.tick(),
        };
        if animating {
            self.needs_redraw = true;
        }

        if self.toasts.tick() {
            self.needs_redraw = true;
        }
    }

    /// Split the frame and size both views to it
    fn sync_layout(&mut self, area: Rect) {
        if self.layout.frame_area == Some(area) {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(1)])
            .split(area);
        let body = rows[0];
        let navbar_height = NAVBAR_HEIGHT.min(body.height);

        self.layout.frame_area = Some(area);
        self.layout.viewport_area = Some(body);
        self.layout.navbar_area = Some(Rect::new(body.x, body.y, body.width, navbar_height));
        self.layout.pages_area = Some(Rect::new(
            body.x,
            body.y + navbar_height,
            body.width,
            body.height - navbar_height,
        ));
        self.layout.status_bar_area = Some(rows[1]);

        // Last column is the scrollbar
        self.home.layout(
            SECTIONS,
            body.width.saturating_sub(1),
            body.height,
            navbar_height,
            &self.theme,
        );
        if let Some(pages_area) = self.layout.pages_area {
            self.resume.layout(pages_area);
        }
        self.needs_redraw = true;
    }

    /// Mount the view for the router's current route
    ///
    /// Entering the home route registers the section tracker and then
    /// signals readiness, which flushes any cross-route scroll waiting on it.
    fn apply_route_change(&mut self) {
        let route = self.router.route();
        if self.mounted_route == Some(route) {
            return;
        }

        if self.mounted_route == Some(Route::Home) {
            self.tracker.teardown();
            self.home.unmount();
        }
        tracing::info!(path = route.path(), "Mounting route");

        match route {
            Route::Home => {
                self.home.scroll.scroll_to_top();
                self.home.mount();
                let registration = self.tracker.register(&self.sections, &self.home);
                // Initial observation lands before any deferred scroll, so the
                // optimistic highlight of that scroll is not overwritten
                self.observe_sections();
                if registration.is_ready() {
                    if let Some(outcome) =
                        self.navigator.regions_ready(&mut self.home, &mut self.tracker)
                    {
                        self.log_outcome(&outcome);
                    }
                }
            }
            Route::Resume => {
                self.resume.scroll.scroll_to_top();
                self.start_document_load();
            }
        }

        self.mounted_route = Some(route);
        self.needs_redraw = true;
    }

    /// Run the visibility passes for the mounted view
    fn observe(&mut self) {
        match self.mounted_route {
            Some(Route::Home) => self.observe_sections(),
            Some(Route::Resume) => {
                let before = self.resume.tracker.get_state();
                self.resume.observe();
                if self.resume.tracker.get_state() != before {
                    self.needs_redraw = true;
                }
            }
            None => {}
        }
    }

    /// Section pass against the home viewport
    fn observe_sections(&mut self) {
        let Some(viewport) = self.layout.viewport_area else {
            return;
        };
        let before = self.tracker.get_active().map(str::to_string);
        let root = Bounds::new(0.0, 0.0, viewport.width as f64, viewport.height as f64);
        let after = self.tracker.observe(root, &self.home);
        if after != before.as_deref() {
            tracing::debug!(section = ?after, "Active section changed");
            self.needs_redraw = true;
        }
    }

    /// Go to a navbar target
    pub(crate) fn navigate(&mut self, target: &NavigationTarget) -> Option<NavigationOutcome> {
        if let Err(e) = target.validate() {
            tracing::warn!(error = %e, "Ignoring navigation");
            return None;
        }
        let outcome = self
            .navigator
            .go_to(target, &mut self.router, &mut self.home, &mut self.tracker);
        self.log_outcome(&outcome);
        self.needs_redraw = true;
        Some(outcome)
    }

    fn log_outcome(&self, outcome: &NavigationOutcome) {
        match outcome {
            NavigationOutcome::Skipped { section } => {
                tracing::debug!(section = %section, "Section not rendered, no scroll")
            }
            other => tracing::debug!(outcome = ?other, "Navigation"),
        }
    }

    pub(crate) fn show_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
        self.needs_redraw = true;
    }

    /// Navbar link highlighted for the current route
    pub(crate) fn active_link(&self) -> Option<usize> {
        match self.router.route() {
            Route::Home => self.links.iter().position(|link| match &link.target {
                NavigationTarget::Section { id } => self.tracker.is_active(id),
                NavigationTarget::Route { .. } => false,
            }),
            Route::Resume => self.links.iter().position(|link| match &link.target {
                NavigationTarget::Route { path, .. } => path == self.router.current_path(),
                NavigationTarget::Section { .. } => false,
            }),
        }
    }

    /// Status bar location text and whether it reports a failure
    fn location(&self) -> (String, bool) {
        match self.router.route() {
            Route::Home => {
                let label = self.tracker.get_active().map(|id| {
                    self.links
                        .iter()
                        .find(|l| l.target.id() == id)
                        .map_or_else(|| id.to_string(), |l| l.label.to_string())
                });
                (label.unwrap_or_default(), false)
            }
            Route::Resume => {
                let failed = matches!(
                    self.resume.status(),
                    folio_core::DocumentStatus::Failed { .. }
                );
                (self.resume.tracker.status_label(), failed)
            }
        }
    }

    /// Solid navbar and progress fraction for the current route
    fn navbar_style(&self) -> (bool, f64) {
        let Some(viewport) = self.layout.viewport_area else {
            return (false, 0.0);
        };
        match self.router.route() {
            Route::Home => {
                let y = self.home.scroll.offset;
                (
                    self.progress.is_scrolled(y),
                    self.progress.fraction(
                        y,
                        self.home.content_height() as f64,
                        viewport.height as f64,
                    ),
                )
            }
            Route::Resume => {
                let visible = self.layout.pages_area.map_or(0.0, |a| a.height as f64);
                (
                    true,
                    self.progress.fraction(
                        self.resume.scroll.offset,
                        self.resume.content_height(),
                        visible,
                    ),
                )
            }
        }
    }

    fn ui(&mut self, f: &mut Frame) {
        let (Some(viewport), Some(navbar), Some(pages), Some(status)) = (
            self.layout.viewport_area,
            self.layout.navbar_area,
            self.layout.pages_area,
            self.layout.status_bar_area,
        ) else {
            return;
        };

        match self.router.route() {
            Route::Home => render_sections(f, viewport, &self.home, &self.theme),
            Route::Resume => render_pages(f, pages, &self.resume, &self.theme),
        }

        let (solid, progress) = self.navbar_style();
        self.layout.nav_link_areas = render_navbar(
            f,
            navbar,
            &self.theme,
            NavbarView {
                links: &self.links,
                active: self.active_link(),
                solid,
                progress,
            },
        );

        let (location, failed) = self.location();
        render_status_bar(f, status, &self.theme, self.router.route(), &location, failed);

        let area = f.area();
        render_toasts(f.buffer_mut(), area, &self.toasts, &self.theme);
    }
}
