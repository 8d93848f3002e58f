//! Scroll navigation
//!
//! Turns navbar clicks into route changes and scroll offsets. Sections only
//! exist on the home route; navigating to one from elsewhere changes route
//! first and scrolls once the destination has mounted.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::{NavigationConfig, SettleStrategy};
use crate::error::{NavError, Result};
use crate::geometry::{ObservedRegion, RegionSource};
use crate::section::SectionActivityTracker;

/// Navigation destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavigationTarget {
    /// A region on the home route
    Section { id: String },
    /// A standalone route
    Route { id: String, path: String },
}

impl NavigationTarget {
    pub fn section(id: impl Into<String>) -> Self {
        NavigationTarget::Section { id: id.into() }
    }

    pub fn route(id: impl Into<String>, path: impl Into<String>) -> Self {
        NavigationTarget::Route {
            id: id.into(),
            path: path.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            NavigationTarget::Section { id } | NavigationTarget::Route { id, .. } => id,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            NavigationTarget::Section { id } if id.is_empty() => {
                Err(NavError::InvalidTarget("section id is empty".into()))
            }
            NavigationTarget::Route { path, .. } if !path.starts_with('/') => Err(
                NavError::InvalidTarget(format!("route path '{}' is not absolute", path)),
            ),
            _ => Ok(()),
        }
    }
}

/// Routing collaborator
pub trait Router {
    fn current_path(&self) -> &str;
    fn navigate(&mut self, path: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Scrollable document hosting the sections
pub trait ScrollHost: RegionSource {
    /// Current document scroll offset
    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// Issue a scroll. A new call redirects any scroll still in flight.
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);
}

/// Inputs for the scroll target computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub navbar_offset: f64,
}

/// Scroll offset that brings `region` into view
///
/// Regions that fit below the navbar are centered in the viewport; taller ones
/// are aligned just under the navbar.
pub fn scroll_target(region: &ObservedRegion, geometry: &ScrollGeometry) -> f64 {
    let top = region.absolute_top(geometry.scroll_y);
    let height = region.bounding_height;
    let viewport = geometry.viewport_height;

    if height < viewport - geometry.navbar_offset {
        top - (viewport - height) / 2.0
    } else {
        top - geometry.navbar_offset
    }
}

/// What a navigation request did
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    /// Route changed, no scroll
    Routed { path: String },
    /// Scroll issued
    Scrolled { section: String, top: f64 },
    /// Route changed to the home route; scroll waits for it to settle
    Deferred { section: String },
    /// Section has no rendered region
    Skipped { section: String },
}

#[derive(Debug, Clone)]
struct PendingScroll {
    section: String,
    requested_at: Instant,
}

/// Performs navbar navigation
#[derive(Debug)]
pub struct ScrollNavigator {
    config: NavigationConfig,
    pending: Option<PendingScroll>,
}

impl ScrollNavigator {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            pending: None,
        }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Section waiting for a cross-route scroll
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.section.as_str())
    }

    pub fn go_to<R, H>(
        &mut self,
        target: &NavigationTarget,
        router: &mut R,
        host: &mut H,
        tracker: &mut SectionActivityTracker,
    ) -> NavigationOutcome
    where
        R: Router + ?Sized,
        H: ScrollHost + ?Sized,
    {
        self.go_to_at(target, Instant::now(), router, host, tracker)
    }

    /// `go_to` with an explicit clock, for the delay settle strategy
    pub fn go_to_at<R, H>(
        &mut self,
        target: &NavigationTarget,
        now: Instant,
        router: &mut R,
        host: &mut H,
        tracker: &mut SectionActivityTracker,
    ) -> NavigationOutcome
    where
        R: Router + ?Sized,
        H: ScrollHost + ?Sized,
    {
        // Last request wins over anything still waiting
        self.pending = None;

        match target {
            NavigationTarget::Route { path, .. } => {
                tracing::info!(path = %path, "Navigating to route");
                router.navigate(path);
                NavigationOutcome::Routed { path: path.clone() }
            }
            NavigationTarget::Section { id } => {
                if router.current_path() != self.config.home_route {
                    tracing::info!(section = %id, "Deferring scroll until home route settles");
                    router.navigate(&self.config.home_route);
                    self.pending = Some(PendingScroll {
                        section: id.clone(),
                        requested_at: now,
                    });
                    NavigationOutcome::Deferred { section: id.clone() }
                } else {
                    self.scroll_to_section(id, host, tracker)
                }
            }
        }
    }

    /// Readiness signal: the home route's regions have registered
    ///
    /// Flushes a pending scroll under the regions-ready strategy.
    pub fn regions_ready<H>(
        &mut self,
        host: &mut H,
        tracker: &mut SectionActivityTracker,
    ) -> Option<NavigationOutcome>
    where
        H: ScrollHost + ?Sized,
    {
        if self.config.settle_strategy() != SettleStrategy::RegionsReady {
            return None;
        }
        let pending = self.pending.take()?;
        Some(self.scroll_to_section(&pending.section, host, tracker))
    }

    /// Timer tick: flushes a pending scroll once the settle delay has elapsed
    pub fn poll<H>(
        &mut self,
        now: Instant,
        host: &mut H,
        tracker: &mut SectionActivityTracker,
    ) -> Option<NavigationOutcome>
    where
        H: ScrollHost + ?Sized,
    {
        let SettleStrategy::Delay(delay) = self.config.settle_strategy() else {
            return None;
        };
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.requested_at) >= delay);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;
        Some(self.scroll_to_section(&pending.section, host, tracker))
    }

    /// Scroll to a section on the current route
    pub fn scroll_to_section<H>(
        &mut self,
        id: &str,
        host: &mut H,
        tracker: &mut SectionActivityTracker,
    ) -> NavigationOutcome
    where
        H: ScrollHost + ?Sized,
    {
        let top = if id == self.config.home_section {
            0.0
        } else {
            let region = match host.require(id) {
                Ok(region) => region,
                Err(e) => {
                    if e.is_silent() {
                        tracing::debug!(section = %id, "No region for section, skipping scroll");
                    } else {
                        tracing::warn!(section = %id, error = %e, "Skipping scroll");
                    }
                    return NavigationOutcome::Skipped {
                        section: id.to_string(),
                    };
                }
            };
            let geometry = ScrollGeometry {
                scroll_y: host.scroll_y(),
                viewport_height: host.viewport_height(),
                navbar_offset: self.config.navbar_offset,
            };
            scroll_target(&region, &geometry)
        };

        host.scroll_to(top, ScrollBehavior::Smooth);

        // Highlight immediately; the tracker reconciles once the band is crossed
        if let Err(e) = tracker.activate(id) {
            tracing::debug!(error = %e, "Optimistic activation ignored");
        }

        NavigationOutcome::Scrolled {
            section: id.to_string(),
            top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Bounds, RootMargin};
    use std::time::Duration;

    const SECTIONS: [&str; 3] = ["home", "projects", "resume"];

    struct TestRouter {
        path: String,
        history: Vec<String>,
    }

    impl TestRouter {
        fn at(path: &str) -> Self {
            Self {
                path: path.to_string(),
                history: Vec::new(),
            }
        }
    }

    impl Router for TestRouter {
        fn current_path(&self) -> &str {
            &self.path
        }

        fn navigate(&mut self, path: &str) {
            self.path = path.to_string();
            self.history.push(path.to_string());
        }
    }

    /// Document whose regions only exist while mounted
    struct TestHost {
        regions: Vec<ObservedRegion>,
        mounted: bool,
        scroll_y: f64,
        viewport_height: f64,
        scrolls: Vec<f64>,
    }

    impl TestHost {
        fn new(regions: Vec<ObservedRegion>) -> Self {
            Self {
                regions,
                mounted: true,
                scroll_y: 0.0,
                viewport_height: 1000.0,
                scrolls: Vec::new(),
            }
        }
    }

    impl RegionSource for TestHost {
        fn region(&self, id: &str) -> Option<ObservedRegion> {
            if !self.mounted {
                return None;
            }
            self.regions.region(id)
        }
    }

    impl ScrollHost for TestHost {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn viewport_height(&self) -> f64 {
            self.viewport_height
        }

        fn scroll_to(&mut self, top: f64, _behavior: ScrollBehavior) {
            self.scrolls.push(top);
        }
    }

    fn regions() -> Vec<ObservedRegion> {
        vec![
            ObservedRegion::new("home", 0.0, 900.0),
            ObservedRegion::new("projects", 1200.0, 600.0),
            ObservedRegion::new("resume", 2400.0, 1500.0),
        ]
    }

    fn registered_tracker(host: &TestHost) -> SectionActivityTracker {
        let mut tracker = SectionActivityTracker::new(RootMargin::band(30.0, 30.0));
        tracker.register(&SECTIONS, host);
        tracker
    }

    fn geometry(scroll_y: f64) -> ScrollGeometry {
        ScrollGeometry {
            scroll_y,
            viewport_height: 1000.0,
            navbar_offset: 80.0,
        }
    }

    #[test]
    fn test_short_region_is_centered() {
        let region = ObservedRegion::new("projects", 1200.0, 600.0);
        // 1200 - (1000 - 600) / 2
        assert_eq!(scroll_target(&region, &geometry(0.0)), 1000.0);
    }

    #[test]
    fn test_tall_region_aligns_below_navbar() {
        let region = ObservedRegion::new("resume", 2400.0, 1500.0);
        assert_eq!(scroll_target(&region, &geometry(0.0)), 2320.0);

        // Exactly V - N tall is not "fits"
        let edge = ObservedRegion::new("about", 500.0, 920.0);
        assert_eq!(scroll_target(&edge, &geometry(0.0)), 420.0);
    }

    #[test]
    fn test_target_uses_absolute_top() {
        let region = ObservedRegion::new("projects", 200.0, 600.0);
        assert_eq!(scroll_target(&region, &geometry(1000.0)), 1000.0);
    }

    #[test]
    fn test_home_always_scrolls_to_top() {
        let mut host = TestHost::new(vec![ObservedRegion::new("home", -500.0, 50.0)]);
        host.scroll_y = 3000.0;
        let mut tracker = registered_tracker(&host);
        let mut router = TestRouter::at("/");
        let mut nav = ScrollNavigator::new(NavigationConfig::default());

        let outcome = nav.go_to(
            &NavigationTarget::section("home"),
            &mut router,
            &mut host,
            &mut tracker,
        );
        assert_eq!(
            outcome,
            NavigationOutcome::Scrolled {
                section: "home".into(),
                top: 0.0
            }
        );
        assert_eq!(host.scrolls, vec![0.0]);
    }

    #[test]
    fn test_same_route_scrolls_and_activates_immediately() {
        let mut host = TestHost::new(regions());
        let mut tracker = registered_tracker(&host);
        let mut router = TestRouter::at("/");
        let mut nav = ScrollNavigator::new(NavigationConfig::default());

        nav.go_to(
            &NavigationTarget::section("projects"),
            &mut router,
            &mut host,
            &mut tracker,
        );

        assert_eq!(host.scrolls, vec![1000.0]);
        assert_eq!(tracker.get_active(), Some("projects"));
        assert!(router.history.is_empty());

        // Tracker reconciles with a no-op when the band agrees
        let band_view = Bounds::new(0.0, 0.0, 1200.0, 1000.0);
        let arrived: Vec<ObservedRegion> = host
            .regions
            .iter()
            .map(|r| ObservedRegion::new(r.id.clone(), r.bounding_top - 1000.0, r.bounding_height))
            .collect();
        assert_eq!(tracker.observe(band_view, &arrived), Some("projects"));
    }

    #[test]
    fn test_route_target_only_navigates() {
        let mut host = TestHost::new(regions());
        let mut tracker = registered_tracker(&host);
        let mut router = TestRouter::at("/");
        let mut nav = ScrollNavigator::new(NavigationConfig::default());

        let outcome = nav.go_to(
            &NavigationTarget::route("full-resume", "/resume"),
            &mut router,
            &mut host,
            &mut tracker,
        );

        assert_eq!(
            outcome,
            NavigationOutcome::Routed {
                path: "/resume".into()
            }
        );
        assert_eq!(router.current_path(), "/resume");
        assert!(host.scrolls.is_empty());
    }

    #[test]
    fn test_cross_route_waits_for_regions() {
        let mut host = TestHost::new(regions());
        let mut tracker = SectionActivityTracker::new(RootMargin::band(30.0, 30.0));
        let mut router = TestRouter::at("/resume");
        let mut nav = ScrollNavigator::new(NavigationConfig::default());
        host.mounted = false;

        let outcome = nav.go_to(
            &NavigationTarget::section("projects"),
            &mut router,
            &mut host,
            &mut tracker,
        );
        assert_eq!(
            outcome,
            NavigationOutcome::Deferred {
                section: "projects".into()
            }
        );
        assert_eq!(router.history, vec!["/"]);
        assert!(host.scrolls.is_empty());
        assert_eq!(nav.pending(), Some("projects"));

        // Home view mounts and registers its regions
        host.mounted = true;
        let registration = tracker.register(&SECTIONS, &host);
        assert!(registration.is_ready());

        let outcome = nav.regions_ready(&mut host, &mut tracker);
        assert_eq!(
            outcome,
            Some(NavigationOutcome::Scrolled {
                section: "projects".into(),
                top: 1000.0
            })
        );
        assert_eq!(host.scrolls, vec![1000.0]);
        assert_eq!(tracker.get_active(), Some("projects"));
        assert!(nav.pending().is_none());
    }

    #[test]
    fn test_cross_route_with_fixed_delay() {
        let mut host = TestHost::new(regions());
        let mut tracker = registered_tracker(&host);
        let mut router = TestRouter::at("/resume");
        let config = NavigationConfig {
            settle_delay_ms: Some(100),
            ..Default::default()
        };
        let mut nav = ScrollNavigator::new(config);
        let start = Instant::now();

        nav.go_to_at(
            &NavigationTarget::section("projects"),
            start,
            &mut router,
            &mut host,
            &mut tracker,
        );
        assert_eq!(router.current_path(), "/");

        // Readiness is ignored under the delay strategy
        assert!(nav.regions_ready(&mut host, &mut tracker).is_none());
        assert!(nav
            .poll(start + Duration::from_millis(50), &mut host, &mut tracker)
            .is_none());
        assert!(host.scrolls.is_empty());

        let outcome = nav.poll(start + Duration::from_millis(100), &mut host, &mut tracker);
        assert!(matches!(outcome, Some(NavigationOutcome::Scrolled { .. })));
        assert_eq!(host.scrolls, vec![1000.0]);
    }

    #[test]
    fn test_missing_region_skips_scroll() {
        let mut host = TestHost::new(regions());
        let mut tracker = registered_tracker(&host);
        let mut router = TestRouter::at("/resume");
        let mut nav = ScrollNavigator::new(NavigationConfig::default());

        nav.go_to(
            &NavigationTarget::section("certificates"),
            &mut router,
            &mut host,
            &mut tracker,
        );
        let outcome = nav.regions_ready(&mut host, &mut tracker);

        assert_eq!(
            outcome,
            Some(NavigationOutcome::Skipped {
                section: "certificates".into()
            })
        );
        assert!(host.scrolls.is_empty());
        assert_eq!(tracker.get_active(), Some("home"));
    }

    #[test]
    fn test_new_request_replaces_pending() {
        let mut host = TestHost::new(regions());
        let mut tracker = registered_tracker(&host);
        let mut router = TestRouter::at("/resume");
        let mut nav = ScrollNavigator::new(NavigationConfig::default());

        nav.go_to(
            &NavigationTarget::section("projects"),
            &mut router,
            &mut host,
            &mut tracker,
        );
        nav.go_to(
            &NavigationTarget::route("full-resume", "/resume"),
            &mut router,
            &mut host,
            &mut tracker,
        );

        assert!(nav.pending().is_none());
        assert!(nav.regions_ready(&mut host, &mut tracker).is_none());
    }

    #[test]
    fn test_target_serde_shape() {
        let target: NavigationTarget =
            toml::from_str("kind = \"route\"\nid = \"full-resume\"\npath = \"/resume\"")
                .unwrap();
        assert_eq!(target, NavigationTarget::route("full-resume", "/resume"));
        assert!(target.validate().is_ok());

        let missing_path = toml::from_str::<NavigationTarget>("kind = \"route\"\nid = \"x\"");
        assert!(missing_path.is_err());

        assert!(NavigationTarget::route("x", "resume").validate().is_err());
    }
}
