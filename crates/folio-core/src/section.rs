//! Section activity tracking
//!
//! Decides which page section the navbar highlights. Each registered region is
//! observed against the active band (the middle of the viewport); whichever
//! region most recently entered the band becomes active. Regions leaving the
//! band never clear the highlight, so scrolling into footer space keeps the
//! last section lit.

use crate::error::{NavError, Result};
use crate::geometry::{Bounds, RegionSource, RootMargin};
use crate::observer::{IntersectionEntry, IntersectionObserver, ObserverOptions};

/// Outcome of a `register` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    /// Sections now observed
    pub observed: Vec<String>,
    /// Declared sections with no rendered region
    pub skipped: Vec<String>,
}

impl Registration {
    /// Whether the view has at least one observable region
    pub fn is_ready(&self) -> bool {
        !self.observed.is_empty()
    }
}

/// Tracks the active section for navigation highlighting
///
/// The tracker outlives individual route views: `register` and `teardown`
/// bracket one view's lifetime while the active id survives across them.
#[derive(Debug)]
pub struct SectionActivityTracker {
    band: RootMargin,
    sections: Vec<String>,
    active: Option<String>,
    observer: Option<IntersectionObserver<String>>,
    registration: Registration,
}

impl SectionActivityTracker {
    pub fn new(band: RootMargin) -> Self {
        Self {
            band,
            sections: Vec::new(),
            active: None,
            observer: None,
            registration: Registration::default(),
        }
    }

    /// Subscribe every declared section that is rendered
    ///
    /// Sections without a region are skipped, not errors. Calling this again
    /// before `teardown` leaves the existing subscription untouched.
    pub fn register<S, R>(&mut self, section_ids: &[S], regions: &R) -> Registration
    where
        S: AsRef<str>,
        R: RegionSource + ?Sized,
    {
        if self.observer.is_some() {
            tracing::debug!("Section tracker already registered, ignoring");
            return self.registration.clone();
        }

        self.sections = section_ids.iter().map(|s| s.as_ref().to_string()).collect();
        let known = self
            .active
            .as_ref()
            .is_some_and(|id| self.sections.contains(id));
        if !known {
            self.active = self.sections.first().cloned();
        }

        let mut observer = IntersectionObserver::new(ObserverOptions {
            root_margin: self.band,
            threshold: 0.0,
        });
        let mut registration = Registration::default();

        for id in &self.sections {
            if regions.region(id).is_some() {
                observer.observe(id.clone());
                registration.observed.push(id.clone());
            } else {
                tracing::debug!(section = %id, "Section not rendered, skipping");
                registration.skipped.push(id.clone());
            }
        }

        tracing::debug!(
            observed = registration.observed.len(),
            skipped = registration.skipped.len(),
            "Registered section tracker"
        );
        self.observer = Some(observer);
        self.registration = registration.clone();
        registration
    }

    /// Unsubscribe all regions. The active id is kept.
    pub fn teardown(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
            tracing::debug!("Tore down section tracker");
        }
        self.registration = Registration::default();
    }

    pub fn is_registered(&self) -> bool {
        self.observer.is_some()
    }

    /// Current active section, defaulting to the first declared one
    pub fn get_active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.get_active() == Some(id)
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Whether `id` is one of the declared sections
    pub fn knows(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s == id)
    }

    /// Run one observation pass against the current layout
    pub fn observe<R>(&mut self, viewport: Bounds, regions: &R) -> Option<&str>
    where
        R: RegionSource + ?Sized,
    {
        let entries = match self.observer.as_mut() {
            Some(observer) => observer.compute(viewport, |id| {
                regions.region(id).map(|r| r.bounds(viewport.width))
            }),
            None => Vec::new(),
        };
        self.apply(&entries);
        self.get_active()
    }

    /// Apply intersection reports in arrival order, last one wins
    pub fn apply(&mut self, entries: &[IntersectionEntry<String>]) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if !self.knows(&entry.target) {
                continue;
            }
            self.set(&entry.target);
        }
    }

    /// Mark a section active after an explicit navigation
    pub fn activate(&mut self, id: &str) -> Result<()> {
        if !self.knows(id) {
            return Err(NavError::UnknownSection(id.to_string()));
        }
        self.set(id);
        Ok(())
    }

    fn set(&mut self, id: &str) {
        if self.active.as_deref() == Some(id) {
            return;
        }
        tracing::debug!(section = %id, "Active section changed");
        self.active = Some(id.to_string());
    }
}
