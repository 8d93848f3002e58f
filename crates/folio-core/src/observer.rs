//! Intersection observation over plain rectangles
//!
//! The trackers never look at a layout engine directly. Each frame the host
//! hands the observer the root's bounds plus a lookup for target bounds, and
//! the observer reports which targets crossed their visibility threshold
//! since the previous pass. Like the platform primitive it models, the first
//! pass after `observe` always reports the target's state.

use crate::geometry::{Bounds, RootMargin};

/// Observer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Margin applied to the root before intersecting
    pub root_margin: RootMargin,
    /// Visible fraction of the target required to count as intersecting.
    /// Zero means "any overlap at all".
    pub threshold: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root_margin: RootMargin::default(),
            threshold: 0.0,
        }
    }
}

/// A single observation report
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<K> {
    pub target: K,
    pub is_intersecting: bool,
    /// Visible fraction of the target in `[0, 1]`
    pub intersection_ratio: f64,
}

impl<K> IntersectionEntry<K> {
    pub fn new(target: K, is_intersecting: bool, intersection_ratio: f64) -> Self {
        Self {
            target,
            is_intersecting,
            intersection_ratio,
        }
    }
}

#[derive(Debug)]
struct Observation<K> {
    target: K,
    last_intersecting: Option<bool>,
}

/// Tracks a set of targets against a root and reports threshold crossings
#[derive(Debug)]
pub struct IntersectionObserver<K> {
    options: ObserverOptions,
    observations: Vec<Observation<K>>,
}

impl<K: Clone + PartialEq> IntersectionObserver<K> {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            observations: Vec::new(),
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Start observing a target. Observing the same target twice is a no-op.
    pub fn observe(&mut self, target: K) {
        if self.is_observing(&target) {
            return;
        }
        self.observations.push(Observation {
            target,
            last_intersecting: None,
        });
    }

    pub fn unobserve(&mut self, target: &K) {
        self.observations.retain(|o| &o.target != target);
    }

    /// Stop observing every target
    pub fn disconnect(&mut self) {
        self.observations.clear();
    }

    pub fn is_observing(&self, target: &K) -> bool {
        self.observations.iter().any(|o| &o.target == target)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Run one observation pass
    ///
    /// Targets the lookup cannot locate are left untouched; they report again
    /// once they reappear. Entries are returned in observation order.
    pub fn compute<F>(&mut self, root: Bounds, mut locate: F) -> Vec<IntersectionEntry<K>>
    where
        F: FnMut(&K) -> Option<Bounds>,
    {
        let root = root.expand(&self.options.root_margin);
        let threshold = self.options.threshold;
        let mut entries = Vec::new();

        for observation in &mut self.observations {
            let Some(target) = locate(&observation.target) else {
                continue;
            };

            let overlap = root.intersection(&target);
            let ratio = match overlap {
                Some(o) if target.area() > 0.0 => (o.area() / target.area()).clamp(0.0, 1.0),
                Some(_) => 1.0,
                None => 0.0,
            };
            let is_intersecting = if threshold <= 0.0 {
                overlap.is_some()
            } else {
                ratio >= threshold
            };

            if observation.last_intersecting != Some(is_intersecting) {
                observation.last_intersecting = Some(is_intersecting);
                entries.push(IntersectionEntry::new(
                    observation.target.clone(),
                    is_intersecting,
                    ratio,
                ));
            }
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Bounds {
        Bounds::new(0.0, 0.0, 100.0, 1000.0)
    }

    #[test]
    fn test_initial_pass_reports_every_located_target() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe("a");
        observer.observe("b");
        observer.observe("missing");

        let entries = observer.compute(viewport(), |id| match *id {
            "a" => Some(Bounds::new(0.0, 100.0, 100.0, 200.0)),
            "b" => Some(Bounds::new(0.0, 2000.0, 100.0, 200.0)),
            _ => None,
        });

        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_intersecting);
        assert!(!entries[1].is_intersecting);
    }

    #[test]
    fn test_reports_only_crossings() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(1usize);

        let inside = |_: &usize| Some(Bounds::new(0.0, 10.0, 100.0, 10.0));
        assert_eq!(observer.compute(viewport(), inside).len(), 1);
        assert!(observer.compute(viewport(), inside).is_empty());

        let outside = |_: &usize| Some(Bounds::new(0.0, 5000.0, 100.0, 10.0));
        let entries = observer.compute(viewport(), outside);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_intersecting);
    }

    #[test]
    fn test_threshold_uses_visible_fraction() {
        let mut observer = IntersectionObserver::new(ObserverOptions {
            threshold: 0.5,
            ..Default::default()
        });
        observer.observe(1usize);

        // 40% visible
        let entries = observer.compute(viewport(), |_| {
            Some(Bounds::new(0.0, 800.0, 100.0, 500.0))
        });
        assert!(!entries[0].is_intersecting);
        assert!((entries[0].intersection_ratio - 0.4).abs() < 1e-9);

        // 60% visible
        let entries = observer.compute(viewport(), |_| {
            Some(Bounds::new(0.0, 700.0, 100.0, 500.0))
        });
        assert!(entries[0].is_intersecting);
    }

    #[test]
    fn test_disconnect_and_duplicate_observe() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe("a");
        observer.observe("a");
        assert_eq!(observer.len(), 1);

        observer.disconnect();
        assert!(observer.is_empty());
    }
}
