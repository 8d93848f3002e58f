//! Rectangles, root margins, and rendered regions
//!
//! All coordinates are viewport-relative unless stated otherwise, matching
//! what a layout engine reports for an element's bounding box.

use serde::{Deserialize, Serialize};

use crate::error::{NavError, Result};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Overlapping rectangle, if the two touch at all
    ///
    /// Edge-adjacent rectangles intersect with zero area, which keeps
    /// zero-height targets observable.
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < left || bottom < top {
            return None;
        }
        Some(Bounds::new(left, top, right - left, bottom - top))
    }

    /// Grow (positive) or shrink (negative) by a root margin
    pub fn expand(&self, margin: &RootMargin) -> Bounds {
        let top = margin.top.resolve(self.height);
        let right = margin.right.resolve(self.width);
        let bottom = margin.bottom.resolve(self.height);
        let left = margin.left.resolve(self.width);

        Bounds::new(
            self.x - left,
            self.y - top,
            self.width + left + right,
            self.height + top + bottom,
        )
    }
}

/// A single margin length, absolute or relative to the root's size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl MarginLength {
    fn resolve(&self, extent: f64) -> f64 {
        match *self {
            MarginLength::Px(px) => px,
            MarginLength::Percent(pct) => extent * pct / 100.0,
        }
    }
}

impl Default for MarginLength {
    fn default() -> Self {
        MarginLength::Px(0.0)
    }
}

/// Margin applied to an observer's root before intersecting
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl RootMargin {
    /// Vertical band that omits `top_percent` and `bottom_percent` of the root
    pub fn band(top_percent: f64, bottom_percent: f64) -> Self {
        Self {
            top: MarginLength::Percent(-top_percent),
            right: MarginLength::Px(0.0),
            bottom: MarginLength::Percent(-bottom_percent),
            left: MarginLength::Px(0.0),
        }
    }
}

/// A named, rendered area of the document
///
/// Produced fresh by the layout on every observation; the core never caches it.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedRegion {
    pub id: String,
    /// Top edge relative to the viewport
    pub bounding_top: f64,
    pub bounding_height: f64,
}

impl ObservedRegion {
    pub fn new(id: impl Into<String>, bounding_top: f64, bounding_height: f64) -> Self {
        Self {
            id: id.into(),
            bounding_top,
            bounding_height: bounding_height.max(0.0),
        }
    }

    /// Top edge in document coordinates
    pub fn absolute_top(&self, scroll_y: f64) -> f64 {
        self.bounding_top + scroll_y
    }

    /// Full-width box inside a viewport of the given width
    pub fn bounds(&self, viewport_width: f64) -> Bounds {
        Bounds::new(0.0, self.bounding_top, viewport_width, self.bounding_height)
    }
}

/// Lookup of rendered regions by id
pub trait RegionSource {
    fn region(&self, id: &str) -> Option<ObservedRegion>;

    /// Like `region`, with a missing region reported as an error
    fn require(&self, id: &str) -> Result<ObservedRegion> {
        self.region(id)
            .ok_or_else(|| NavError::MissingRegion(id.to_string()))
    }
}

impl RegionSource for [ObservedRegion] {
    fn region(&self, id: &str) -> Option<ObservedRegion> {
        self.iter().find(|r| r.id == id).cloned()
    }
}

impl RegionSource for Vec<ObservedRegion> {
    fn region(&self, id: &str) -> Option<ObservedRegion> {
        self.as_slice().region(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_keeps_middle_forty_percent() {
        let viewport = Bounds::new(0.0, 0.0, 1200.0, 1000.0);
        let band = viewport.expand(&RootMargin::band(30.0, 30.0));

        assert_eq!(band.y, 300.0);
        assert_eq!(band.height, 400.0);
        assert_eq!(band.width, 1200.0);
    }

    #[test]
    fn test_intersection() {
        let a = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let b = Bounds::new(50.0, 50.0, 100.0, 100.0);
        let overlap = a.intersection(&b).unwrap();
        assert_eq!(overlap.area(), 2500.0);

        let far = Bounds::new(0.0, 300.0, 100.0, 10.0);
        assert!(a.intersection(&far).is_none());
    }

    #[test]
    fn test_region_lookup_skips_unknown() {
        let regions = vec![ObservedRegion::new("projects", 120.0, 400.0)];
        assert!(regions.region("projects").is_some());
        assert!(regions.region("about").is_none());

        let err = regions.require("about").unwrap_err();
        assert!(err.is_silent());
    }
}
