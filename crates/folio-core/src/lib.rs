//! Folio Core - Viewport-synchronized navigation and pagination
//!
//! This crate provides the state machines behind the Folio front-end:
//! - Active section tracking against the middle band of the viewport
//! - Scroll target computation and cross-route deferred navigation
//! - Visible page tracking for paginated documents
//! - Navbar scroll progress
//!
//! Hosts feed layout geometry in and read snapshots out; nothing here
//! touches a terminal or a browser.

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod geometry;
pub mod navigator;
pub mod observer;
pub mod pagination;
pub mod paths;
pub mod progress;
pub mod section;

// Re-exports for convenience
pub use config::{FolioConfig, NavigationConfig, PaginationConfig, SettleStrategy};
pub use document::PagedDocument;
pub use error::NavError;
pub use geometry::{Bounds, ObservedRegion, RegionSource, RootMargin};
pub use navigator::{
    scroll_target, NavigationOutcome, NavigationTarget, Router, ScrollBehavior, ScrollGeometry,
    ScrollHost, ScrollNavigator,
};
pub use observer::{IntersectionEntry, IntersectionObserver, ObserverOptions};
pub use pagination::{DocumentStatus, PageStack, PageVisibilityTracker, PaginationState};
pub use progress::ScrollProgress;
pub use section::{Registration, SectionActivityTracker};
