//! UI components for the Folio TUI
//!
//! Rendering components: navbar, home sections, paginated pages, status bar,
//! scrollbars, toasts.

pub mod navbar;
pub mod pages;
pub mod scrollbars;
pub mod sections;
pub mod status_bar;
pub mod toast;

pub use navbar::{render_navbar, NavbarView, NAVBAR_HEIGHT};
pub use pages::render_pages;
pub use sections::render_sections;
pub use status_bar::render_status_bar;
pub use toast::{render_toasts, Toast, ToastQueue};
