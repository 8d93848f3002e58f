//! Terminal User Interface for Folio

pub mod app;
pub mod components;
pub mod content;
pub mod handlers;
pub mod polling;
pub mod router;
pub mod state;
pub mod theme;
pub mod utils;

// Re-exports
pub use app::{App, AppOptions};
pub use state::DocumentSource;
