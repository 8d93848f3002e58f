//! Utilities for the TUI
//!
//! Common helper functions and types used throughout the TUI.

mod channels;
mod text;

pub use channels::{AsyncChannels, DocumentUpdate};
pub use text::{centered_offset, truncate_ellipsis};
