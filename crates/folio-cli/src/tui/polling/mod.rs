//! Channel Polling
//!
//! Polls async channels for background task results and updates the
//! matching state.

mod document;

pub use document::poll_document_load;

/// Result of a polling operation that may trigger UI updates
#[derive(Debug, Default)]
pub struct PollResult {
    /// Whether any data was received that requires a redraw
    pub needs_redraw: bool,
}

impl PollResult {
    pub fn new() -> Self {
        Self::default()
    }
}
