//! Async Channels
//!
//! Groups the async channel receivers used by the App for background tasks.

use tokio::sync::oneshot;

use folio_core::PagedDocument;

/// Result of a background document load
pub struct DocumentUpdate {
    pub result: Result<PagedDocument, String>,
}

/// Container for all async channel receivers
#[derive(Default)]
pub struct AsyncChannels {
    /// Paginated document load result receiver
    pub document: Option<oneshot::Receiver<DocumentUpdate>>,
}

impl AsyncChannels {
    /// Create new empty channels container
    pub fn new() -> Self {
        Self::default()
    }
}
