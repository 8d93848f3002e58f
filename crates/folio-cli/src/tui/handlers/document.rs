//! Paginated document loading and the external fallback

use std::path::Path;

use tokio::sync::oneshot;

use folio_core::{DocumentStatus, PagedDocument};

use crate::tui::app::App;
use crate::tui::components::Toast;
use crate::tui::content::{SAMPLE_RESUME, SAMPLE_RESUME_NAME};
use crate::tui::polling::{poll_document_load, PollResult};
use crate::tui::state::DocumentSource;
use crate::tui::utils::DocumentUpdate;

impl App {
    /// Load the resume document in the background
    ///
    /// Runs once: a loaded or failed document is never reloaded.
    pub(crate) fn start_document_load(&mut self) {
        if *self.resume.status() != DocumentStatus::Loading || self.channels.document.is_some() {
            return;
        }

        let (tx, rx) = oneshot::channel();
        let source = self.resume.source().clone();
        tracing::info!(document = %source.label(), "Loading document");

        tokio::task::spawn_blocking(move || {
            let result = match &source {
                DocumentSource::Builtin => {
                    PagedDocument::parse(Path::new(SAMPLE_RESUME_NAME), SAMPLE_RESUME)
                }
                DocumentSource::File(path) => PagedDocument::load(path),
            };
            let _ = tx.send(DocumentUpdate {
                result: result.map_err(|e| e.to_string()),
            });
        });
        self.channels.document = Some(rx);
    }

    /// Poll the document channel and size freshly loaded pages
    pub(crate) fn poll_document_load(&mut self) -> PollResult {
        let result = poll_document_load(&mut self.channels, &mut self.resume, &mut self.toasts);
        if result.needs_redraw {
            if let Some(area) = self.layout.pages_area {
                self.resume.layout(area);
            }
        }
        result
    }

    /// Hand the document file to the system viewer
    pub(crate) fn open_document_externally(&mut self) {
        let DocumentSource::File(path) = self.resume.source().clone() else {
            self.show_toast(Toast::error("The built-in resume has no file to open"));
            return;
        };

        match open::that_detached(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Opened document externally");
                self.show_toast(Toast::success(format!("Opened {}", path.display())));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to open document");
                self.show_toast(Toast::error(format!("Could not open document: {}", e)));
            }
        }
    }
}
