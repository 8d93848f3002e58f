//! Document load polling

use tokio::sync::oneshot::error::TryRecvError;

use super::PollResult;
use crate::tui::components::{Toast, ToastQueue};
use crate::tui::state::ResumeView;
use crate::tui::utils::AsyncChannels;

/// Poll the document load channel and record the outcome
pub fn poll_document_load(
    channels: &mut AsyncChannels,
    resume: &mut ResumeView,
    toasts: &mut ToastQueue,
) -> PollResult {
    let mut result = PollResult::new();
    let Some(mut rx) = channels.document.take() else {
        return result;
    };

    match rx.try_recv() {
        Ok(update) => {
            result.needs_redraw = true;
            match update.result {
                Ok(document) => resume.on_loaded(document),
                Err(reason) => {
                    toasts.push(Toast::error("Failed to load document"));
                    resume.on_failed(reason);
                }
            }
        }
        Err(TryRecvError::Empty) => {
            // Still loading - put it back
            channels.document = Some(rx);
        }
        Err(TryRecvError::Closed) => {
            result.needs_redraw = true;
            toasts.push(Toast::error("Failed to load document"));
            resume.on_failed("document loader stopped unexpectedly");
        }
    }

    result
}
