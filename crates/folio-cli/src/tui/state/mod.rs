//! App State Components
//!
//! Per-route view state plus the shared scroll and layout bookkeeping.

mod home;
mod layout;
mod resume;
mod scroll;

pub use home::{HomeView, SectionLayout};
pub use layout::LayoutState;
pub use resume::{DocumentSource, ResumeView};
pub use scroll::ScrollState;
