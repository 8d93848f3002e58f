//! Navigation and pagination error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the navigation core
///
/// None of these are fatal to the host: missing regions degrade to "no scroll"
/// or "no highlight", and document failures become a terminal display state.
#[derive(Debug, Error)]
pub enum NavError {
    /// A navigation or registration target is not rendered in the current view
    #[error("region not found: {0}")]
    MissingRegion(String),

    /// Optimistic activation of a section outside the registered set
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// Navigation target violates its shape (route without a path)
    #[error("invalid navigation target: {0}")]
    InvalidTarget(String),

    /// Paginated document could not be loaded or parsed
    #[error("failed to load document {}: {reason}", path.display())]
    DocumentLoad { path: PathBuf, reason: String },

    /// Configuration file could not be parsed
    #[error("config error: {0}")]
    Config(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl NavError {
    /// Whether the error is expected during route transitions and should be
    /// skipped without surfacing anything to the user
    pub fn is_silent(&self) -> bool {
        matches!(self, NavError::MissingRegion(_))
    }
}

impl From<toml::de::Error> for NavError {
    fn from(err: toml::de::Error) -> Self {
        NavError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_region_is_silent() {
        assert!(NavError::MissingRegion("projects".into()).is_silent());
        assert!(!NavError::UnknownSection("footer".into()).is_silent());
    }

    #[test]
    fn test_document_error_message() {
        let err = NavError::DocumentLoad {
            path: PathBuf::from("resume.txt"),
            reason: "document has no pages".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load document resume.txt: document has no pages"
        );
    }
}
