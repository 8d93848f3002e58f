//! Paginated document loading
//!
//! Documents are UTF-8 text with pages separated by form feeds. Anything that
//! cannot be read or yields no pages is a load failure; callers surface it as
//! a terminal state instead of retrying.

use std::path::{Path, PathBuf};

use crate::constants::pagination::PAGE_SEPARATOR;
use crate::error::{NavError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedDocument {
    path: PathBuf,
    pages: Vec<String>,
}

impl PagedDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| NavError::DocumentLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let text = String::from_utf8(bytes).map_err(|_| NavError::DocumentLoad {
            path: path.to_path_buf(),
            reason: "not valid UTF-8".to_string(),
        })?;
        Self::parse(path, &text)
    }

    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let mut pages: Vec<String> = text
            .split(PAGE_SEPARATOR)
            .map(|page| page.trim_matches('\n').to_string())
            .collect();

        // A trailing separator does not open another page
        while pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }

        if pages.is_empty() {
            return Err(NavError::DocumentLoad {
                path: path.to_path_buf(),
                reason: "document has no pages".to_string(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            pages,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// 1-based page text
    pub fn page(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
            .map(String::as_str)
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }
}
