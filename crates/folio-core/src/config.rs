//! Folio configuration
//!
//! Every field has a default, so a config file only needs the keys it changes.
//!
//! ```toml
//! [navigation]
//! navbar_offset = 3.0
//! settle_delay_ms = 100   # omit to wait for regions instead of a timer
//!
//! [pagination]
//! max_page_width = 100.0
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{NavError, Result};
use crate::geometry::RootMargin;
use crate::paths;

/// How a cross-route section navigation waits for the destination to mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleStrategy {
    /// Scroll once the destination view reports its regions registered
    RegionsReady,
    /// Scroll after a fixed delay. Best effort only: layout may still be settling.
    Delay(Duration),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub navbar_offset: f64,
    pub band_top_percent: f64,
    pub band_bottom_percent: f64,
    pub home_route: String,
    pub home_section: String,
    /// Fixed deferral for cross-route scrolls; `None` waits for regions instead
    pub settle_delay_ms: Option<u64>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            navbar_offset: constants::navigation::NAVBAR_OFFSET,
            band_top_percent: constants::navigation::BAND_TOP_PERCENT,
            band_bottom_percent: constants::navigation::BAND_BOTTOM_PERCENT,
            home_route: constants::navigation::HOME_ROUTE.to_string(),
            home_section: constants::navigation::HOME_SECTION.to_string(),
            settle_delay_ms: None,
        }
    }
}

impl NavigationConfig {
    pub fn settle_strategy(&self) -> SettleStrategy {
        match self.settle_delay_ms {
            Some(ms) => SettleStrategy::Delay(Duration::from_millis(ms)),
            None => SettleStrategy::RegionsReady,
        }
    }

    /// Root margin that carves the active band out of the viewport
    pub fn active_band(&self) -> RootMargin {
        RootMargin::band(self.band_top_percent, self.band_bottom_percent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub padding: f64,
    pub max_page_width: f64,
    pub initial_width: f64,
    pub visibility_threshold: f64,
    pub page_gap: f64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            padding: constants::pagination::CONTAINER_PADDING,
            max_page_width: constants::pagination::MAX_PAGE_WIDTH,
            initial_width: constants::pagination::INITIAL_WIDTH,
            visibility_threshold: constants::pagination::VISIBILITY_THRESHOLD,
            page_gap: constants::pagination::PAGE_GAP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub scrolled_threshold: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: constants::progress::SCROLLED_THRESHOLD,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub navigation: NavigationConfig,
    pub pagination: PaginationConfig,
    pub progress: ProgressConfig,
}

impl FolioConfig {
    /// Default config file location (`<config dir>/folio/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        paths::config_file()
    }

    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_over(Self::default(), text)
    }

    /// Parse `text` on top of `base`: keys present in the file win, the rest
    /// keep the base values
    pub fn parse_over(base: FolioConfig, text: &str) -> Result<Self> {
        let overrides: toml::Table = toml::from_str(text)?;
        let toml::Value::Table(mut merged) =
            toml::Value::try_from(base).map_err(|e| NavError::Config(e.to_string()))?
        else {
            return Err(NavError::Config("config did not serialize to a table".into()));
        };
        merge_tables(&mut merged, overrides);

        let config: FolioConfig = toml::Value::Table(merged).try_into()?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::load_over(Self::default(), path)
    }

    pub fn load_over(base: FolioConfig, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::parse_over(base, &text)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        Self::load_or(Self::default(), path)
    }

    /// Like `load_or_default`, with caller-supplied defaults
    pub fn load_or(base: FolioConfig, path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(base),
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(base);
        }
        Self::load_over(base, &path)
    }

    fn validate(&self) -> Result<()> {
        let nav = &self.navigation;
        if nav.band_top_percent < 0.0
            || nav.band_bottom_percent < 0.0
            || nav.band_top_percent + nav.band_bottom_percent >= 100.0
        {
            return Err(NavError::Config(format!(
                "active band margins {}% + {}% leave no band",
                nav.band_top_percent, nav.band_bottom_percent
            )));
        }
        let threshold = self.pagination.visibility_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(NavError::Config(format!(
                "visibility_threshold {} is outside [0, 1]",
                threshold
            )));
        }
        if self.pagination.max_page_width <= 0.0 {
            return Err(NavError::Config("max_page_width must be positive".into()));
        }
        Ok(())
    }
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        let toml::Value::Table(nested) = value else {
            base.insert(key, value);
            continue;
        };
        if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
            merge_tables(existing, nested);
            continue;
        }
        base.insert(key, toml::Value::Table(nested));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FolioConfig::default();
        assert_eq!(config.navigation.navbar_offset, 80.0);
        assert_eq!(config.navigation.settle_strategy(), SettleStrategy::RegionsReady);
        assert_eq!(config.pagination.max_page_width, 800.0);
        assert_eq!(config.pagination.padding, 48.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = FolioConfig::parse(
            r#"
            [navigation]
            navbar_offset = 3.0
            settle_delay_ms = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.navigation.navbar_offset, 3.0);
        assert_eq!(
            config.navigation.settle_strategy(),
            SettleStrategy::Delay(Duration::from_millis(100))
        );
        assert_eq!(config.navigation.home_route, "/");
        assert_eq!(config.pagination.visibility_threshold, 0.5);
    }

    #[test]
    fn test_rejects_empty_band() {
        let err = FolioConfig::parse(
            r#"
            [navigation]
            band_top_percent = 60.0
            band_bottom_percent = 40.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, NavError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pagination]\nmax_page_width = 100.0").unwrap();

        let config = FolioConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.pagination.max_page_width, 100.0);
    }

    #[test]
    fn test_file_overrides_custom_base() {
        let mut base = FolioConfig::default();
        base.navigation.navbar_offset = 3.0;
        base.pagination.padding = 4.0;

        let config = FolioConfig::parse_over(base, "[pagination]\npadding = 6.0").unwrap();
        assert_eq!(config.navigation.navbar_offset, 3.0);
        assert_eq!(config.pagination.padding, 6.0);
        assert_eq!(config.pagination.max_page_width, 800.0);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::load_or_default(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, FolioConfig::default());
    }
}
