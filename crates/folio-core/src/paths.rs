//! Platform directories for config and logs

use std::path::PathBuf;

use crate::constants::config::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// `<config dir>/folio`
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME))
}

/// `<config dir>/folio/config.toml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|d| d.join(CONFIG_FILE_NAME))
}

/// `<local data dir>/folio/logs`, falling back to the temp dir
pub fn logs_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(CONFIG_DIR_NAME)
        .join("logs")
}
