//! App Configuration

use log::LevelFilter;

/// localStorage key the list is saved under
pub const STORAGE_KEY: &str = "todos-v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
