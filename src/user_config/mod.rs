mod loader;
pub use loader::{load_user_config, load_user_config_from};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use crate::utils::get_data_dir;
#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
/// Default number of items seeded at startup.
pub const DEFAULT_ITEM_COUNT: u32 = 1_000_000;
/// Default page size when a request omits `limit` or sends garbage.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;
/// Default upper bound on a single page.
pub const DEFAULT_MAX_PAGE_LIMIT: u32 = 1000;
/// Default gap below which ordering keys are renumbered.
pub const DEFAULT_MIN_GAP: f64 = 1e-9;

const fn default_item_count() -> u32 {
    DEFAULT_ITEM_COUNT
}
const fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}
const fn default_max_limit() -> u32 {
    DEFAULT_MAX_PAGE_LIMIT
}
const fn default_min_gap() -> f64 {
    DEFAULT_MIN_GAP
}

/// Item store settings (`[store]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default = "default_item_count")]
    pub item_count: u32,
}
impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_ITEM_COUNT,
        }
    }
}

/// Pagination settings (`[query]` table).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct QueryConfig {
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
}
impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_LIMIT,
            max_limit: DEFAULT_MAX_PAGE_LIMIT,
        }
    }
}

/// Reorder settings (`[reorder]` table).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReorderConfig {
    #[serde(default = "default_min_gap")]
    pub min_gap: f64,
}
impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            min_gap: DEFAULT_MIN_GAP,
        }
    }
}

/// Top-level user configuration, deserialized from `~/.list-order/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub reorder: ReorderConfig,
}
/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}
#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;
