//! # Configuration
//!
//! placez configuration is loaded with [`confique`] from layered sources.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `PLACEZ_DATA_DIR`, `PLACEZ_DEFAULT_SORT`.
//! 2. **Config file**: `placez.toml` in the OS-appropriate config directory
//!    (via the `directories` crate).
//! 3. **Compiled defaults**: built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Where the JSON blobs are stored |
//! | `default_sort` | `name` | Sort used when a listing does not ask for one |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{PlacezError, Result};
use crate::query::SortKey;

pub const CONFIG_FILE: &str = "placez.toml";

/// Configuration for placez, stored in `placez.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlacezConfig {
    /// Directory holding the place, statistics and credential files.
    /// When absent, the platform data directory is used.
    #[config(env = "PLACEZ_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Sort key for listings: name, rating, visitors or date.
    #[config(env = "PLACEZ_DEFAULT_SORT", default = "name")]
    pub default_sort: String,
}

impl Default for PlacezConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_sort: "name".to_string(),
        }
    }
}

impl PlacezConfig {
    /// Loads from the environment and `<config_dir>/placez.toml`.
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(config_dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| PlacezError::Config(e.to_string()))
    }

    /// Like [`load`](Self::load), but a broken config file yields the defaults.
    pub fn load_or_default(config_dir: &Path) -> Self {
        Self::load(config_dir).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable configuration");
            Self::default()
        })
    }

    pub fn default_sort(&self) -> SortKey {
        SortKey::parse(&self.default_sort)
    }
}
