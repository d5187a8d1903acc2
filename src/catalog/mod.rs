//! Tools-index wiring.
//!
//! This module wraps the tools index on disk (for example
//! `data/tools-index.json`) so callers can load a checked snapshot and hold
//! it behind `CatalogStore`. Types mirror the index fields; query logic
//! lives in `engine` and never touches the filesystem.

pub mod model;
pub mod store;

pub use model::{CatalogSnapshot, CategoryMap, ToolRecord, load_index_from_path};
pub use store::{CatalogStore, HealthStatus};

use std::path::PathBuf;

/// Default relative path to the bundled tools index.
pub const DEFAULT_INDEX_PATH: &str = "data/tools-index.json";

/// Environment override for the index location.
pub const ENV_INDEX_PATH: &str = "TOOLINDEX_DATA";

/// Index path resolution: explicit flag, then `TOOLINDEX_DATA`, then the
/// bundled default.
pub fn resolve_index_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Ok(env_path) = std::env::var(ENV_INDEX_PATH) {
        if !env_path.is_empty() {
            return PathBuf::from(env_path);
        }
    }
    PathBuf::from(DEFAULT_INDEX_PATH)
}
