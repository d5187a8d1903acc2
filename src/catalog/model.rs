//! Tools-index data model and loader.
//!
//! Types here mirror the on-disk `tools-index.json` shape: a flat list of
//! tool records, a category-key-to-display-name map, and free-form
//! metadata. Unknown per-tool fields ride along in `extra` and are echoed
//! back unmodified on every output path.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Category key to human-readable display name.
pub type CategoryMap = BTreeMap<String, String>;

/// One catalog entry. `name` identifies the tool; duplicates are tolerated
/// and resolve to the first record in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub description: String,
    pub installation: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ToolRecord {
    /// Tag list with absent treated as empty.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// One immutable, point-in-time instance of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub tools: Vec<ToolRecord>,
    #[serde(default)]
    pub categories: CategoryMap,
    #[serde(default)]
    pub metadata: serde_json::Map<String, Value>,
}

/// Parse a tools index from disk.
///
/// Rejects records with empty names; duplicate names only warn because
/// lookups resolve them deterministically (first match wins). Referential
/// integrity between `category` values and the category map is assumed,
/// not enforced.
pub fn load_index_from_path(path: &Path) -> Result<CatalogSnapshot> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading tools index {}", path.display()))?;
    let snapshot: CatalogSnapshot = serde_json::from_str(&data)
        .with_context(|| format!("parsing tools index {}", path.display()))?;
    check_names(&snapshot)?;
    log::info!(
        "loaded {} tools from {}",
        snapshot.tools.len(),
        path.display()
    );
    Ok(snapshot)
}

fn check_names(snapshot: &CatalogSnapshot) -> Result<()> {
    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for tool in &snapshot.tools {
        if tool.name.trim().is_empty() {
            bail!("encountered tool with no name");
        }
        let folded = tool.name.to_lowercase();
        if !seen.insert(folded.clone()) {
            duplicates.insert(folded);
        }
    }
    if !duplicates.is_empty() {
        log::warn!(
            "tools index contains duplicate names (first match wins): {}",
            duplicates.into_iter().collect::<Vec<_>>().join(", ")
        );
    }
    Ok(())
}
