//! Aggregate statistics over the full catalog.

use crate::catalog::CatalogSnapshot;
use serde::Serialize;
use std::collections::BTreeMap;

/// Count tables computed over one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_tools: usize,
    pub category_counts: BTreeMap<String, usize>,
    /// Records without a difficulty contribute no entry.
    pub difficulty_counts: BTreeMap<String, usize>,
    /// Each tag in each record's list increments its own count.
    pub tag_counts: BTreeMap<String, usize>,
    pub total_categories: usize,
    pub category_keys: Vec<String>,
}

/// Deterministic pure function of the snapshot; O(n * t) for n tools with
/// t tags each.
pub fn aggregate(snapshot: &CatalogSnapshot) -> CatalogStats {
    let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut difficulty_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut tag_counts: BTreeMap<String, usize> = BTreeMap::new();

    for tool in &snapshot.tools {
        *category_counts.entry(tool.category.clone()).or_default() += 1;
        if let Some(difficulty) = &tool.difficulty {
            *difficulty_counts.entry(difficulty.clone()).or_default() += 1;
        }
        for tag in tool.tags() {
            *tag_counts.entry(tag.clone()).or_default() += 1;
        }
    }

    CatalogStats {
        total_tools: snapshot.tools.len(),
        category_counts,
        difficulty_counts,
        tag_counts,
        total_categories: snapshot.categories.len(),
        category_keys: snapshot.categories.keys().cloned().collect(),
    }
}

/// One category key with its display name and tool count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub key: String,
    pub name: String,
    pub count: usize,
}

/// Every key in the category map with its per-category tool count, in key
/// order. Keys with no tools report zero; tools referencing unknown keys
/// are simply absent here.
pub fn categories_with_counts(snapshot: &CatalogSnapshot) -> Vec<CategorySummary> {
    snapshot
        .categories
        .iter()
        .map(|(key, name)| CategorySummary {
            key: key.clone(),
            name: name.clone(),
            count: snapshot
                .tools
                .iter()
                .filter(|tool| tool.category == *key)
                .count(),
        })
        .collect()
}
