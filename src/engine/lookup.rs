//! Single, related, and bulk lookup by tool name.

use crate::catalog::ToolRecord;
use crate::error::{QueryError, QueryResult};
use serde_json::Value;

/// Cap on related tools attached to a single lookup.
pub const RELATED_LIMIT: usize = 3;

/// Case-insensitive exact match on `name`.
///
/// Duplicate names resolve to the first record in catalog order. Fails
/// with `NotFound` on a miss; the boundary layer suggests search as the
/// fallback.
pub fn find_by_name<'a>(tools: &'a [ToolRecord], name: &str) -> QueryResult<&'a ToolRecord> {
    let needle = name.to_lowercase();
    tools
        .iter()
        .find(|tool| tool.name.to_lowercase() == needle)
        .ok_or_else(|| QueryError::NotFound(name.to_string()))
}

/// Up to three companions sharing the tool's category, first encountered in
/// catalog order, never the tool itself.
pub fn related<'a>(tool: &ToolRecord, tools: &'a [ToolRecord]) -> Vec<&'a ToolRecord> {
    tools
        .iter()
        .filter(|candidate| candidate.category == tool.category && candidate.name != tool.name)
        .take(RELATED_LIMIT)
        .collect()
}

/// Outcome of one bulk-lookup entry.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkEntry<'a> {
    Found(&'a ToolRecord),
    /// Carries the requested name back so callers can correlate misses.
    Missing(String),
}

impl BulkEntry<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, BulkEntry::Found(_))
    }
}

/// Resolve each requested name, in request order.
///
/// `names` must be a JSON array of strings; anything else fails with
/// `InvalidInput` before any lookup runs.
pub fn bulk_lookup<'a>(tools: &'a [ToolRecord], names: &Value) -> QueryResult<Vec<BulkEntry<'a>>> {
    let Some(items) = names.as_array() else {
        return Err(QueryError::InvalidInput(
            "expected a \"names\" array".to_string(),
        ));
    };
    let mut requested = Vec::with_capacity(items.len());
    for item in items {
        let Some(name) = item.as_str() else {
            return Err(QueryError::InvalidInput(
                "\"names\" entries must be strings".to_string(),
            ));
        };
        requested.push(name);
    }

    Ok(requested
        .into_iter()
        .map(|name| match find_by_name(tools, name) {
            Ok(tool) => BulkEntry::Found(tool),
            Err(_) => BulkEntry::Missing(name.to_string()),
        })
        .collect())
}
