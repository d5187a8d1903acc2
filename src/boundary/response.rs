//! Caller-facing response envelopes and error translation.
//!
//! Shapes mirror the JSON the query API has always produced: camelCase
//! keys, the filter echo on listings, requested/found counters on bulk
//! responses, and a suggestion to fall back to search on lookup misses.

use crate::catalog::{CatalogSnapshot, HealthStatus, ToolRecord};
use crate::engine::{BulkEntry, CatalogStats, CategorySummary, FilterCriteria, Page, SearchHit};
use crate::error::QueryError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<'a> {
    pub tools: Vec<&'a ToolRecord>,
    pub pagination: PaginationInfo,
    pub filters: &'a FilterCriteria,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}

impl<'a> ListResponse<'a> {
    pub fn new(page: Page<'a>, criteria: &'a FilterCriteria, offset: usize, limit: usize) -> Self {
        Self {
            pagination: PaginationInfo {
                total: page.total,
                limit,
                offset,
                has_more: page.has_more,
            },
            tools: page.page,
            filters: criteria,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub query: String,
    pub results: Vec<ScoredTool<'a>>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredTool<'a> {
    #[serde(flatten)]
    pub tool: &'a ToolRecord,
    pub relevance_score: u32,
}

impl<'a> SearchResponse<'a> {
    /// Caps the result list after ranking; `total` still covers every match.
    pub fn new(query: &str, hits: Vec<SearchHit<'a>>, limit: usize) -> Self {
        let total = hits.len();
        let results = hits
            .into_iter()
            .take(limit)
            .map(|hit| ScoredTool {
                tool: hit.tool,
                relevance_score: hit.score,
            })
            .collect();
        Self {
            query: query.to_string(),
            results,
            total,
        }
    }
}

/// A single tool enriched with up to three same-category companions.
#[derive(Debug, Serialize)]
pub struct ToolWithRelated<'a> {
    #[serde(flatten)]
    pub tool: &'a ToolRecord,
    pub related: Vec<&'a ToolRecord>,
}

#[derive(Debug, Serialize)]
pub struct BulkResponse<'a> {
    pub requested: usize,
    pub found: usize,
    pub results: Vec<BulkResult<'a>>,
}

#[derive(Debug, Serialize)]
pub struct BulkResult<'a> {
    pub found: bool,
    #[serde(flatten)]
    pub tool: Option<&'a ToolRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl<'a> From<BulkEntry<'a>> for BulkResult<'a> {
    fn from(entry: BulkEntry<'a>) -> Self {
        match entry {
            BulkEntry::Found(tool) => Self {
                found: true,
                tool: Some(tool),
                name: None,
            },
            BulkEntry::Missing(name) => Self {
                found: false,
                tool: None,
                name: Some(name),
            },
        }
    }
}

impl<'a> BulkResponse<'a> {
    pub fn new(entries: Vec<BulkEntry<'a>>) -> Self {
        let requested = entries.len();
        let found = entries.iter().filter(|entry| entry.is_found()).count();
        Self {
            requested,
            found,
            results: entries.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategorySummary>,
    pub total: usize,
}

impl CategoriesResponse {
    pub fn new(categories: Vec<CategorySummary>) -> Self {
        let total = categories.len();
        Self { categories, total }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse<'a> {
    pub tools: ToolCounts,
    pub categories: CategoryOverview,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
    pub metadata: &'a serde_json::Map<String, Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCounts {
    pub total: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_difficulty: BTreeMap<String, usize>,
    pub by_tags: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize)]
pub struct CategoryOverview {
    pub total: usize,
    pub list: Vec<String>,
}

impl<'a> StatsResponse<'a> {
    pub fn new(
        stats: CatalogStats,
        snapshot: &'a CatalogSnapshot,
        last_update: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            tools: ToolCounts {
                total: stats.total_tools,
                by_category: stats.category_counts,
                by_difficulty: stats.difficulty_counts,
                by_tags: stats.tag_counts,
            },
            categories: CategoryOverview {
                total: stats.total_categories,
                list: stats.category_keys,
            },
            last_update,
            metadata: &snapshot.metadata,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RandomResponse<'a> {
    pub tool: &'a ToolRecord,
    pub criteria: &'a FilterCriteria,
}

pub const INSTALL_INSTRUCTIONS: [&str; 3] = [
    "Copy the command below",
    "Run it in your terminal",
    "Tool will be installed via Homebrew",
];

#[derive(Debug, Serialize)]
pub struct InstallResponse<'a> {
    pub tool: &'a str,
    pub command: &'a str,
    pub instructions: [&'static str; 3],
}

impl<'a> InstallResponse<'a> {
    pub fn new(tool: &'a ToolRecord) -> Self {
        Self {
            tool: &tool.name,
            command: &tool.installation,
            instructions: INSTALL_INSTRUCTIONS,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub health: HealthStatus,
}

impl HealthResponse {
    pub fn new(health: HealthStatus) -> Self {
        Self {
            status: "healthy",
            timestamp: Utc::now(),
            health,
        }
    }
}

/// Status signal for a failed engine call: service-unavailable before the
/// index loads, not-found for lookup misses, bad-request for caller input
/// errors.
pub fn status_for(err: &QueryError) -> u16 {
    match err {
        QueryError::Uninitialized => 503,
        QueryError::NotFound(_) => 404,
        QueryError::EmptyQuery | QueryError::InvalidInput(_) => 400,
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorResponse {
    pub fn from_error(err: &QueryError) -> Self {
        let suggestion = match err {
            QueryError::NotFound(name) => Some(format!(
                "Use 'toolindex search --query {name}' to find similar tools"
            )),
            _ => None,
        };
        Self {
            status: status_for(err),
            error: err.to_string(),
            suggestion,
        }
    }
}
