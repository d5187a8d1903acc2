//! Raw request parameters to validated engine inputs.
//!
//! The engine only accepts validated integers and typed criteria; this is
//! where string-to-int coercion, default filling, and normalization of
//! negative or malformed values happen.

use crate::engine::{
    DEFAULT_PAGE_LIMIT, DEFAULT_SEARCH_LIMIT, DEFAULT_SORT_FIELD, FilterCriteria, SortOrder,
};

/// Listing parameters as the caller supplied them, all optional strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub tag: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
}

/// Validated listing inputs ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub criteria: FilterCriteria,
    pub sort_field: String,
    pub order: SortOrder,
    pub offset: usize,
    pub limit: usize,
}

impl ListParams {
    pub fn resolve(self) -> ListQuery {
        ListQuery {
            criteria: FilterCriteria {
                category: self.category,
                difficulty: self.difficulty,
                tag: self.tag,
            },
            sort_field: self
                .sort
                .unwrap_or_else(|| DEFAULT_SORT_FIELD.to_string()),
            order: self
                .order
                .as_deref()
                .map(SortOrder::parse)
                .unwrap_or_default(),
            offset: coerce_index(self.offset.as_deref(), 0),
            limit: coerce_index(self.limit.as_deref(), DEFAULT_PAGE_LIMIT),
        }
    }
}

/// Parse a non-negative integer; absent, non-numeric, or negative input
/// falls back to `default`.
pub fn coerce_index(raw: Option<&str>, default: usize) -> usize {
    match raw {
        None => default,
        Some(value) => value
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|n| *n >= 0)
            .map(|n| n as usize)
            .unwrap_or(default),
    }
}

/// Search result cap, defaulting to 20.
pub fn search_limit(raw: Option<&str>) -> usize {
    coerce_index(raw, DEFAULT_SEARCH_LIMIT)
}
