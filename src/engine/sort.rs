//! Ordering and page slicing over a filtered view.

use crate::catalog::ToolRecord;
use serde_json::Value;

pub const DEFAULT_SORT_FIELD: &str = "name";
pub const DEFAULT_PAGE_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Exactly `"desc"` sorts descending; anything else is ascending.
    pub fn parse(raw: &str) -> Self {
        if raw == "desc" { Self::Desc } else { Self::Asc }
    }
}

/// Sort by a string-valued field (default `name`); records missing the
/// field compare as empty strings.
///
/// Keys compare case-insensitively via Unicode lowercase. The sort is
/// stable, so records with equal keys keep their input order; `Desc` only
/// reverses the comparison sign and leaves ties untouched.
pub fn sort_tools<'a>(
    mut tools: Vec<&'a ToolRecord>,
    field: &str,
    order: SortOrder,
) -> Vec<&'a ToolRecord> {
    tools.sort_by(|a, b| {
        let left = string_field(a, field).to_lowercase();
        let right = string_field(b, field).to_lowercase();
        let ordering = left.cmp(&right);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    tools
}

/// String value of `field`, reaching into the pass-through fields for keys
/// outside the fixed schema.
fn string_field<'t>(tool: &'t ToolRecord, field: &str) -> &'t str {
    match field {
        "name" => &tool.name,
        "category" => &tool.category,
        "difficulty" => tool.difficulty.as_deref().unwrap_or(""),
        "description" => &tool.description,
        "installation" => &tool.installation,
        other => tool
            .extra
            .get(other)
            .and_then(Value::as_str)
            .unwrap_or(""),
    }
}

/// One page of a tool sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub page: Vec<&'a ToolRecord>,
    pub total: usize,
    pub has_more: bool,
}

/// Contiguous slice `[offset, offset + limit)` clamped to the sequence
/// bounds. `total` counts the pre-slice sequence; `has_more` is true iff
/// records remain past the slice.
pub fn paginate<'a>(tools: Vec<&'a ToolRecord>, offset: usize, limit: usize) -> Page<'a> {
    let total = tools.len();
    let has_more = offset.saturating_add(limit) < total;
    let page = tools.into_iter().skip(offset).take(limit).collect();
    Page {
        page,
        total,
        has_more,
    }
}
