//! Equality/membership filtering over a tool sequence.

use crate::catalog::ToolRecord;
use serde::Serialize;

/// Optional constraints combined with logical AND; absent fields impose no
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl FilterCriteria {
    /// Case-sensitive, exact matching; `tag` is a literal membership test
    /// against the record's tag list.
    pub fn matches(&self, tool: &ToolRecord) -> bool {
        if let Some(category) = &self.category {
            if tool.category != *category {
                return false;
            }
        }
        if let Some(difficulty) = &self.difficulty {
            if tool.difficulty.as_deref() != Some(difficulty.as_str()) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !tool.tags().iter().any(|t| t == tag) {
                return false;
            }
        }
        true
    }
}

/// Narrow `tools` to the records satisfying every present predicate,
/// preserving relative order.
pub fn filter<'a>(tools: &'a [ToolRecord], criteria: &FilterCriteria) -> Vec<&'a ToolRecord> {
    tools.iter().filter(|tool| criteria.matches(tool)).collect()
}
