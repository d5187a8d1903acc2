//! Free-text matching and relevance ranking.

use crate::catalog::ToolRecord;
use crate::error::{QueryError, QueryResult};

/// Default cap applied by callers after ranking.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

const NAME_EXACT_BONUS: u32 = 100;
const NAME_PREFIX_BONUS: u32 = 50;
const NAME_CONTAINS_BONUS: u32 = 25;
const DESCRIPTION_BONUS: u32 = 10;
const TAG_BONUS: u32 = 15;

/// One search match with its relevance score. The score orders results
/// within a single search call and has no meaning across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub tool: &'a ToolRecord,
    pub score: u32,
}

/// Rank every record matching `query`, highest score first.
///
/// Matching is case-insensitive substring containment against name,
/// description, and each tag; a record is included iff at least one field
/// matches. Ties keep catalog order (stable sort). Callers cap the result
/// count after ranking so the reported total covers the full match set.
pub fn search<'a>(tools: &'a [ToolRecord], query: &str) -> QueryResult<Vec<SearchHit<'a>>> {
    if query.is_empty() {
        return Err(QueryError::EmptyQuery);
    }
    let needle = query.to_lowercase();

    let mut hits: Vec<SearchHit<'a>> = tools
        .iter()
        .filter_map(|tool| {
            let score = relevance(tool, &needle);
            (score > 0).then_some(SearchHit { tool, score })
        })
        .collect();
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(hits)
}

/// Score accumulation for one record. The name bonuses are exclusive
/// tiers (only the highest applicable one counts); description and tag
/// bonuses stack on top.
fn relevance(tool: &ToolRecord, needle: &str) -> u32 {
    let name = tool.name.to_lowercase();
    let mut score = 0;

    if name == needle {
        score += NAME_EXACT_BONUS;
    } else if name.starts_with(needle) {
        score += NAME_PREFIX_BONUS;
    } else if name.contains(needle) {
        score += NAME_CONTAINS_BONUS;
    }

    if tool.description.to_lowercase().contains(needle) {
        score += DESCRIPTION_BONUS;
    }
    if tool
        .tags()
        .iter()
        .any(|tag| tag.to_lowercase().contains(needle))
    {
        score += TAG_BONUS;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::tool;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_query_is_rejected() {
        let tools = vec![tool("wget", "networking", None, &[])];
        assert_eq!(search(&tools, "").unwrap_err(), QueryError::EmptyQuery);
    }

    #[test]
    fn name_bonuses_are_exclusive_tiers() {
        let tools = vec![
            tool("grep", "search", None, &[]),
            tool("grepx", "search", None, &[]),
            tool("ripgrep", "search", None, &[]),
        ];
        let hits = search(&tools, "grep").expect("hits");
        let scored: Vec<(&str, u32)> = hits.iter().map(|h| (h.tool.name.as_str(), h.score)).collect();
        assert_eq!(
            scored,
            vec![("grep", 100), ("grepx", 50), ("ripgrep", 25)]
        );
    }

    #[test]
    fn description_and_tag_bonuses_stack() {
        let mut tools = vec![tool("curl", "networking", None, &["http-client"])];
        tools[0].description = "curl transfers data over http".to_string();

        let hits = search(&tools, "curl").expect("hits");
        assert_eq!(hits[0].score, 100 + 10); // exact name wins the name tier

        let hits = search(&tools, "http").expect("hits");
        assert_eq!(hits[0].score, 10 + 15);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let tools = vec![tool("Wget", "networking", None, &["Network"])];
        let hits = search(&tools, "WGET").expect("hits");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 100);
    }

    #[test]
    fn non_matching_records_are_excluded() {
        let mut tools = vec![
            tool("wget", "networking", None, &["network"]),
            tool("curl", "networking", None, &["network", "http"]),
        ];
        tools[0].description = "download files".to_string();
        tools[1].description = "transfer data".to_string();
        let hits = search(&tools, "get").expect("hits");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].tool.name, "wget");
        assert!(hits[0].score >= 25);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let tools = vec![
            tool("fd", "search", None, &["files"]),
            tool("fzf", "search", None, &["files"]),
        ];
        let hits = search(&tools, "files").expect("hits");
        assert_eq!(hits[0].tool.name, "fd");
        assert_eq!(hits[1].tool.name, "fzf");
        assert_eq!(hits[0].score, hits[1].score);
    }
}
