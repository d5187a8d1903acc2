// Response envelope shapes and error translation.

#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use common::{sample_index_json, sample_snapshot, write_index};
use serde_json::json;
use toolindex::boundary::{
    BulkResponse, CategoriesResponse, ErrorResponse, HealthResponse, InstallResponse, ListParams,
    ListResponse, SearchResponse, StatsResponse, ToolWithRelated, status_for,
};
use toolindex::{
    CatalogStore, QueryError, aggregate, bulk_lookup, categories_with_counts, filter, find_by_name,
    load_index_from_path, paginate, related, search, sort_tools,
};

#[test]
fn list_response_mirrors_the_original_shape() -> Result<()> {
    let snapshot = sample_snapshot();
    let query = ListParams {
        category: Some("networking".to_string()),
        limit: Some("1".to_string()),
        ..Default::default()
    }
    .resolve();

    let filtered = filter(&snapshot.tools, &query.criteria);
    let sorted = sort_tools(filtered, &query.sort_field, query.order);
    let page = paginate(sorted, query.offset, query.limit);
    let body = serde_json::to_value(ListResponse::new(
        page,
        &query.criteria,
        query.offset,
        query.limit,
    ))?;

    assert_eq!(body["pagination"]["total"], 2);
    assert_eq!(body["pagination"]["limit"], 1);
    assert_eq!(body["pagination"]["offset"], 0);
    assert_eq!(body["pagination"]["hasMore"], true);
    assert_eq!(body["filters"]["category"], "networking");
    // Absent criteria vanish from the echo instead of serializing as null.
    assert!(body["filters"].get("difficulty").is_none());
    assert_eq!(body["tools"][0]["name"], "curl");
    Ok(())
}

#[test]
fn scored_results_flatten_the_record() -> Result<()> {
    let snapshot = sample_snapshot();
    let hits = search(&snapshot.tools, "wget")?;
    let body = serde_json::to_value(SearchResponse::new("wget", hits, 20))?;

    assert_eq!(body["query"], "wget");
    assert_eq!(body["total"], 1);
    let first = &body["results"][0];
    assert_eq!(first["name"], "wget");
    assert_eq!(first["relevanceScore"], 100);
    // Pass-through fields ride along in search results too.
    assert_eq!(first["homepage"], "https://www.gnu.org/software/wget/");
    Ok(())
}

#[test]
fn show_response_embeds_related_tools() -> Result<()> {
    let snapshot = sample_snapshot();
    let tool = find_by_name(&snapshot.tools, "wget")?;
    let related = related(tool, &snapshot.tools);
    let body = serde_json::to_value(ToolWithRelated { tool, related })?;

    assert_eq!(body["name"], "wget");
    assert_eq!(body["related"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(body["related"][0]["name"], "curl");
    Ok(())
}

#[test]
fn bulk_response_carries_found_flags_and_counters() -> Result<()> {
    let snapshot = sample_snapshot();
    let entries = bulk_lookup(&snapshot.tools, &json!(["wget", "missing"]))?;
    let body = serde_json::to_value(BulkResponse::new(entries))?;

    assert_eq!(body["requested"], 2);
    assert_eq!(body["found"], 1);
    assert_eq!(body["results"][0]["found"], true);
    assert_eq!(body["results"][0]["name"], "wget");
    assert_eq!(body["results"][0]["installation"], "brew install wget");
    assert_eq!(body["results"][1]["found"], false);
    assert_eq!(body["results"][1]["name"], "missing");
    assert!(body["results"][1].get("installation").is_none());
    Ok(())
}

#[test]
fn stats_response_uses_the_by_prefixed_tables() -> Result<()> {
    let snapshot = sample_snapshot();
    let stats = aggregate(&snapshot);
    let body = serde_json::to_value(StatsResponse::new(stats, &snapshot, None))?;

    assert_eq!(body["tools"]["total"], 3);
    assert_eq!(body["tools"]["byCategory"]["networking"], 2);
    assert_eq!(body["tools"]["byDifficulty"]["beginner"], 1);
    assert_eq!(body["tools"]["byTags"]["network"], 2);
    assert_eq!(body["categories"]["total"], 2);
    assert_eq!(body["metadata"]["source"], "fixture");
    assert!(body.get("lastUpdate").is_none());
    Ok(())
}

#[test]
fn categories_response_pairs_names_with_counts() -> Result<()> {
    let snapshot = sample_snapshot();
    let body = serde_json::to_value(CategoriesResponse::new(categories_with_counts(&snapshot)))?;
    assert_eq!(body["total"], 2);
    assert_eq!(body["categories"][0]["key"], "networking");
    assert_eq!(body["categories"][0]["name"], "Networking");
    assert_eq!(body["categories"][0]["count"], 2);
    Ok(())
}

#[test]
fn install_response_surfaces_the_command() -> Result<()> {
    let snapshot = sample_snapshot();
    let tool = find_by_name(&snapshot.tools, "JQ")?;
    let body = serde_json::to_value(InstallResponse::new(tool))?;
    assert_eq!(body["tool"], "jq");
    assert_eq!(body["command"], "brew install jq");
    assert_eq!(body["instructions"].as_array().map(|a| a.len()), Some(3));
    Ok(())
}

#[test]
fn health_response_flattens_the_store_signal() -> Result<()> {
    let store = CatalogStore::new();
    let body = serde_json::to_value(HealthResponse::new(store.health()))?;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["dataLoaded"], false);
    assert!(body.get("lastUpdate").is_none());

    let file = write_index(&sample_index_json())?;
    store.set(load_index_from_path(file.path())?);
    let body = serde_json::to_value(HealthResponse::new(store.health()))?;
    assert_eq!(body["dataLoaded"], true);
    assert!(body.get("lastUpdate").is_some());
    Ok(())
}

#[test]
fn engine_errors_map_to_distinct_status_signals() {
    assert_eq!(status_for(&QueryError::Uninitialized), 503);
    assert_eq!(status_for(&QueryError::NotFound("x".to_string())), 404);
    assert_eq!(status_for(&QueryError::EmptyQuery), 400);
    assert_eq!(status_for(&QueryError::InvalidInput("x".to_string())), 400);
}

#[test]
fn not_found_errors_suggest_search() -> Result<()> {
    let envelope = ErrorResponse::from_error(&QueryError::NotFound("htop".to_string()));
    let body = serde_json::to_value(&envelope)?;
    assert_eq!(body["status"], 404);
    assert!(body["error"].as_str().unwrap().contains("htop"));
    assert!(body["suggestion"].as_str().unwrap().contains("search"));

    let envelope = ErrorResponse::from_error(&QueryError::EmptyQuery);
    let body = serde_json::to_value(&envelope)?;
    assert!(body.get("suggestion").is_none());
    Ok(())
}
