//! In-memory catalog and query engine for CLI tool guides.
//!
//! A read-only tools index (`data/tools-index.json` by default) is loaded
//! once into an immutable snapshot held by `CatalogStore`; every query
//! operation — filter, sort, paginate, ranked search, aggregate stats,
//! single and bulk lookup — is a pure function over that snapshot. The
//! `boundary` module owns parameter coercion, response envelopes, and error
//! translation; the binaries are thin callers on top of it.

pub mod boundary;
pub mod catalog;
pub mod engine;
pub mod error;

pub use catalog::{
    CatalogSnapshot, CatalogStore, CategoryMap, DEFAULT_INDEX_PATH, ENV_INDEX_PATH, HealthStatus,
    ToolRecord, load_index_from_path, resolve_index_path,
};
pub use engine::{
    BulkEntry, CatalogStats, CategorySummary, DEFAULT_PAGE_LIMIT, DEFAULT_SEARCH_LIMIT,
    DEFAULT_SORT_FIELD, FilterCriteria, Page, RELATED_LIMIT, SearchHit, SortOrder, aggregate,
    bulk_lookup, categories_with_counts, filter, find_by_name, paginate, random_pick, related,
    search, sort_tools,
};
pub use error::{QueryError, QueryResult};
