//! Boundary layer between callers and the engine.
//!
//! Owns what the engine refuses to: parsing raw parameters into typed
//! inputs, default filling, response envelope shapes, and the translation
//! of engine failures into caller-facing status signals.

pub mod params;
pub mod response;

pub use params::{ListParams, ListQuery, coerce_index, search_limit};
pub use response::{
    BulkResponse, BulkResult, CategoriesResponse, ErrorResponse, HealthResponse, InstallResponse,
    ListResponse, PaginationInfo, RandomResponse, ScoredTool, SearchResponse, StatsResponse,
    ToolWithRelated, status_for,
};
