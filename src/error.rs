//! Engine failure taxonomy.
//!
//! Every variant is local and non-fatal; the boundary layer owns mapping
//! them to caller-facing status signals (see `boundary::response`).

use thiserror::Error;

pub type QueryResult<T> = std::result::Result<T, QueryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No snapshot installed yet; recoverable once the loader runs.
    #[error("tools index not loaded")]
    Uninitialized,
    /// Single lookup miss.
    #[error("tool '{0}' not found")]
    NotFound(String),
    /// Search called without a query term.
    #[error("query must not be empty")]
    EmptyQuery,
    /// Malformed bulk-lookup payload.
    #[error("invalid request: {0}")]
    InvalidInput(String),
}
