//! Catalog query engine: pure, reentrant operations over one snapshot.
//!
//! Every function reads the snapshot (or tool slice) it is handed and holds
//! no state of its own, so concurrent callers need no locking beyond the
//! store's reference swap. No operation here blocks on I/O.

pub mod filter;
pub mod lookup;
pub mod recommend;
pub mod search;
pub mod sort;
pub mod stats;

pub use filter::{FilterCriteria, filter};
pub use lookup::{BulkEntry, RELATED_LIMIT, bulk_lookup, find_by_name, related};
pub use recommend::random_pick;
pub use search::{DEFAULT_SEARCH_LIMIT, SearchHit, search};
pub use sort::{DEFAULT_PAGE_LIMIT, DEFAULT_SORT_FIELD, Page, SortOrder, paginate, sort_tools};
pub use stats::{CatalogStats, CategorySummary, aggregate, categories_with_counts};
