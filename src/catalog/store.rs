//! Process-wide snapshot store with atomic swap semantics.
//!
//! The store is the only shared mutable state in the crate. Readers take an
//! `Arc` to the installed snapshot and keep computing against it even if a
//! reload swaps the reference underneath them, so no query ever observes a
//! mixture of old and new tool lists.

use crate::catalog::CatalogSnapshot;
use crate::error::{QueryError, QueryResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
pub struct CatalogStore {
    inner: RwLock<Installed>,
}

#[derive(Debug, Default)]
struct Installed {
    snapshot: Option<Arc<CatalogSnapshot>>,
    last_update: Option<DateTime<Utc>>,
}

/// Read-only introspection signal derived from the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub data_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently installed snapshot.
    ///
    /// Never blocks on I/O. Fails with `Uninitialized` before the first
    /// `set`; afterwards always returns a complete snapshot.
    pub fn get(&self) -> QueryResult<Arc<CatalogSnapshot>> {
        let installed = self.inner.read().unwrap_or_else(|err| err.into_inner());
        installed.snapshot.clone().ok_or(QueryError::Uninitialized)
    }

    /// Install a snapshot wholesale.
    ///
    /// A single reference swap: every `get` that starts after this call
    /// returns sees the new snapshot, while readers already holding the old
    /// `Arc` finish against it untouched.
    pub fn set(&self, snapshot: CatalogSnapshot) {
        let mut installed = self.inner.write().unwrap_or_else(|err| err.into_inner());
        installed.snapshot = Some(Arc::new(snapshot));
        installed.last_update = Some(Utc::now());
    }

    pub fn health(&self) -> HealthStatus {
        let installed = self.inner.read().unwrap_or_else(|err| err.into_inner());
        HealthStatus {
            data_loaded: installed.snapshot.is_some(),
            last_update: installed.last_update,
        }
    }
}
