//! # Persisted State
//!
//! The dashboard keeps a small amount of state between interactions: which
//! sidebar groups are expanded, and the records created during the current
//! session. Values live in two scopes:
//!
//! - **Local**: survives restarts (`sidebar-open-groups`).
//! - **Session**: wiped when the dashboard starts (`created-work-orders`,
//!   `created-visitors`, `created-reservations`).
//!
//! [`StateStore`] encodes values as JSON on top of a [`backend::StateBackend`].
//! A value that no longer parses is treated as absent: it is logged and the
//! caller gets the type's default, so a corrupt entry never blocks the UI.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one JSON file per key, written atomically.
//! - [`mem_backend::MemBackend`]: for tests and throwaway sessions.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── deskapp.toml
//! ├── local/
//! │   └── sidebar-open-groups.json
//! └── session/
//!     ├── created-work-orders.json
//!     ├── created-visitors.json
//!     └── created-reservations.json
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{DeskError, Result};
use crate::model::{Record, RecordKind};
use crate::sidebar::OpenGroups;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

pub use backend::{StateBackend, StorageScope};

pub const SIDEBAR_OPEN_GROUPS: &str = "sidebar-open-groups";
pub const CREATED_WORK_ORDERS: &str = "created-work-orders";
pub const CREATED_VISITORS: &str = "created-visitors";
pub const CREATED_RESERVATIONS: &str = "created-reservations";

/// Session key holding records of `kind` created in this session.
pub fn created_key(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::WorkOrder => CREATED_WORK_ORDERS,
        RecordKind::Visitor => CREATED_VISITORS,
        RecordKind::Reservation => CREATED_RESERVATIONS,
    }
}

/// Typed JSON access to persisted state.
pub struct StateStore<B: StateBackend> {
    pub(crate) backend: B,
}

impl<B: StateBackend> StateStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load a value, falling back to `T::default()` when the key is missing
    /// or its content does not parse.
    pub fn get<T>(&self, scope: StorageScope, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.backend.read(scope, key)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(%scope, key, error = %err, "discarding malformed persisted state");
                Ok(T::default())
            }
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, scope: StorageScope, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(DeskError::Serialization)?;
        self.backend.write(scope, key, &raw)?;
        debug!(%scope, key, bytes = raw.len(), "saved state");
        Ok(())
    }

    pub fn remove(&self, scope: StorageScope, key: &str) -> Result<()> {
        self.backend.remove(scope, key)
    }

    /// Drop everything in the session scope.
    pub fn clear_session(&self) -> Result<()> {
        self.backend.clear(StorageScope::Session)
    }

    pub fn open_groups(&self) -> Result<OpenGroups> {
        self.get(StorageScope::Local, SIDEBAR_OPEN_GROUPS)
    }

    pub fn save_open_groups(&self, groups: &OpenGroups) -> Result<()> {
        self.set(StorageScope::Local, SIDEBAR_OPEN_GROUPS, groups)
    }

    /// Records of `kind` created this session, most recent first.
    pub fn created(&self, kind: RecordKind) -> Result<Vec<Record>> {
        self.get(StorageScope::Session, created_key(kind))
    }

    /// Prepend a freshly created record to the session history.
    pub fn push_created(&self, kind: RecordKind, record: &Record) -> Result<()> {
        let mut created = self.created(kind)?;
        created.insert(0, record.clone());
        self.set(StorageScope::Session, created_key(kind), &created)
    }

    /// Forget every created record, leaving UI preferences alone.
    pub fn reset_entities(&self) -> Result<()> {
        for kind in RecordKind::ALL {
            self.backend.remove(StorageScope::Session, created_key(kind))?;
        }
        Ok(())
    }
}
