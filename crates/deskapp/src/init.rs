//! # Context Bootstrap
//!
//! [`initialize`] resolves where dashboard state lives, loads configuration
//! and builds a ready [`DeskApi`] over the filesystem backend.
//!
//! ## Data Directory
//!
//! Resolved in order:
//! 1. The `data_override` argument, used as-is.
//! 2. `$DESKAPP_DATA`, if set (primarily for tests and demos).
//! 3. The OS-appropriate data directory via the `directories` crate.
//!
//! ## Configuration
//!
//! `deskapp.toml` is searched in the global data directory and then in the
//! override directory; both are merged, the override winning. Missing or
//! unreadable files fall back to compiled defaults.
//!
//! ## Session Reset
//!
//! Session-scoped state (records created in a previous run) is wiped on
//! every start. Local state such as expanded sidebar groups is kept.

use chrono::NaiveDateTime;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::info;

use crate::api::DeskApi;
use crate::config::DeskConfig;
use crate::error::{DeskError, Result};
use crate::store::fs_backend::FsBackend;
use crate::store::StateStore;

pub const DATA_ENV: &str = "DESKAPP_DATA";
pub const CONFIG_FILE: &str = "deskapp.toml";

pub struct DeskContext {
    pub api: DeskApi<FsBackend>,
    pub data_dir: PathBuf,
    pub config: DeskConfig,
}

/// Global data directory: `$DESKAPP_DATA` or the platform data dir.
pub fn global_data_dir() -> Option<PathBuf> {
    std::env::var(DATA_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("com", "deskapp", "deskapp").map(|dirs| dirs.data_dir().to_path_buf())
        })
}

pub fn load_config(global_dir: Option<PathBuf>, override_dir: Option<PathBuf>) -> DeskConfig {
    let search_paths: Vec<SearchPath> = global_dir
        .into_iter()
        .chain(override_dir)
        .map(SearchPath::Path)
        .collect();

    Clapfig::builder()
        .app_name("deskapp")
        .file_name(CONFIG_FILE)
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

/// Build the dashboard context.
///
/// # Arguments
///
/// * `data_override` - Explicit data directory; skips global resolution for
///   state and adds a config layer on top of the global one.
/// * `now` - Local time, used for seeding dates and the reservation slot.
pub fn initialize(data_override: Option<PathBuf>, now: NaiveDateTime) -> Result<DeskContext> {
    let global_dir = global_data_dir();
    let data_dir = data_override
        .clone()
        .or_else(|| global_dir.clone())
        .ok_or_else(|| DeskError::Store("Could not determine data directory".to_string()))?;

    let config = load_config(global_dir, data_override);

    let store = StateStore::with_backend(FsBackend::new(data_dir.clone()));
    store.clear_session()?;

    let api = DeskApi::new(store, config.clone(), now)?;
    info!(data_dir = %data_dir.display(), "dashboard initialized");

    Ok(DeskContext {
        api,
        data_dir,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordKind;
    use crate::store::StorageScope;
    use crate::store::StateBackend;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_initialize_with_override_uses_it_for_state() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(Some(temp.path().to_path_buf()), now()).unwrap();

        assert_eq!(ctx.data_dir, temp.path());
        assert_eq!(ctx.api.records(RecordKind::WorkOrder).len(), 2);
    }

    #[test]
    fn test_override_config_is_loaded() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "page_sizes = [5, 20]\ndefault_page_size = 5\n",
        )
        .unwrap();

        let ctx = initialize(Some(temp.path().to_path_buf()), now()).unwrap();

        assert_eq!(ctx.config.page_sizes(), vec![5, 20]);
        assert_eq!(ctx.api.dashboard().list().pagination.page_size, 5);
    }

    #[test]
    fn test_session_is_cleared_on_start() {
        let temp = TempDir::new().unwrap();
        let backend = FsBackend::new(temp.path().to_path_buf());
        backend
            .write(StorageScope::Session, "created-work-orders", "[]")
            .unwrap();
        backend
            .write(StorageScope::Local, "sidebar-open-groups", r#"{"Visitors":true}"#)
            .unwrap();

        let ctx = initialize(Some(temp.path().to_path_buf()), now()).unwrap();

        assert!(backend.keys(StorageScope::Session).unwrap().is_empty());
        assert!(ctx.api.open_groups().is_open("Visitors"));
    }
}
