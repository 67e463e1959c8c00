//! # deskapp
//!
//! Core of a facilities dashboard: work orders, visitor check-ins and
//! resource reservations shown as tile, table or calendar lists with
//! filtering, sorting, pagination and creation forms. This crate owns the
//! state and the rules; rendering belongs to whatever UI sits on top.
//!
//! ## Architecture
//!
//! ```text
//! UI ──► api::DeskApi ──► commands::{create, list}
//!            │                   │
//!            ▼                   ▼
//!     dashboard::Dashboard   store::StateStore<B: StateBackend>
//!      ├─ navigation              ├─ FsBackend  (<data>/local|session/*.json)
//!      ├─ view::ListState         └─ MemBackend (tests)
//!      │   ├─ filters
//!      │   ├─ sort
//!      │   └─ pagination
//!      ├─ filters::StarredFilters
//!      └─ columns::ColumnLayout
//! ```
//!
//! - [`filters`]: per-kind filter registry, filter values and matching.
//! - [`view`]: the filter → sort → paginate pipeline and [`view::ListState`].
//! - [`columns`]: table column order and widths.
//! - [`dashboard`]: one explicit state object for the active page.
//! - [`forms`] and [`commands::create`]: required-field checks and record
//!   creation.
//! - [`store`]: persisted local/session state.
//! - [`init`]: configuration loading and context bootstrap.
//!
//! Everything is synchronous and single-threaded.

pub mod api;
pub mod columns;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filters;
pub mod forms;
pub mod init;
pub mod model;
pub mod navigation;
pub mod pagination;
pub mod seed;
pub mod sidebar;
pub mod sort;
pub mod store;
pub mod view;
