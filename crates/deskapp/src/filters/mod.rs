//! # Filter System
//!
//! Each list view (work orders, visitors, reservations) can be narrowed by a
//! fixed set of filters. Rather than one ad hoc flag per filter, everything
//! goes through a small number of pieces:
//!
//! - **Registry** ([`filters_for`], [`get_spec`]): a static [`FilterSpec`] per
//!   filter key, naming the record field it reads, its [`FilterShape`], the
//!   option list and the [`MatchRule`] used for categorical comparison.
//! - **Values** ([`FilterValue`]): the runtime value of one filter. Every
//!   shape has an inactive default; an inactive filter never excludes a row.
//! - **State** ([`FilterState`]): all touched filter values, keyed by filter
//!   key. Keys are unique across kinds.
//! - **Matching** ([`RecordFilter`]): decides whether a record passes one
//!   active filter.
//! - **Pins** ([`StarredFilters`]): which filters show in the compact toolbar.
//!
//! ## Combination
//!
//! Active filters combine with AND across keys. Within a multi-select, the
//! selected options combine with OR.
//!
//! | Shape | Inactive | Record passes when |
//! |-------|----------|--------------------|
//! | `MultiSelect` | empty set | field matches any selected option |
//! | `DateRange` | either end blank | `start <= date <= end` |
//! | `TimeRange` | either end blank | `start <= time <= end` |
//! | `Toggle` | `None` | boolean field equals the toggle |
//!
//! ## Usage
//!
//! ```ignore
//! let spec = get_spec(RecordKind::WorkOrder, "status").unwrap();
//! state.toggle_option(spec, "open")?;
//! let keep = state
//!     .active(RecordKind::WorkOrder)
//!     .all(|(spec, value)| RecordFilter::new(spec, value).matches(&record, &aliases));
//! ```

mod matcher;
mod spec;
mod starred;
mod state;
mod value;

pub use matcher::{slug, AliasTable, RecordFilter};
pub use spec::{
    filters_for, find_spec, get_spec, FilterOption, FilterShape, FilterSpec, MatchRule,
    RESERVATION_FILTERS, VISITOR_FILTERS, WORK_ORDER_FILTERS,
};
pub use starred::StarredFilters;
pub use state::{clear_all, is_any_filter_active, visible_options, FilterState};
pub use value::{FilterValue, Range};
