//! # List View Engine
//!
//! Turns a record collection plus the current filter, sort and pagination
//! state into the rows to render.
//!
//! ## Pipeline
//!
//! 1. **Filter**: keep records that pass every active filter of the kind.
//! 2. **Sort**: stable multi-key sort, or the default policy when no key is
//!    active (see [`crate::sort`]).
//! 3. **Paginate**: clamp the requested page, then slice.
//!
//! [`compute_view`] is a pure function of its inputs and never fails. An
//! out-of-range page (e.g. right after a filter narrowed the result) is
//! clamped; the clamped page is reported back in [`ListView::current_page`].
//!
//! ## Explicit State
//!
//! [`ListState`] bundles the three inputs for one view and exposes named
//! transitions. Every transition that changes what is listed (filters, sort,
//! page size) moves back to page 1.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::error::{DeskError, Result};
use crate::filters::{get_spec, AliasTable, FilterSpec, FilterState, Range, RecordFilter};
use crate::model::{Record, RecordKind};
use crate::pagination::{
    build_page_numbers, clamp_page, total_pages, PageItem, PaginationState, DEFAULT_PAGE_SIZE,
};
use crate::sort::{sort_records, SortState};

/// What the view engine needs besides the state itself.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub kind: RecordKind,
    pub aliases: &'a AliasTable,
}

/// One rendered page plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView<'a> {
    pub page: Vec<&'a Record>,
    pub total_count: usize,
    pub total_pages: usize,
    /// 1-based index of the first row shown; 0 when nothing matches.
    pub range_start: usize,
    pub range_end: usize,
    /// The page actually shown, after clamping.
    pub current_page: usize,
}

impl ListView<'_> {
    pub fn page_numbers(&self) -> Vec<PageItem> {
        build_page_numbers(self.current_page, self.total_pages)
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

pub fn compute_view<'a>(
    records: &'a [Record],
    filters: &FilterState,
    sort: &SortState,
    pagination: &PaginationState,
    ctx: ViewContext<'_>,
) -> ListView<'a> {
    let active: Vec<_> = filters
        .active(ctx.kind)
        .map(|(spec, value)| RecordFilter::new(spec, value))
        .collect();

    let mut rows: Vec<&Record> = records
        .iter()
        .filter(|record| active.iter().all(|f| f.matches(record, ctx.aliases)))
        .collect();
    sort_records(ctx.kind, &mut rows, sort);

    let total_count = rows.len();
    let page_size = pagination.page_size.max(1);
    let total_pages = total_pages(total_count, page_size);
    let current_page = clamp_page(pagination.current_page, total_pages);

    let start = ((current_page - 1) * page_size).min(total_count);
    let end = (current_page * page_size).min(total_count);
    let page = rows[start..end].to_vec();

    ListView {
        page,
        total_count,
        total_pages,
        range_start: if total_count == 0 { 0 } else { start + 1 },
        range_end: end,
        current_page,
    }
}

/// Filter, sort and pagination state of one list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    kind: RecordKind,
    pub filters: FilterState,
    pub sort: SortState,
    pub pagination: PaginationState,
}

impl ListState {
    pub fn new(kind: RecordKind) -> Self {
        Self::with_page_size(kind, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(kind: RecordKind, page_size: usize) -> Self {
        Self {
            kind,
            filters: FilterState::new(),
            sort: SortState::new(),
            pagination: PaginationState::new(page_size),
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Whether `record` passes every active filter.
    pub fn admits(&self, record: &Record, aliases: &AliasTable) -> bool {
        self.filters
            .active(self.kind)
            .all(|(spec, value)| RecordFilter::new(spec, value).matches(record, aliases))
    }

    fn spec(&self, key: &str) -> Result<&'static FilterSpec> {
        get_spec(self.kind, key).ok_or_else(|| DeskError::UnknownFilter(key.to_string()))
    }

    pub fn set_selection<I, S>(&mut self, key: &str, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec = self.spec(key)?;
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        debug!(filter = key, count = values.len(), "set selection");
        self.filters.set_selection(spec, values)?;
        self.pagination.reset();
        Ok(())
    }

    pub fn toggle_option(&mut self, key: &str, value: &str) -> Result<()> {
        let spec = self.spec(key)?;
        debug!(filter = key, option = value, "toggle option");
        self.filters.toggle_option(spec, value)?;
        self.pagination.reset();
        Ok(())
    }

    pub fn set_range(&mut self, key: &str, range: Range) -> Result<()> {
        let spec = self.spec(key)?;
        debug!(filter = key, start = %range.start, end = %range.end, "set range");
        self.filters.set_range(spec, range)?;
        self.pagination.reset();
        Ok(())
    }

    pub fn set_toggle(&mut self, key: &str, value: Option<bool>) -> Result<()> {
        let spec = self.spec(key)?;
        debug!(filter = key, ?value, "set toggle");
        self.filters.set_toggle(spec, value)?;
        self.pagination.reset();
        Ok(())
    }

    /// Reset all filters of this view except those in `preserve`.
    pub fn clear_filters(&mut self, preserve: &[String]) {
        debug!(kind = %self.kind, preserved = preserve.len(), "clear filters");
        self.filters.clear(self.kind, preserve);
        self.pagination.reset();
    }

    pub fn is_any_filter_active(&self) -> bool {
        self.filters.is_any_active(self.kind)
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
        debug!(field, direction = ?self.sort.direction(field), "toggle sort");
        self.pagination.reset();
    }

    pub fn clear_sorts(&mut self) {
        self.sort.clear();
        self.pagination.reset();
    }

    pub fn set_page_size(&mut self, size: usize, allowed: &[usize]) -> Result<()> {
        self.pagination.set_page_size(size, allowed)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.pagination.next(total_pages);
    }

    pub fn previous_page(&mut self, total_pages: usize) {
        self.pagination.previous(total_pages);
    }

    pub fn compute<'a>(&self, records: &'a [Record], aliases: &AliasTable) -> ListView<'a> {
        compute_view(
            records,
            &self.filters,
            &self.sort,
            &self.pagination,
            ViewContext {
                kind: self.kind,
                aliases,
            },
        )
    }
}
