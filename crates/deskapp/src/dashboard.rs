//! # Dashboard Session
//!
//! All view state of the dashboard lives in one [`Dashboard`] value: the
//! active page, its view mode, the list state of the page's record kind, the
//! pinned filters and the table column layout. The UI reads it and calls
//! named transitions; nothing else holds view state.
//!
//! ## Context Switches
//!
//! Navigating to another page starts a fresh context:
//!
//! - list state (filters, sort, pagination) resets to defaults for the
//!   page's record kind;
//! - column layout resets to the kind's default order and widths;
//! - the page's default pins are merged into the starred filters.
//!
//! "Create reservation" additionally pre-fills the reservation date range
//! with today and the time range with the next whole hour. Its "clear all"
//! keeps those filters (the configurable preserve set), and the clear-all
//! affordance only shows when some other filter is active.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::columns::{column_field, ColumnLayout};
use crate::config::DeskConfig;
use crate::error::Result;
use crate::filters::{AliasTable, Range, StarredFilters};
use crate::model::{Record, ISO_DATE_FORMAT};
use crate::navigation::{ActivePage, ViewMode};
use crate::view::{ListState, ListView};

/// The parts of [`DeskConfig`] the view state needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub page_sizes: Vec<usize>,
    pub default_page_size: usize,
    pub min_column_width: u32,
    pub default_column_width: u32,
    pub aliases: AliasTable,
    pub create_reservation_preserve: Vec<String>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from(&DeskConfig::default())
    }
}

impl From<&DeskConfig> for ViewSettings {
    fn from(config: &DeskConfig) -> Self {
        Self {
            page_sizes: config.page_sizes(),
            default_page_size: config.default_page_size(),
            min_column_width: config.min_column_width,
            default_column_width: config.default_column_width,
            aliases: config.aliases(),
            create_reservation_preserve: config.create_reservation_preserve(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    page: ActivePage,
    view_mode: ViewMode,
    list: ListState,
    starred: StarredFilters,
    columns: ColumnLayout,
    settings: ViewSettings,
}

impl Dashboard {
    pub fn new(settings: ViewSettings, page: ActivePage, now: NaiveDateTime) -> Self {
        let kind = page.kind();
        let mut dashboard = Self {
            page,
            view_mode: ViewMode::default(),
            list: ListState::with_page_size(kind, settings.default_page_size),
            starred: StarredFilters::default(),
            columns: ColumnLayout::with_limits(
                kind,
                settings.min_column_width,
                settings.default_column_width,
            ),
            settings,
        };
        dashboard.enter(page, now);
        dashboard
    }

    pub fn page(&self) -> ActivePage {
        self.page
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListState {
        &mut self.list
    }

    pub fn starred(&self) -> &StarredFilters {
        &self.starred
    }

    pub fn starred_mut(&mut self) -> &mut StarredFilters {
        &mut self.starred
    }

    pub fn columns(&self) -> &ColumnLayout {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut ColumnLayout {
        &mut self.columns
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    /// Switch to `page`. Returns false (and changes nothing) if it is
    /// already active.
    pub fn navigate(&mut self, page: ActivePage, now: NaiveDateTime) -> bool {
        if page == self.page {
            return false;
        }
        self.enter(page, now);
        true
    }

    /// Navigate to the page named in a query string. Unknown or missing
    /// pages leave the dashboard where it is.
    pub fn navigate_query(&mut self, query: &str, now: NaiveDateTime) -> Option<ActivePage> {
        let page = ActivePage::from_query(query)?;
        self.navigate(page, now);
        Some(page)
    }

    fn enter(&mut self, page: ActivePage, now: NaiveDateTime) {
        let kind = page.kind();
        debug!(page = %page, kind = %kind, "enter page");

        self.page = page;
        self.view_mode = self.view_mode.for_page(page);
        self.list = ListState::with_page_size(kind, self.settings.default_page_size);
        self.columns = ColumnLayout::with_limits(
            kind,
            self.settings.min_column_width,
            self.settings.default_column_width,
        );
        self.starred.apply_page_defaults(page);

        if page == ActivePage::CreateReservation {
            let today = now.date().format(ISO_DATE_FORMAT).to_string();
            let (start, end) = next_hour_slot(now);
            // Both keys exist on the reservation kind with these shapes.
            let seeded = self
                .list
                .set_range("reservationDateRange", Range::new(today.clone(), today))
                .and_then(|()| {
                    self.list.set_range(
                        "reservationTimeRange",
                        Range::new(start.format("%H:%M").to_string(), end.format("%H:%M").to_string()),
                    )
                });
            if let Err(err) = seeded {
                debug!(%err, "could not seed reservation slot");
            }
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode.for_page(self.page);
    }

    /// Filter keys "clear all" keeps on the current page.
    pub fn preserved_filters(&self) -> &[String] {
        match self.page {
            ActivePage::CreateReservation => &self.settings.create_reservation_preserve,
            _ => &[],
        }
    }

    pub fn clear_all_filters(&mut self) {
        let preserve = self.preserved_filters().to_vec();
        self.list.clear_filters(&preserve);
    }

    /// Whether to offer "clear all": some filter outside the preserve set
    /// is active.
    pub fn show_clear_all(&self) -> bool {
        let preserve = self.preserved_filters();
        self.list
            .filters
            .active(self.list.kind())
            .any(|(spec, _)| !preserve.iter().any(|key| key == spec.key))
    }

    /// Toggle sorting on a table column.
    pub fn toggle_sort(&mut self, column: &str) {
        self.list.toggle_sort(column_field(column));
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        self.list.set_page_size(size, &self.settings.page_sizes)
    }

    pub fn compute<'a>(&self, records: &'a [Record]) -> ListView<'a> {
        self.list.compute(records, &self.settings.aliases)
    }
}

/// The next whole hour after `now` and the hour after that.
pub fn next_hour_slot(now: NaiveDateTime) -> (NaiveTime, NaiveTime) {
    let hour = NaiveTime::from_hms_opt(now.hour(), 0, 0).unwrap_or_default();
    let start = hour + Duration::hours(1);
    (start, start + Duration::hours(1))
}
