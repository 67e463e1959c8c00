//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the
//! dashboard state. It is the single entry point for a UI: it owns the record
//! collections, the [`Dashboard`] session, the sidebar state and the
//! persisted [`StateStore`].
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to command functions (`commands::create`, `commands::list`)
//! - **Routes** state transitions to the dashboard session
//! - **Persists** what outlives a render (sidebar groups, created records)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## Collections
//!
//! Each record kind starts from the demo seed. Records created earlier in
//! the same session are read back from session storage and placed in front,
//! most recent first, so the collection looks the same after a reload.
//!
//! ## Generic Over StateBackend
//!
//! `DeskApi<B: StateBackend>` is generic over the storage backend:
//! - Production: `DeskApi<FsBackend>`
//! - Testing: `DeskApi<MemBackend>`

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;
use tracing::debug;

use crate::columns::ResizeDrag;
use crate::commands;
use crate::config::DeskConfig;
use crate::dashboard::{Dashboard, ViewSettings};
use crate::error::{DeskError, Result};
use crate::filters::Range;
use crate::forms::{ReservationForm, VisitorForm, WorkOrderForm};
use crate::model::{Record, RecordKind};
use crate::navigation::{ActivePage, ViewMode};
use crate::pagination::clamp_page;
use crate::seed;
use crate::sidebar::OpenGroups;
use crate::store::{StateBackend, StateStore};

/// The main API facade for dashboard operations.
pub struct DeskApi<B: StateBackend> {
    store: StateStore<B>,
    config: DeskConfig,
    dashboard: Dashboard,
    open_groups: OpenGroups,
    work_orders: Vec<Record>,
    visitors: Vec<Record>,
    reservations: Vec<Record>,
}

impl<B: StateBackend> DeskApi<B> {
    /// Load collections and sidebar state, starting on the Home page.
    pub fn new(store: StateStore<B>, config: DeskConfig, now: NaiveDateTime) -> Result<Self> {
        let today = now.date();
        let dashboard = Dashboard::new(ViewSettings::from(&config), ActivePage::Home, now);
        let open_groups = store.open_groups()?;
        let work_orders = load_collection(&store, RecordKind::WorkOrder, today)?;
        let visitors = load_collection(&store, RecordKind::Visitor, today)?;
        let reservations = load_collection(&store, RecordKind::Reservation, today)?;
        Ok(Self {
            store,
            config,
            dashboard,
            open_groups,
            work_orders,
            visitors,
            reservations,
        })
    }

    pub fn store(&self) -> &StateStore<B> {
        &self.store
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    pub fn records(&self, kind: RecordKind) -> &[Record] {
        match kind {
            RecordKind::WorkOrder => &self.work_orders,
            RecordKind::Visitor => &self.visitors,
            RecordKind::Reservation => &self.reservations,
        }
    }

    fn records_mut(&mut self, kind: RecordKind) -> &mut Vec<Record> {
        match kind {
            RecordKind::WorkOrder => &mut self.work_orders,
            RecordKind::Visitor => &mut self.visitors,
            RecordKind::Reservation => &mut self.reservations,
        }
    }

    // --- Navigation ---

    pub fn navigate(&mut self, page: ActivePage, now: NaiveDateTime) -> bool {
        self.dashboard.navigate(page, now)
    }

    pub fn navigate_query(&mut self, query: &str, now: NaiveDateTime) -> Option<ActivePage> {
        self.dashboard.navigate_query(query, now)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.dashboard.set_view_mode(mode);
    }

    // --- Listing ---

    /// The current page of the active page's records.
    pub fn list(&self) -> Result<commands::CmdResult> {
        let kind = self.dashboard.list().kind();
        commands::list::run(self.records(kind), &self.dashboard)
    }

    pub fn work_order(&self, id: &str) -> Result<&Record> {
        self.work_orders
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| DeskError::NotFound(format!("work order {}", id)))
    }

    // --- Filters ---

    pub fn toggle_filter_option(&mut self, key: &str, value: &str) -> Result<()> {
        self.dashboard.list_mut().toggle_option(key, value)
    }

    pub fn set_filter_range(&mut self, key: &str, range: Range) -> Result<()> {
        self.dashboard.list_mut().set_range(key, range)
    }

    pub fn set_filter_toggle(&mut self, key: &str, value: Option<bool>) -> Result<()> {
        self.dashboard.list_mut().set_toggle(key, value)
    }

    pub fn clear_all_filters(&mut self) {
        self.dashboard.clear_all_filters();
    }

    pub fn toggle_star(&mut self, key: &str) -> Result<bool> {
        self.dashboard.starred_mut().toggle_star(key)
    }

    // --- Sort & pagination ---

    pub fn toggle_sort(&mut self, column: &str) {
        self.dashboard.toggle_sort(column);
    }

    pub fn clear_sorts(&mut self) {
        self.dashboard.list_mut().clear_sorts();
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        self.dashboard.set_page_size(size)
    }

    fn total_pages(&self) -> usize {
        let kind = self.dashboard.list().kind();
        self.dashboard.compute(self.records(kind)).total_pages
    }

    /// Jump to `page`, clamped to the pages the current view has.
    pub fn go_to_page(&mut self, page: usize) {
        let page = clamp_page(page, self.total_pages());
        self.dashboard.list_mut().go_to_page(page);
    }

    pub fn next_page(&mut self) {
        let total_pages = self.total_pages();
        self.dashboard.list_mut().next_page(total_pages);
    }

    pub fn previous_page(&mut self) {
        let total_pages = self.total_pages();
        self.dashboard.list_mut().previous_page(total_pages);
    }

    // --- Columns ---

    pub fn reorder_columns(&mut self, dragged: &str, target: &str) {
        self.dashboard.columns_mut().reorder(dragged, target);
    }

    pub fn begin_column_resize(&self, column: &str) -> ResizeDrag {
        self.dashboard.columns().begin_resize(column)
    }

    pub fn resize_column(&mut self, drag: &ResizeDrag, delta: i32) -> u32 {
        self.dashboard.columns_mut().resize(drag, delta)
    }

    // --- Creation ---

    pub fn create_work_order(
        &mut self,
        form: &WorkOrderForm,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        let digits = self.config.id_digits;
        let result =
            commands::create::work_order(&self.store, &mut self.work_orders, form, today, digits)?;
        Ok(self.warn_if_hidden(RecordKind::WorkOrder, result))
    }

    pub fn create_visitor(
        &mut self,
        form: &VisitorForm,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        let digits = self.config.id_digits;
        let result = commands::create::visitor(&self.store, &mut self.visitors, form, today, digits)?;
        Ok(self.warn_if_hidden(RecordKind::Visitor, result))
    }

    pub fn create_reservation(
        &mut self,
        form: &ReservationForm,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        let digits = self.config.id_digits;
        let result =
            commands::create::reservation(&self.store, &mut self.reservations, form, today, digits)?;
        Ok(self.warn_if_hidden(RecordKind::Reservation, result))
    }

    /// Flag created records the list on screen filters out.
    fn warn_if_hidden(&self, kind: RecordKind, mut result: CmdResult) -> CmdResult {
        let list = self.dashboard.list();
        if list.kind() != kind {
            return result;
        }
        let aliases = &self.dashboard.settings().aliases;
        let hidden: Vec<String> = result
            .affected_records
            .iter()
            .filter(|record| !list.admits(record, aliases))
            .map(|record| record.id.clone())
            .collect();
        for id in hidden {
            result.add_message(CmdMessage::warning(format!(
                "{} is hidden by the current filters",
                id
            )));
        }
        result
    }

    // --- Sidebar ---

    pub fn open_groups(&self) -> &OpenGroups {
        &self.open_groups
    }

    /// Expand or collapse a sidebar group and persist the new state.
    pub fn toggle_group(&mut self, label: &str) -> Result<bool> {
        let open = self.open_groups.toggle(label);
        self.store.save_open_groups(&self.open_groups)?;
        debug!(label, open, "toggled sidebar group");
        Ok(open)
    }

    // --- Reset ---

    /// Forget created records and return to a fresh Home page.
    pub fn reset_app(&mut self, now: NaiveDateTime) -> Result<()> {
        self.store.reset_entities()?;
        for kind in RecordKind::ALL {
            *self.records_mut(kind) = seed::records(kind, now.date());
        }
        let settings = self.dashboard.settings().clone();
        self.dashboard = Dashboard::new(settings, ActivePage::Home, now);
        debug!("app reset");
        Ok(())
    }
}

/// Session-created records first, then the seed minus any id already taken.
fn load_collection<B: StateBackend>(
    store: &StateStore<B>,
    kind: RecordKind,
    today: NaiveDate,
) -> Result<Vec<Record>> {
    let mut records = store.created(kind)?;
    let taken: HashSet<String> = records.iter().map(|r| r.id.clone()).collect();
    records.extend(
        seed::records(kind, today)
            .into_iter()
            .filter(|r| !taken.contains(&r.id)),
    );
    Ok(records)
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, PageInfo};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::mem_backend::MemBackend;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    }

    fn api_with(store: InMemoryStore) -> DeskApi<MemBackend> {
        DeskApi::new(store, DeskConfig::default(), now()).unwrap()
    }

    fn form() -> WorkOrderForm {
        WorkOrderForm {
            issue_type: "lighting".into(),
            details: "Lobby lights out".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_session_records_come_before_seed() {
        let created = Record::new("W-11631-000050", "03/10/2026").with("title", "Signage");
        let fixture = StoreFixture::new().with_created(RecordKind::WorkOrder, &[created]);
        let api = api_with(fixture.store);

        let ids: Vec<_> = api
            .records(RecordKind::WorkOrder)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["W-11631-000050", "W-11631-000034", "W-11631-000047"]);
    }

    #[test]
    fn test_create_then_find_work_order() {
        let mut api = api_with(InMemoryStore::new());
        let result = api.create_work_order(&form(), now().date()).unwrap();
        let id = result.affected_records[0].id.clone();

        assert_eq!(id, "W-11631-000048");
        assert_eq!(api.work_order(&id).unwrap().id, id);
        assert!(matches!(api.work_order("W-0"), Err(DeskError::NotFound(_))));
    }

    #[test]
    fn test_create_warns_when_filters_hide_record() {
        let mut api = api_with(InMemoryStore::new());
        api.navigate(ActivePage::Tasks, now());
        api.toggle_filter_option("status", "closed").unwrap();

        let result = api.create_work_order(&form(), now().date()).unwrap();
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert_eq!(
            result.messages[1].content,
            "W-11631-000048 is hidden by the current filters"
        );

        api.clear_all_filters();
        let result = api.create_work_order(&form(), now().date()).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn test_toggle_group_persists() {
        let mut api = api_with(InMemoryStore::new());
        assert!(api.toggle_group("Visitors").unwrap());
        assert!(api.store().open_groups().unwrap().is_open("Visitors"));
        assert!(!api.toggle_group("Visitors").unwrap());
    }

    #[test]
    fn test_reset_app_drops_created_records() {
        let mut api = api_with(InMemoryStore::new());
        api.create_work_order(&form(), now().date()).unwrap();
        api.navigate(ActivePage::Tasks, now());
        api.toggle_group("Incidents").unwrap();

        api.reset_app(now()).unwrap();

        assert_eq!(api.records(RecordKind::WorkOrder).len(), 2);
        assert!(api.store().created(RecordKind::WorkOrder).unwrap().is_empty());
        assert_eq!(api.dashboard().page(), ActivePage::Home);
        assert!(api.open_groups().is_open("Incidents"));
    }

    #[test]
    fn test_list_follows_active_page() {
        let mut api = api_with(InMemoryStore::new());
        api.navigate(ActivePage::UpcomingVisits, now());
        let result = api.list().unwrap();
        assert!(result.listed_records.iter().all(|r| r.id.starts_with("V-")));
    }

    #[test]
    fn test_next_page_stops_at_last() {
        let mut api = api_with(InMemoryStore::new());
        api.next_page();
        assert_eq!(api.dashboard().list().pagination.current_page, 1);
    }

    #[test]
    fn test_go_to_page_clamps_and_previous_steps_back() {
        let mut api = api_with(InMemoryStore::new());
        api.set_page_size(10).unwrap();
        api.go_to_page(usize::MAX);
        assert_eq!(api.dashboard().list().pagination.current_page, 1);
        api.next_page();
        api.previous_page();
        assert_eq!(api.dashboard().list().pagination.current_page, 1);
    }
}
