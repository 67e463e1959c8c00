use chrono::NaiveDate;
use tracing::{debug, info};

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::forms::{
    group_icon, issue_type, ReservationForm, Validate, VisitorForm, WorkOrderForm, FALLBACK_ICON,
};
use crate::model::{format_date, format_time_us, parse_date, Record, RecordKind};
use crate::store::{StateBackend, StateStore};

pub const DEFAULT_ASSIGNEE: &str = "John Doe";
pub const DEFAULT_PROPERTY: &str = "1 Main St";

/// Next free id for `kind`: one above the highest numeric suffix among
/// `records` carrying the kind's prefix, zero-padded to `digits`.
pub fn next_id(records: &[Record], kind: RecordKind, digits: usize) -> String {
    let prefix = kind.id_prefix();
    let max = records
        .iter()
        .filter_map(|r| r.id.strip_prefix(prefix))
        .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{:0width$}", prefix, max + 1, width = digits)
}

fn or_default(value: &str, default: &str) -> String {
    match value.trim() {
        "" => default.to_string(),
        v => v.to_string(),
    }
}

fn display_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.trim().to_string(), format_date)
}

fn time_span(all_day: bool, start: &str, end: &str) -> String {
    if all_day {
        "All day".to_string()
    } else {
        format!("{} - {}", format_time_us(start), format_time_us(end))
    }
}

pub fn build_work_order(form: &WorkOrderForm, id: String, today: NaiveDate) -> Result<Record> {
    form.validate()?;

    let raw = form.issue_type.trim();
    let (title, group) = match issue_type(raw) {
        Some(issue) => (issue.label, issue.group),
        None => (raw, raw),
    };
    let icon = if group.is_empty() {
        FALLBACK_ICON
    } else {
        group_icon(group)
    };

    Ok(Record::new(id, format_date(today))
        .with("title", title)
        .with("category", group)
        .with("type", group)
        .with("priority", "Medium")
        .with("status", "New")
        .with("assignee", or_default(&form.requested_for, DEFAULT_ASSIGNEE))
        .with("property", or_default(&form.property, DEFAULT_PROPERTY))
        .with("description", form.details.trim())
        .with("icon", icon)
        .with("attachments", 0u32)
        .with("comments", 0u32)
        .with("tasks", 0u32)
        .with("files", 0u32))
}

pub fn build_visitor(form: &VisitorForm, id: String, today: NaiveDate) -> Result<Record> {
    form.validate()?;

    let name = format!("{} {}", form.first_name.trim(), form.last_name.trim());
    Ok(Record::new(id, format_date(today))
        .with("name", name)
        .with("propertyStatus", "First Visit")
        .with("status", "Scheduled")
        .with("type", or_default(&form.visitor_type, "Guest"))
        .with("company", form.company.trim())
        .with("date", display_date(&form.date_start))
        .with("time", time_span(form.all_day, &form.time_start, &form.time_end))
        .with("property", or_default(&form.property, DEFAULT_PROPERTY))
        .with("createdFor", or_default(&form.host, DEFAULT_ASSIGNEE))
        .with("premierAccess", false))
}

pub fn build_reservation(form: &ReservationForm, id: String, today: NaiveDate) -> Result<Record> {
    form.validate()?;

    Ok(Record::new(id, format_date(today))
        .with("reservationName", form.details.trim())
        .with("resourceName", form.resource.trim())
        .with("status", "Confirmed")
        .with("date", display_date(&form.date_start))
        .with("time", time_span(form.all_day, &form.time_start, &form.time_end))
        .with("allDay", form.all_day)
        .with("company", form.company.trim())
        .with("property", or_default(&form.property, DEFAULT_PROPERTY))
        .with("floor", form.floor.trim()))
}

/// Prepend `record` to `records` and to the session's created history.
fn commit<B: StateBackend>(
    store: &StateStore<B>,
    records: &mut Vec<Record>,
    kind: RecordKind,
    record: Record,
) -> Result<CmdResult> {
    store.push_created(kind, &record)?;
    records.insert(0, record.clone());
    info!(id = %record.id, %kind, "created record");

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success(format!("Created {} {}", kind, record.id)));
    Ok(result)
}

pub fn work_order<B: StateBackend>(
    store: &StateStore<B>,
    records: &mut Vec<Record>,
    form: &WorkOrderForm,
    today: NaiveDate,
    digits: usize,
) -> Result<CmdResult> {
    let id = next_id(records, RecordKind::WorkOrder, digits);
    debug!(%id, issue_type = %form.issue_type, "creating work order");
    let record = build_work_order(form, id, today)?;
    commit(store, records, RecordKind::WorkOrder, record)
}

pub fn visitor<B: StateBackend>(
    store: &StateStore<B>,
    records: &mut Vec<Record>,
    form: &VisitorForm,
    today: NaiveDate,
    digits: usize,
) -> Result<CmdResult> {
    let id = next_id(records, RecordKind::Visitor, digits);
    debug!(%id, "creating visitor");
    let record = build_visitor(form, id, today)?;
    commit(store, records, RecordKind::Visitor, record)
}

pub fn reservation<B: StateBackend>(
    store: &StateStore<B>,
    records: &mut Vec<Record>,
    form: &ReservationForm,
    today: NaiveDate,
    digits: usize,
) -> Result<CmdResult> {
    let id = next_id(records, RecordKind::Reservation, digits);
    debug!(%id, resource = %form.resource, "creating reservation");
    let record = build_reservation(form, id, today)?;
    commit(store, records, RecordKind::Reservation, record)
}
