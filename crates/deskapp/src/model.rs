//! # Domain Model: Records, Kinds and Field Values
//!
//! The dashboard shows three kinds of rows: work orders, visitors and
//! reservations. Rather than three unrelated structs, every row is a
//! [`Record`]: an `id`, a `created` display date and a bag of primitive
//! fields keyed by name. The view engine only ever needs "the value of field
//! X", so a uniform shape keeps filtering and sorting generic.
//!
//! ## Dates Are Display Strings
//!
//! The `created` field (and other date fields such as a visit `date`) are
//! stored the way the UI shows them, `MM/DD/YYYY`. Anything that orders or
//! range-tests dates must parse them with [`parse_date`]; comparing the raw
//! strings would put `01/02/2027` before `12/31/2026`.
//!
//! ## Field Lookup
//!
//! [`Record::get`] returns a borrowed [`FieldRef`]. `id` and `created` are
//! addressable like any other field, so a sort on `"created"` or a filter on
//! `"id"` needs no special casing by the caller.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Display format for dates stored on records.
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

/// ISO format used by date pickers and range filters.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    WorkOrder,
    Visitor,
    Reservation,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [
        RecordKind::WorkOrder,
        RecordKind::Visitor,
        RecordKind::Reservation,
    ];

    /// Prefix shared by every id of this kind; the numeric suffix follows it.
    pub fn id_prefix(self) -> &'static str {
        match self {
            RecordKind::WorkOrder => "W-11631-",
            RecordKind::Visitor => "V-11631-",
            RecordKind::Reservation => "R-11631-",
        }
    }

    /// Fields that hold calendar dates and must be compared as such.
    pub fn date_fields(self) -> &'static [&'static str] {
        match self {
            RecordKind::WorkOrder => &["created"],
            RecordKind::Visitor => &["created", "date", "checkIn", "checkOut"],
            RecordKind::Reservation => &["created", "date"],
        }
    }

    pub fn is_date_field(self, field: &str) -> bool {
        self.date_fields().contains(&field)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::WorkOrder => write!(f, "work order"),
            RecordKind::Visitor => write!(f, "visitor"),
            RecordKind::Reservation => write!(f, "reservation"),
        }
    }
}

/// A primitive field value as stored on a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_ref(&self) -> FieldRef<'_> {
        match self {
            FieldValue::Bool(b) => FieldRef::Bool(*b),
            FieldValue::Number(n) => FieldRef::Number(*n),
            FieldValue::Text(s) => FieldRef::Text(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

/// Borrowed view of a field, returned by [`Record::get`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    Bool(bool),
    Number(f64),
    Text(&'a str),
}

impl<'a> FieldRef<'a> {
    /// Text rendering used for categorical matching.
    ///
    /// Booleans render as `Yes`/`No` (the labels the option lists use) and
    /// whole numbers drop their fractional part.
    pub fn text(&self) -> Cow<'a, str> {
        match *self {
            FieldRef::Text(s) => Cow::Borrowed(s),
            FieldRef::Bool(true) => Cow::Borrowed("Yes"),
            FieldRef::Bool(false) => Cow::Borrowed("No"),
            FieldRef::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                Cow::Owned(format!("{}", n as i64))
            }
            FieldRef::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Numeric value, if the field is a number or numeric text.
    pub fn number(&self) -> Option<f64> {
        match *self {
            FieldRef::Number(n) => Some(n),
            FieldRef::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            FieldRef::Bool(_) => None,
        }
    }

    pub fn boolean(&self) -> Option<bool> {
        match *self {
            FieldRef::Bool(b) => Some(b),
            FieldRef::Text(s) if s.eq_ignore_ascii_case("yes") || s == "true" => Some(true),
            FieldRef::Text(s) if s.eq_ignore_ascii_case("no") || s == "false" => Some(false),
            _ => None,
        }
    }
}

/// One row of dashboard data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    /// Creation date in `MM/DD/YYYY` form.
    pub created: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(id: impl Into<String>, created: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created: created.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Look up a field by name. `id` and `created` resolve to the record's
    /// identity fields.
    pub fn get(&self, field: &str) -> Option<FieldRef<'_>> {
        match field {
            "id" => Some(FieldRef::Text(&self.id)),
            "created" => Some(FieldRef::Text(&self.created)),
            _ => self.fields.get(field).map(FieldValue::as_ref),
        }
    }

    /// Text value of a field, or `None` if absent.
    pub fn text(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).map(|v| v.text())
    }

    pub fn created_date(&self) -> Option<NaiveDate> {
        parse_date(&self.created)
    }
}

/// Format a date the way records store it (`MM/DD/YYYY`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parse a record or picker date: `MM/DD/YYYY` first, then ISO `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DISPLAY_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT))
        .ok()
}

/// Parse a time-of-day. Accepts `HH:MM` (24h) and `H:MM AM/PM`. For a span
/// such as `"09:00 - 17:00"` the start is returned.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let start = raw.split(" - ").next().unwrap_or(raw).trim();
    NaiveTime::parse_from_str(start, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(start, "%I:%M %p"))
        .ok()
}

/// Parse a time span such as `"9:00 AM - 5:00 PM"`. A single time is a span
/// of zero length; an unparseable end falls back to the start.
pub fn parse_time_span(raw: &str) -> Option<(NaiveTime, NaiveTime)> {
    let start = parse_time(raw)?;
    let end = raw
        .split_once(" - ")
        .and_then(|(_, end)| parse_time(end))
        .unwrap_or(start);
    Some((start, end))
}

/// Render a 24h `HH:MM` time as `H:MM AM/PM`. Returns an empty string for
/// unparseable input.
pub fn format_time_us(time24: &str) -> String {
    match NaiveTime::parse_from_str(time24.trim(), "%H:%M") {
        Ok(t) => t.format("%-I:%M %p").to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_resolves_identity_fields() {
        let record = Record::new("W-11631-000001", "03/04/2026").with("status", "New");

        assert_eq!(record.get("id"), Some(FieldRef::Text("W-11631-000001")));
        assert_eq!(record.get("created"), Some(FieldRef::Text("03/04/2026")));
        assert_eq!(record.get("status"), Some(FieldRef::Text("New")));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn field_text_renders_numbers_and_bools() {
        assert_eq!(FieldRef::Number(12.0).text(), "12");
        assert_eq!(FieldRef::Number(1.5).text(), "1.5");
        assert_eq!(FieldRef::Bool(true).text(), "Yes");
        assert_eq!(FieldRef::Bool(false).text(), "No");
    }

    #[test]
    fn field_number_parses_numeric_text() {
        assert_eq!(FieldRef::Text(" 42 ").number(), Some(42.0));
        assert_eq!(FieldRef::Text("W-1").number(), None);
        assert_eq!(FieldRef::Bool(true).number(), None);
    }

    #[test]
    fn parse_date_accepts_display_and_iso() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert_eq!(parse_date("03/04/2026"), Some(expected));
        assert_eq!(parse_date("2026-03-04"), Some(expected));
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn format_date_round_trips_display_format() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        assert_eq!(format_date(date), "12/01/2026");
    }

    #[test]
    fn parse_time_handles_24h_12h_and_spans() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(parse_time("09:00"), Some(nine));
        assert_eq!(parse_time("9:00 AM"), Some(nine));
        assert_eq!(parse_time("09:00 - 17:00"), Some(nine));
        assert_eq!(
            parse_time("1:30 PM"),
            NaiveTime::from_hms_opt(13, 30, 0)
        );
        assert_eq!(parse_time("noon"), None);
    }

    #[test]
    fn parse_time_span_reads_both_ends() {
        let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        assert_eq!(parse_time_span("9:00 AM - 5:00 PM"), Some((t(9), t(17))));
        assert_eq!(parse_time_span("13:00"), Some((t(13), t(13))));
        assert_eq!(parse_time_span("13:00 - later"), Some((t(13), t(13))));
        assert_eq!(parse_time_span("whenever"), None);
    }

    #[test]
    fn format_time_us_converts_24h() {
        assert_eq!(format_time_us("13:05"), "1:05 PM");
        assert_eq!(format_time_us("00:30"), "12:30 AM");
        assert_eq!(format_time_us(""), "");
    }

    #[test]
    fn record_serializes_flat() {
        let record = Record::new("V-11631-000001", "01/02/2026")
            .with("name", "Ada Lovelace")
            .with("premierAccess", true);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "V-11631-000001");
        assert_eq!(json["name"], "Ada Lovelace");
        assert_eq!(json["premierAccess"], true);

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
