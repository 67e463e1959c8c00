//! Demo records the dashboard starts with.
//!
//! Dates are relative to `today` so the demo always shows recent activity.

use chrono::{Days, NaiveDate};

use crate::model::{format_date, Record, RecordKind};

pub fn records(kind: RecordKind, today: NaiveDate) -> Vec<Record> {
    match kind {
        RecordKind::WorkOrder => work_orders(today),
        RecordKind::Visitor => visitors(today),
        RecordKind::Reservation => reservations(today),
    }
}

fn yesterday(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}

pub fn work_orders(today: NaiveDate) -> Vec<Record> {
    vec![
        Record::new("W-11631-000034", format_date(today))
            .with("title", "HVAC (General)")
            .with("category", "HVAC")
            .with("priority", "High")
            .with("status", "Upcoming")
            .with("assignee", "Sarah Chen")
            .with("property", "1 Main Street")
            .with(
                "description",
                "Full replacement of the existing HVAC system: remove old equipment, install \
                 new units, and reconnect to building controls and ductwork.",
            )
            .with("icon", "hvac"),
        Record::new("W-11631-000047", format_date(yesterday(today)))
            .with("title", "Plumbing")
            .with("category", "Plumbing")
            .with("type", "Maintenance")
            .with("priority", "Low")
            .with("status", "New")
            .with("assignee", "Mike Johnson")
            .with("property", "1 Main Street")
            .with(
                "description",
                "Minor leak detected under the sink in the 2nd floor restroom. The leak is slow \
                 but should be addressed to prevent water damage to the cabinet and flooring.",
            )
            .with("icon", "plumbing"),
    ]
}

pub fn visitors(today: NaiveDate) -> Vec<Record> {
    let visitor = |id: &str, created: NaiveDate, name: &str, status: &str| {
        Record::new(id, format_date(created))
            .with("name", name)
            .with("propertyStatus", "First Visit")
            .with("status", status)
            .with("type", "Guest")
            .with("date", format_date(created))
            .with("time", "9:00 AM - 5:00 PM")
            .with("property", "1 Main Street")
            .with("createdFor", "John Doe")
            .with("premierAccess", false)
    };
    vec![
        visitor("V-11631-000034", today, "Sarah Mitchell", "Checked In"),
        visitor("V-11631-000047", yesterday(today), "James Anderson", "Scheduled"),
    ]
}

pub fn reservations(today: NaiveDate) -> Vec<Record> {
    let reservation = |id: &str, created: NaiveDate, resource: &str| {
        Record::new(id, format_date(created))
            .with("reservationName", "All Day event")
            .with("resourceName", resource)
            .with("status", "Confirmed")
            .with("date", format_date(today))
            .with("time", "9:00 AM - 5:00 PM")
            .with("allDay", true)
            .with("company", "Starbucks")
            .with("type", "Meeting Room")
            .with("property", "1 Main Street")
            .with("floor", "Floor 2")
            .with("capacity", 12u32)
    };
    vec![
        reservation("R-11631-000034", today, "Sand Room"),
        reservation("R-11631-000047", yesterday(today), "Sky Room"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn ids_carry_kind_prefix() {
        for kind in RecordKind::ALL {
            for record in records(kind, today()) {
                assert!(record.id.starts_with(kind.id_prefix()), "{}", record.id);
            }
        }
    }

    #[test]
    fn second_record_is_from_yesterday() {
        let orders = work_orders(today());
        assert_eq!(orders[0].created, "03/01/2026");
        assert_eq!(orders[1].created, "02/28/2026");
    }
}
