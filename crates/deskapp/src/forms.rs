//! Creation forms and their required-field checks.
//!
//! Each form reports missing fields in a fixed priority order, the order in
//! which the form shows them top to bottom. The first missing field is the
//! one the UI scrolls to. End fields of a start/end pair share the anchor of
//! their start field, since both sit in one row.

use serde::{Deserialize, Serialize};

use crate::error::{DeskError, Result};

/// Missing required fields, in the form's priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    fields: Vec<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| *f == field)
    }

    pub fn first(&self) -> Option<&str> {
        self.fields.first().copied()
    }

    /// Element to scroll to for the first error.
    pub fn scroll_anchor(&self) -> Option<&'static str> {
        self.fields.first().copied().map(scroll_anchor)
    }

    fn require(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.fields.push(field);
        }
    }

    fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DeskError::Validation(self))
        }
    }
}

/// Paired end fields scroll to their start field.
pub fn scroll_anchor(field: &str) -> &str {
    match field {
        "visitDateEnd" => "visitDateStart",
        "visitTimeEnd" => "visitTimeStart",
        other => other,
    }
}

pub trait Validate {
    fn missing_fields(&self) -> ValidationErrors;

    fn validate(&self) -> Result<()> {
        self.missing_fields().into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkOrderForm {
    /// Issue type value (see [`ISSUE_TYPES`]) or free text.
    pub issue_type: String,
    pub details: String,
    pub property: String,
    pub floor: String,
    pub company: String,
    pub requested_for: String,
    /// The expanded form, where location and requester become required.
    pub edit_details: bool,
}

impl Validate for WorkOrderForm {
    fn missing_fields(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        errors.require("issueType", &self.issue_type);
        errors.require("details", &self.details);
        if self.edit_details {
            errors.require("property", &self.property);
            errors.require("floor", &self.floor);
            errors.require("company", &self.company);
            errors.require("requestedFor", &self.requested_for);
        }
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitorForm {
    pub first_name: String,
    pub last_name: String,
    pub visitor_type: String,
    pub company: String,
    pub host: String,
    pub property: String,
    pub date_start: String,
    pub date_end: String,
    pub time_start: String,
    pub time_end: String,
    pub all_day: bool,
}

impl Validate for VisitorForm {
    fn missing_fields(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        errors.require("visitorFirstName", &self.first_name);
        errors.require("visitorLastName", &self.last_name);
        errors.require("visitDateStart", &self.date_start);
        errors.require("visitDateEnd", &self.date_end);
        if !self.all_day {
            errors.require("visitTimeStart", &self.time_start);
            errors.require("visitTimeEnd", &self.time_end);
        }
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationForm {
    /// Reservation name shown on the booking.
    pub details: String,
    pub resource: String,
    pub property: String,
    pub floor: String,
    pub company: String,
    pub date_start: String,
    pub date_end: String,
    pub time_start: String,
    pub time_end: String,
    pub all_day: bool,
}

impl Validate for ReservationForm {
    fn missing_fields(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        errors.require("visitDateStart", &self.date_start);
        errors.require("visitDateEnd", &self.date_end);
        if !self.all_day {
            errors.require("visitTimeStart", &self.time_start);
            errors.require("visitTimeEnd", &self.time_end);
        }
        errors.require("reservationDetails", &self.details);
        errors
    }
}

/// A selectable work order issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueType {
    pub value: &'static str,
    pub label: &'static str,
    pub group: &'static str,
}

const fn issue(value: &'static str, label: &'static str, group: &'static str) -> IssueType {
    IssueType {
        value,
        label,
        group,
    }
}

pub const ISSUE_TYPES: &[IssueType] = &[
    issue("cleaning-after-hours", "Cleaning - After Hours", "Cleaning"),
    issue("cleaning-janitorial", "Cleaning / Janitorial", "Cleaning"),
    issue("trash-removal", "Trash Removal", "Cleaning"),
    issue("electrical-general", "Electrical (General)", "Electrical"),
    issue("lighting", "Lighting", "Electrical"),
    issue("irrigation-leak", "Irrigation Leak", "Exterior"),
    issue("landscaping", "Landscaping", "Exterior"),
    issue("parking", "Parking", "Exterior"),
    issue("snow-ice-removal", "Snow / Ice Removal", "Exterior"),
    issue("hvac-general", "HVAC (General)", "HVAC"),
    issue("hvac-too-cold", "HVAC - Too Cold", "HVAC"),
    issue("hvac-too-hot", "HVAC - Too Hot", "HVAC"),
    issue("hvac-overtime", "HVAC - Overtime", "HVAC"),
    issue("doors", "Doors", "Keys & Locks"),
    issue("keys-and-locks", "Keys and Locks", "Keys & Locks"),
    issue("window-plate-glass", "Window / Plate Glass", "Keys & Locks"),
    issue("ceiling", "Ceiling", "Maintenance"),
    issue("elevator", "Elevator", "Maintenance"),
    issue("elevator-escalator", "Elevator / Escalator", "Maintenance"),
    issue("maintenance", "Maintenance", "Maintenance"),
    issue("access-card", "Access Card", "Plumbing"),
    issue("plumbing-leak", "Plumbing / Leak", "Plumbing"),
    issue("roof-leak", "Roof Leak", "Plumbing"),
    issue("fire-protection", "Fire Protection", "Safety"),
    issue("security", "Security", "Safety"),
    issue("vendor-escort", "Vendor Escort", "Safety"),
    issue("medical-equipment", "Medical Equipment", "Other"),
    issue("miscellaneous", "Miscellaneous", "Other"),
    issue("pest-control", "Pest Control", "Other"),
    issue("signage", "Signage", "Other"),
    issue("stairwell", "Stairwell", "Other"),
];

pub fn issue_type(value: &str) -> Option<&'static IssueType> {
    ISSUE_TYPES.iter().find(|t| t.value == value)
}

pub const FALLBACK_ICON: &str = "construction";

/// Tile icon for an issue group.
pub fn group_icon(group: &str) -> &'static str {
    match group {
        "Cleaning" => "cleaning_services",
        "Electrical" => "electrical_services",
        "Exterior" => "yard",
        "HVAC" => "hvac",
        "Keys & Locks" => "key",
        "Maintenance" => "handyman",
        "Plumbing" => "plumbing",
        "Safety" => "shield",
        _ => FALLBACK_ICON,
    }
}
