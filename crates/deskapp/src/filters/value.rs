//! Filter value types.
//!
//! A filter value is "active" when applying it could exclude a record. The
//! inactive state of every shape is its default, so a cleared filter and a
//! never-touched filter are indistinguishable.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::FilterShape;
use crate::model::{parse_date, parse_time};

/// A start/end pair as entered in a picker (`YYYY-MM-DD` dates, `HH:MM`
/// times). Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: String,
    pub end: String,
}

impl Range {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// A range only filters once both ends are set.
    pub fn is_set(&self) -> bool {
        !self.start.trim().is_empty() && !self.end.trim().is_empty()
    }

    pub fn dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((parse_date(&self.start)?, parse_date(&self.end)?))
    }

    pub fn times(&self) -> Option<(NaiveTime, NaiveTime)> {
        Some((parse_time(&self.start)?, parse_time(&self.end)?))
    }
}

/// Runtime value of one filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FilterValue {
    /// Selected option values. Empty means not applied.
    Selection(BTreeSet<String>),
    /// Date or time range. Not applied unless both ends are set.
    Range(Range),
    /// Boolean toggle. `None` means not applied.
    Toggle(Option<bool>),
}

impl FilterValue {
    /// The inactive default for a filter shape.
    pub fn inactive(shape: FilterShape) -> Self {
        match shape {
            FilterShape::MultiSelect => FilterValue::Selection(BTreeSet::new()),
            FilterShape::DateRange | FilterShape::TimeRange => FilterValue::Range(Range::default()),
            FilterShape::Toggle => FilterValue::Toggle(None),
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Selection(values) => !values.is_empty(),
            FilterValue::Range(range) => range.is_set(),
            FilterValue::Toggle(value) => value.is_some(),
        }
    }

    pub fn as_selection(&self) -> Option<&BTreeSet<String>> {
        match self {
            FilterValue::Selection(values) => Some(values),
            _ => None,
        }
    }
}
