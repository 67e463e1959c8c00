//! Multi-key sorting.
//!
//! A [`SortState`] is an ordered list of keys; the first key is primary and
//! later keys only break ties. Clicking a column header cycles that column
//! through ascending, descending and off ([`toggle_sort`]).
//!
//! An empty sort state does not mean "unordered": [`DEFAULT_SORT`] applies,
//! newest `created` first.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::model::{parse_date, Record, RecordKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

/// Ordering used when no sort key is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultSort {
    pub field: &'static str,
    pub direction: SortDirection,
}

pub const DEFAULT_SORT: DefaultSort = DefaultSort {
    field: "created",
    direction: SortDirection::Descending,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortState {
    keys: Vec<SortKey>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn direction(&self, field: &str) -> Option<SortDirection> {
        self.keys
            .iter()
            .find(|k| k.field == field)
            .map(|k| k.direction)
    }

    /// 1-based priority of a field, for header badges.
    pub fn priority(&self, field: &str) -> Option<usize> {
        self.keys.iter().position(|k| k.field == field).map(|i| i + 1)
    }

    /// Cycle a field: absent → ascending → descending → absent.
    ///
    /// A newly added field goes last. Flipping to descending keeps its place.
    pub fn toggle(&mut self, field: &str) {
        match self.keys.iter().position(|k| k.field == field) {
            None => self.keys.push(SortKey {
                field: field.to_string(),
                direction: SortDirection::Ascending,
            }),
            Some(i) if self.keys[i].direction == SortDirection::Ascending => {
                self.keys[i].direction = SortDirection::Descending;
            }
            Some(i) => {
                self.keys.remove(i);
            }
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Compare two records under this state, falling back to
    /// [`DEFAULT_SORT`] when no key is active.
    pub fn compare(&self, kind: RecordKind, a: &Record, b: &Record) -> Ordering {
        if self.keys.is_empty() {
            let DefaultSort { field, direction } = DEFAULT_SORT;
            return direction.apply(compare_field(kind, a, b, field));
        }
        self.keys
            .iter()
            .map(|key| key.direction.apply(compare_field(kind, a, b, &key.field)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

pub fn toggle_sort(sort: &SortState, field: &str) -> SortState {
    let mut next = sort.clone();
    next.toggle(field);
    next
}

/// Compare one field of two records.
///
/// Date fields of the kind compare as calendar dates, numeric values as
/// numbers, everything else as case-sensitive text. A missing value on
/// either side compares equal.
pub fn compare_field(kind: RecordKind, a: &Record, b: &Record, field: &str) -> Ordering {
    let (Some(left), Some(right)) = (a.get(field), b.get(field)) else {
        return Ordering::Equal;
    };

    if kind.is_date_field(field) {
        if let (Some(l), Some(r)) = (parse_date(&left.text()), parse_date(&right.text())) {
            return l.cmp(&r);
        }
    }
    if let (Some(l), Some(r)) = (left.number(), right.number()) {
        return l.partial_cmp(&r).unwrap_or(Ordering::Equal);
    }
    left.text().cmp(&right.text())
}

/// Stable sort of borrowed records.
pub fn sort_records(kind: RecordKind, records: &mut [&Record], sort: &SortState) {
    records.sort_by(|a, b| sort.compare(kind, a, b));
}
