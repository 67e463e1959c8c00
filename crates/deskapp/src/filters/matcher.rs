//! Record filtering.
//!
//! A [`RecordFilter`] pairs a [`FilterSpec`] with its current value and decides
//! whether a record passes. Categorical values are normalized before
//! comparison according to the filter's [`MatchRule`].

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{FilterOption, FilterShape, FilterSpec, FilterValue, MatchRule};
use crate::model::{parse_date, parse_time_span, FieldRef, Record};

static DEFAULT_ALIASES: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
    [("street", "st"), ("avenue", "ave")]
        .into_iter()
        .map(|(word, alias)| (word.to_string(), alias.to_string()))
        .collect()
});

/// Word alias table used by [`MatchRule::Alias`] (e.g. `street` → `st`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    words: BTreeMap<String, String>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self {
            words: DEFAULT_ALIASES.clone(),
        }
    }
}

impl AliasTable {
    pub fn new(words: BTreeMap<String, String>) -> Self {
        let words = words
            .into_iter()
            .map(|(w, a)| (w.to_lowercase(), a.to_lowercase()))
            .collect();
        Self { words }
    }

    /// Split into lowercase words, mapping each through the table.
    /// Hyphens separate words; trailing `.` and `,` are dropped.
    pub fn words(&self, raw: &str) -> Vec<String> {
        raw.to_lowercase()
            .split(|c: char| c.is_whitespace() || c == '-')
            .map(|w| w.trim_end_matches(['.', ',']))
            .filter(|w| !w.is_empty())
            .map(|w| self.words.get(w).cloned().unwrap_or_else(|| w.to_string()))
            .collect()
    }
}

/// Lowercase, trim, and join whitespace-separated words with `-`.
pub fn slug(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// A filter condition bound to its spec.
#[derive(Debug, Clone, Copy)]
pub struct RecordFilter<'a> {
    pub spec: &'static FilterSpec,
    pub value: &'a FilterValue,
}

impl<'a> RecordFilter<'a> {
    pub fn new(spec: &'static FilterSpec, value: &'a FilterValue) -> Self {
        Self { spec, value }
    }

    /// Check whether the record satisfies this filter.
    ///
    /// An inactive filter passes every record. An active filter fails a
    /// record whose field is absent or cannot be parsed for the filter shape.
    pub fn matches(&self, record: &Record, aliases: &AliasTable) -> bool {
        if !self.value.is_active() {
            return true;
        }
        let field = record.get(self.spec.field);

        match (self.spec.shape, self.value) {
            (FilterShape::MultiSelect, FilterValue::Selection(selected)) => {
                let Some(field) = field else {
                    return false;
                };
                selected
                    .iter()
                    .any(|value| self.option_matches(field, value, aliases))
            }
            (FilterShape::DateRange, FilterValue::Range(range)) => {
                let (Some(date), Some((start, end))) =
                    (field.and_then(|f| parse_date(&f.text())), range.dates())
                else {
                    return false;
                };
                start <= date && date <= end
            }
            (FilterShape::TimeRange, FilterValue::Range(range)) => {
                let Some(window) = range.times() else {
                    return false;
                };
                if record.get(ALL_DAY_FIELD).and_then(|f| f.boolean()) == Some(true) {
                    return true;
                }
                field
                    .and_then(|f| parse_time_span(&f.text()))
                    .is_some_and(|span| spans_overlap(window, span))
            }
            (FilterShape::Toggle, FilterValue::Toggle(Some(want))) => {
                field.and_then(|f| f.boolean()).unwrap_or(false) == *want
            }
            // Value shape does not fit the filter; nothing can satisfy it.
            _ => false,
        }
    }

    fn option_matches(&self, field: FieldRef<'_>, value: &str, aliases: &AliasTable) -> bool {
        let option = self.spec.option(value).copied().unwrap_or(FilterOption {
            value: "",
            label: "",
        });
        let candidates = [value, option.label];
        let candidates = candidates.iter().filter(|c| !c.is_empty());

        match self.spec.rule {
            MatchRule::Slug => {
                let record = slug(&field.text());
                candidates.into_iter().any(|c| slug(c) == record)
            }
            MatchRule::Alias => {
                let record = aliases.words(&field.text());
                candidates.into_iter().any(|c| {
                    let wanted = aliases.words(c);
                    !wanted.is_empty() && record.windows(wanted.len()).any(|w| w == wanted)
                })
            }
            MatchRule::Bucket => {
                let Some(n) = field.number() else {
                    return false;
                };
                candidates.into_iter().any(|c| in_bucket(n, c))
            }
        }
    }
}

/// Records flagged all-day pass every time window.
const ALL_DAY_FIELD: &str = "allDay";

/// Whether `time` lies in `[start, end]`. An end before the start wraps past
/// midnight.
fn in_window((start, end): (NaiveTime, NaiveTime), time: NaiveTime) -> bool {
    if start <= end {
        start <= time && time <= end
    } else {
        time >= start || time <= end
    }
}

/// Two inclusive windows on the clock share at least one instant.
fn spans_overlap(a: (NaiveTime, NaiveTime), b: (NaiveTime, NaiveTime)) -> bool {
    in_window(a, b.0) || in_window(b, a.0)
}

/// `"11-25"` is inclusive on both ends; `"100+"` is open-ended.
fn in_bucket(n: f64, label: &str) -> bool {
    let label = label.trim();
    if let Some(min) = label.strip_suffix('+') {
        return min.trim().parse::<f64>().is_ok_and(|min| n >= min);
    }
    match label.split_once('-') {
        Some((lo, hi)) => match (lo.trim().parse::<f64>(), hi.trim().parse::<f64>()) {
            (Ok(lo), Ok(hi)) => lo <= n && n <= hi,
            _ => false,
        },
        None => label.parse::<f64>().is_ok_and(|exact| exact == n),
    }
}
