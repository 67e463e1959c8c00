use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{filters_for, FilterOption, FilterShape, FilterSpec, FilterValue, Range};
use crate::error::{DeskError, Result};
use crate::model::RecordKind;

/// Current value of every filter that has been touched.
///
/// Keys are filter keys, which are unique across record kinds, so a single
/// state can hold the filters of all three views. Untouched keys read as the
/// inactive default of their shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    values: BTreeMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    /// The value for a spec, or its inactive default.
    pub fn value(&self, spec: &FilterSpec) -> FilterValue {
        self.values
            .get(spec.key)
            .cloned()
            .unwrap_or_else(|| FilterValue::inactive(spec.shape))
    }

    /// Active filters of a kind, in registry order.
    pub fn active(&self, kind: RecordKind) -> impl Iterator<Item = (&'static FilterSpec, &FilterValue)> {
        filters_for(kind).iter().filter_map(move |spec| {
            self.values
                .get(spec.key)
                .filter(|value| value.is_active())
                .map(|value| (spec, value))
        })
    }

    pub fn set_selection(&mut self, spec: &FilterSpec, values: BTreeSet<String>) -> Result<()> {
        expect_shape(spec, &[FilterShape::MultiSelect])?;
        self.store(spec, FilterValue::Selection(values));
        Ok(())
    }

    /// Add the option if absent, remove it if present.
    pub fn toggle_option(&mut self, spec: &FilterSpec, value: &str) -> Result<()> {
        expect_shape(spec, &[FilterShape::MultiSelect])?;
        let mut selected = self
            .values
            .get(spec.key)
            .and_then(FilterValue::as_selection)
            .cloned()
            .unwrap_or_default();
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.store(spec, FilterValue::Selection(selected));
        Ok(())
    }

    pub fn set_range(&mut self, spec: &FilterSpec, range: Range) -> Result<()> {
        expect_shape(spec, &[FilterShape::DateRange, FilterShape::TimeRange])?;
        self.store(spec, FilterValue::Range(range));
        Ok(())
    }

    pub fn set_toggle(&mut self, spec: &FilterSpec, value: Option<bool>) -> Result<()> {
        expect_shape(spec, &[FilterShape::Toggle])?;
        self.store(spec, FilterValue::Toggle(value));
        Ok(())
    }

    pub fn reset(&mut self, spec: &FilterSpec) {
        self.values.remove(spec.key);
    }

    pub fn is_any_active(&self, kind: RecordKind) -> bool {
        self.active(kind).next().is_some()
    }

    /// Reset every filter of `kind` whose key is not in `preserve`.
    pub fn clear(&mut self, kind: RecordKind, preserve: &[String]) {
        for spec in filters_for(kind) {
            if !preserve.iter().any(|key| key == spec.key) {
                self.values.remove(spec.key);
            }
        }
    }

    // Inactive values are dropped so a cleared state equals a fresh one.
    fn store(&mut self, spec: &FilterSpec, value: FilterValue) {
        if value.is_active() {
            self.values.insert(spec.key.to_string(), value);
        } else {
            self.values.remove(spec.key);
        }
    }
}

fn expect_shape(spec: &FilterSpec, allowed: &[FilterShape]) -> Result<()> {
    if allowed.contains(&spec.shape) {
        Ok(())
    } else {
        Err(DeskError::FilterMismatch(spec.key.to_string()))
    }
}

/// True if at least one filter of `kind` is active.
pub fn is_any_filter_active(filters: &FilterState, kind: RecordKind) -> bool {
    filters.is_any_active(kind)
}

/// Return a copy of `filters` with every filter of `kind` not named in
/// `preserve` reset to its inactive default.
pub fn clear_all(filters: &FilterState, kind: RecordKind, preserve: &[String]) -> FilterState {
    let mut cleared = filters.clone();
    cleared.clear(kind, preserve);
    cleared
}

/// Options to show in a multi-select dropdown.
///
/// Options whose label contains `search` (case-insensitive) are kept; the
/// selected ones come first and both groups keep registry order.
pub fn visible_options(
    spec: &FilterSpec,
    selected: &BTreeSet<String>,
    search: &str,
) -> Vec<&'static FilterOption> {
    let needle = search.trim().to_lowercase();
    let (mut chosen, rest): (Vec<_>, Vec<_>) = spec
        .options
        .iter()
        .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
        .partition(|o| selected.contains(o.value));
    chosen.extend(rest);
    chosen
}
