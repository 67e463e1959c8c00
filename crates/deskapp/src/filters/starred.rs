use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{filters_for, find_spec, FilterSpec};
use crate::error::{DeskError, Result};
use crate::model::RecordKind;
use crate::navigation::ActivePage;

/// Which filters are pinned to the toolbar outside the filter panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarredFilters {
    flags: BTreeMap<String, bool>,
}

impl Default for StarredFilters {
    fn default() -> Self {
        let mut starred = Self {
            flags: BTreeMap::new(),
        };
        starred.set("propertyGroup", true);
        starred.set("property", true);
        starred
    }
}

impl StarredFilters {
    pub fn is_starred(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Flip the pinned flag of a filter. Returns the new flag.
    pub fn toggle_star(&mut self, key: &str) -> Result<bool> {
        if find_spec(key).is_none() {
            return Err(DeskError::UnknownFilter(key.to_string()));
        }
        let starred = !self.is_starred(key);
        self.set(key, starred);
        Ok(starred)
    }

    /// Pinned filters of a kind, in registry order.
    pub fn pinned(&self, kind: RecordKind) -> Vec<&'static FilterSpec> {
        filters_for(kind)
            .iter()
            .filter(|spec| self.is_starred(spec.key))
            .collect()
    }

    /// Merge the pins a page starts with. Pins the page does not mention are
    /// left as they are.
    pub fn apply_page_defaults(&mut self, page: ActivePage) {
        let defaults: &[(&str, bool)] = match page {
            ActivePage::Home | ActivePage::Tasks => &[],
            ActivePage::UpcomingVisits => &[("visitorStatus", true), ("visitDateRange", true)],
            ActivePage::UpcomingReservations => &[
                ("reservationProperty", true),
                ("resource", true),
                ("reservationDateRange", false),
            ],
            ActivePage::CreateReservation => &[
                ("reservationDateRange", true),
                ("reservationTimeRange", true),
                ("reservationAllDay", true),
                ("reservationProperty", false),
                ("resource", false),
            ],
        };
        for (key, starred) in defaults {
            self.set(key, *starred);
        }
    }

    fn set(&mut self, key: &str, starred: bool) {
        self.flags.insert(key.to_string(), starred);
    }
}
