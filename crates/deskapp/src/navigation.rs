//! Route selection: which page is active and how its list is laid out.
//!
//! The active page travels in the `page` query parameter
//! (`?page=Upcoming+visits`). Unknown values are ignored so a stale link
//! never breaks the current view.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeskError;
use crate::model::RecordKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivePage {
    #[default]
    Home,
    Tasks,
    #[serde(rename = "Upcoming visits")]
    UpcomingVisits,
    #[serde(rename = "Upcoming reservations")]
    UpcomingReservations,
    #[serde(rename = "Create reservation")]
    CreateReservation,
}

impl ActivePage {
    pub const ALL: [ActivePage; 5] = [
        ActivePage::Home,
        ActivePage::Tasks,
        ActivePage::UpcomingVisits,
        ActivePage::UpcomingReservations,
        ActivePage::CreateReservation,
    ];

    /// Value used in the `page` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivePage::Home => "Home",
            ActivePage::Tasks => "Tasks",
            ActivePage::UpcomingVisits => "Upcoming visits",
            ActivePage::UpcomingReservations => "Upcoming reservations",
            ActivePage::CreateReservation => "Create reservation",
        }
    }

    /// Page heading.
    pub fn title(self) -> &'static str {
        match self {
            ActivePage::Home => "Home",
            ActivePage::Tasks => "Work Orders",
            ActivePage::UpcomingVisits => "Visitors",
            ActivePage::UpcomingReservations => "Resource Reservations",
            ActivePage::CreateReservation => "Create reservation",
        }
    }

    /// Kind of record the page lists. Home shows work orders.
    pub fn kind(self) -> RecordKind {
        match self {
            ActivePage::Home | ActivePage::Tasks => RecordKind::WorkOrder,
            ActivePage::UpcomingVisits => RecordKind::Visitor,
            ActivePage::UpcomingReservations | ActivePage::CreateReservation => {
                RecordKind::Reservation
            }
        }
    }

    /// Pick the page out of a query string such as `?page=Tasks&x=1`.
    /// Returns `None` when the parameter is absent or not a known page.
    pub fn from_query(query: &str) -> Option<ActivePage> {
        form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .find(|(key, _)| *key == "page")
            .and_then(|(_, value)| value.parse().ok())
    }

    /// Render as a query string, e.g. `?page=Upcoming+visits`.
    pub fn to_query(self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("page", self.as_str())
            .finish();
        format!("?{}", query)
    }
}

impl fmt::Display for ActivePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivePage {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivePage::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| DeskError::UnknownPage(s.to_string()))
    }
}

/// How a list page lays out its records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Tile,
    Calendar,
    Table,
}

impl ViewMode {
    /// The mode a page can actually show. Tasks has no calendar.
    pub fn for_page(self, page: ActivePage) -> ViewMode {
        match (page, self) {
            (ActivePage::Tasks, ViewMode::Calendar) => ViewMode::Tile,
            (_, mode) => mode,
        }
    }
}
