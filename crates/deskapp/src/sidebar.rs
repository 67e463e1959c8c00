//! Sidebar navigation menu and which of its groups are expanded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::navigation::ActivePage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLink {
    pub title: &'static str,
    pub icon: &'static str,
    /// Shorter label shown in the sidebar when the title is too long.
    pub nav_label: Option<&'static str>,
}

impl MenuLink {
    const fn new(title: &'static str, icon: &'static str) -> Self {
        Self {
            title,
            icon,
            nav_label: None,
        }
    }

    const fn nav(self, label: &'static str) -> Self {
        Self {
            nav_label: Some(label),
            ..self
        }
    }

    pub fn label(&self) -> &'static str {
        self.nav_label.unwrap_or(self.title)
    }

    /// Dashboard page the link opens, if it is one the dashboard renders.
    pub fn page(&self) -> Option<ActivePage> {
        self.title.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Single(MenuLink),
    Group {
        label: &'static str,
        icon: &'static str,
        items: &'static [MenuLink],
    },
    Separator,
}

pub const MENU: &[MenuItem] = &[
    MenuItem::Single(MenuLink::new("Home", "home")),
    MenuItem::Group {
        label: "Recent visited",
        icon: "history",
        items: &[
            MenuLink::new("Dashboard", "dashboard"),
            MenuLink::new("Analytics", "analytics"),
        ],
    },
    MenuItem::Separator,
    MenuItem::Group {
        label: "Work Orders",
        icon: "build_circle",
        items: &[
            MenuLink::new("Tasks", "task"),
            MenuLink::new("Schedules", "schedule"),
        ],
    },
    MenuItem::Group {
        label: "Incidents",
        icon: "warning",
        items: &[
            MenuLink::new("All Incidents", "list"),
            MenuLink::new("Active Incidents", "error"),
        ],
    },
    MenuItem::Group {
        label: "Resource Reservations",
        icon: "event",
        items: &[
            MenuLink::new("Upcoming reservations", "schedule").nav("Schedule"),
            MenuLink::new("Resource list", "list"),
        ],
    },
    MenuItem::Group {
        label: "Visitors",
        icon: "people",
        items: &[MenuLink::new("Upcoming visits", "schedule").nav("Schedule")],
    },
    MenuItem::Group {
        label: "Tenant Compliance",
        icon: "verified",
        items: &[
            MenuLink::new("Compliance Overview", "dashboard"),
            MenuLink::new("Violations", "error"),
        ],
    },
    MenuItem::Separator,
    MenuItem::Single(MenuLink::new("My Properties", "apartment")),
    MenuItem::Single(MenuLink::new("My Companies", "business")),
    MenuItem::Single(MenuLink::new("My Users", "group")),
    MenuItem::Single(MenuLink::new("My Files", "folder")),
];

/// Labels of every group in the menu.
pub fn group_labels() -> impl Iterator<Item = &'static str> {
    MENU.iter().filter_map(|item| match item {
        MenuItem::Group { label, .. } => Some(*label),
        _ => None,
    })
}

/// Group label containing the link that opens `page`.
pub fn group_for(page: ActivePage) -> Option<&'static str> {
    MENU.iter().find_map(|item| match item {
        MenuItem::Group { label, items, .. } if items.iter().any(|i| i.page() == Some(page)) => {
            Some(*label)
        }
        _ => None,
    })
}

/// Expanded state per group label. Groups never toggled are collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpenGroups(BTreeMap<String, bool>);

impl OpenGroups {
    pub fn is_open(&self, label: &str) -> bool {
        self.0.get(label).copied().unwrap_or(false)
    }

    /// Flip a group and return its new state.
    pub fn toggle(&mut self, label: &str) -> bool {
        let open = !self.is_open(label);
        self.0.insert(label.to_string(), open);
        open
    }

    pub fn open(&mut self, label: &str) {
        self.0.insert(label.to_string(), true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_label_overrides_title() {
        let link = MenuLink::new("Upcoming visits", "schedule").nav("Schedule");
        assert_eq!(link.label(), "Schedule");
        assert_eq!(MenuLink::new("Tasks", "task").label(), "Tasks");
    }

    #[test]
    fn links_resolve_to_pages() {
        assert_eq!(group_for(ActivePage::Tasks), Some("Work Orders"));
        assert_eq!(group_for(ActivePage::UpcomingVisits), Some("Visitors"));
        assert_eq!(
            group_for(ActivePage::UpcomingReservations),
            Some("Resource Reservations")
        );
        assert_eq!(group_for(ActivePage::CreateReservation), None);
    }

    #[test]
    fn menu_has_six_groups() {
        assert_eq!(group_labels().count(), 6);
    }

    #[test]
    fn groups_start_collapsed_and_toggle() {
        let mut groups = OpenGroups::default();
        assert!(!groups.is_open("Visitors"));
        assert!(groups.toggle("Visitors"));
        assert!(groups.is_open("Visitors"));
        assert!(!groups.toggle("Visitors"));
    }

    #[test]
    fn open_groups_serialize_as_plain_map() {
        let mut groups = OpenGroups::default();
        groups.open("Incidents");
        assert_eq!(serde_json::to_string(&groups).unwrap(), r#"{"Incidents":true}"#);
        let parsed: OpenGroups = serde_json::from_str(r#"{"Visitors":false}"#).unwrap();
        assert!(!parsed.is_open("Visitors"));
    }
}
