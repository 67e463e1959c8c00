//! Filter specifications and registry.
//!
//! This module declares, for every record kind, which filters exist, what
//! record field each one reads, what shape its value takes and how its
//! categorical options are matched against record values.

use crate::model::RecordKind;

/// The shape of a filter's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterShape {
    /// Set of selected option values; OR within the set.
    MultiSelect,
    /// Inclusive calendar date range.
    DateRange,
    /// Inclusive time-of-day range.
    TimeRange,
    /// Boolean toggle.
    Toggle,
}

/// How a categorical option is compared to a record value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Lowercase, whitespace runs become `-`; compared against the option's
    /// value and label.
    Slug,
    /// Address-style matching. Both sides are split into words and run
    /// through the alias table; the option's words must appear as a
    /// contiguous run in the record's, so `1 Main St` matches
    /// `1 Main Street` but not `11 Main St`.
    Alias,
    /// Numeric record value inside a range label such as `"11-25"` or `"100+"`.
    Bucket,
}

/// One selectable option of a multi-select filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> FilterOption {
    FilterOption { value, label }
}

/// Specification for a single filter.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    /// Filter key used in filter and starred state (e.g. "status", "visitDateRange")
    pub key: &'static str,

    /// The record field the filter reads
    pub field: &'static str,

    /// Human label
    pub label: &'static str,

    pub shape: FilterShape,

    pub rule: MatchRule,

    /// Options for multi-select filters; empty for other shapes
    pub options: &'static [FilterOption],
}

impl FilterSpec {
    const fn new(
        key: &'static str,
        field: &'static str,
        label: &'static str,
        shape: FilterShape,
    ) -> Self {
        Self {
            key,
            field,
            label,
            shape,
            rule: MatchRule::Slug,
            options: &[],
        }
    }

    const fn select(
        key: &'static str,
        field: &'static str,
        label: &'static str,
        options: &'static [FilterOption],
    ) -> Self {
        let mut spec = Self::new(key, field, label, FilterShape::MultiSelect);
        spec.options = options;
        spec
    }

    const fn rule(mut self, rule: MatchRule) -> Self {
        self.rule = rule;
        self
    }

    /// Find an option by value.
    pub fn option(&self, value: &str) -> Option<&'static FilterOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

// --- Option lists ---

const STATUS: &[FilterOption] = &[
    opt("open", "Open"),
    opt("in-progress", "In Progress"),
    opt("pending", "Pending"),
    opt("completed", "Completed"),
    opt("closed", "Closed"),
    opt("new", "New"),
    opt("upcoming", "Upcoming"),
];

const PRIORITY: &[FilterOption] = &[
    opt("low", "Low"),
    opt("medium", "Medium"),
    opt("high", "High"),
    opt("critical", "Critical"),
];

const CATEGORY: &[FilterOption] = &[
    opt("electrical", "Electrical"),
    opt("mechanical", "Mechanical"),
    opt("plumbing", "Plumbing"),
    opt("hvac", "HVAC"),
    opt("general", "General Maintenance"),
];

const ASSIGNEE: &[FilterOption] = &[
    opt("john-doe", "John Doe"),
    opt("sarah-chen", "Sarah Chen"),
    opt("mike-johnson", "Mike Johnson"),
    opt("unassigned", "Unassigned"),
];

const PROPERTY_GROUP: &[FilterOption] = &[
    opt("commercial", "Commercial"),
    opt("residential", "Residential"),
    opt("industrial", "Industrial"),
];

const PROPERTY: &[FilterOption] = &[
    opt("1 Main St", "1 Main St"),
    opt("2 Park Ave", "2 Park Ave"),
    opt("3 Broadway", "3 Broadway"),
    opt("4 Fifth Ave", "4 Fifth Ave"),
];

const REGION: &[FilterOption] = &[
    opt("northeast", "Northeast"),
    opt("southeast", "Southeast"),
    opt("midwest", "Midwest"),
    opt("west", "West"),
];

const BUILDING: &[FilterOption] = &[
    opt("tower-a", "Tower A"),
    opt("tower-b", "Tower B"),
    opt("annex", "Annex"),
];

const FLOOR: &[FilterOption] = &[
    opt("Floor 1", "Floor 1"),
    opt("Floor 2", "Floor 2"),
    opt("Floor 3", "Floor 3"),
    opt("Floor 4", "Floor 4"),
    opt("Basement", "Basement"),
    opt("Ground Floor", "Ground Floor"),
];

const VISITOR_TYPE: &[FilterOption] = &[
    opt("contractor", "Contractor"),
    opt("vendor", "Vendor"),
    opt("guest", "Guest"),
    opt("employee", "Employee"),
];

const YES_NO: &[FilterOption] = &[opt("yes", "Yes"), opt("no", "No")];

const VISITOR_STATUS: &[FilterOption] = &[
    opt("scheduled", "Scheduled"),
    opt("checked-in", "Checked In"),
    opt("checked-out", "Checked Out"),
    opt("cancelled", "Cancelled"),
];

const VISITOR_PROPERTY_STATUS: &[FilterOption] = &[
    opt("first-visit", "First Visit"),
    opt("returning", "Returning"),
    opt("frequent", "Frequent"),
];

const VENDOR_COMPANY: &[FilterOption] = &[
    opt("acme-corp", "ACME Corp"),
    opt("tech-solutions", "Tech Solutions"),
    opt("maintenance-plus", "Maintenance Plus"),
];

const COMPANY_VISITING: &[FilterOption] = &[
    opt("starbucks", "Starbucks"),
    opt("abc-corp", "ABC Corp"),
    opt("xyz-inc", "XYZ Inc"),
];

const REQUESTED_FOR: &[FilterOption] = &[
    opt("john-doe", "John Doe"),
    opt("jane-smith", "Jane Smith"),
    opt("bob-wilson", "Bob Wilson"),
];

const CREATED_BY: &[FilterOption] = &[
    opt("admin", "Admin"),
    opt("reception", "Reception"),
    opt("security", "Security"),
];

const RESERVATION_PROPERTY: &[FilterOption] = &[
    opt("1-main-st", "1 Main St"),
    opt("2-park-ave", "2 Park Ave"),
    opt("3-broadway", "3 Broadway"),
    opt("4-fifth-ave", "4 Fifth Ave"),
];

const RESERVATION_FLOOR: &[FilterOption] = &[
    opt("floor-1", "Floor 1"),
    opt("floor-2", "Floor 2"),
    opt("floor-3", "Floor 3"),
    opt("floor-4", "Floor 4"),
    opt("basement", "Basement"),
    opt("ground-floor", "Ground Floor"),
];

const MANAGEMENT_COMPANY: &[FilterOption] = &[
    opt("jll", "JLL"),
    opt("cbre", "CBRE"),
    opt("cushman-wakefield", "Cushman & Wakefield"),
    opt("colliers", "Colliers"),
];

const OWNER: &[FilterOption] = &[
    opt("abc-corp", "ABC Corp"),
    opt("xyz-inc", "XYZ Inc"),
    opt("global-services", "Global Services"),
    opt("tech-solutions", "Tech Solutions"),
];

const RESERVATION_CREATED_BY: &[FilterOption] = &[
    opt("admin", "Admin"),
    opt("reception", "Reception"),
    opt("security", "Security"),
    opt("manager", "Manager"),
];

const RESERVATION_STATUS: &[FilterOption] = &[
    opt("confirmed", "Confirmed"),
    opt("pending", "Pending"),
    opt("cancelled", "Cancelled"),
    opt("completed", "Completed"),
];

const RESERVATION_TYPE: &[FilterOption] = &[
    opt("meeting-room", "Meeting Room"),
    opt("common-area", "Common Area"),
    opt("event-space", "Event Space"),
    opt("parking", "Parking"),
];

const RESOURCE: &[FilterOption] = &[
    opt("sand-room", "Sand Room"),
    opt("sky-room", "Sky Room"),
    opt("ocean-room", "Ocean Room"),
    opt("forest-room", "Forest Room"),
];

const CAPACITY_UNIT: &[FilterOption] = &[
    opt("people", "People"),
    opt("vehicles", "Vehicles"),
    opt("square-feet", "Square Feet"),
];

const CAPACITY: &[FilterOption] = &[
    opt("1-10", "1-10"),
    opt("11-25", "11-25"),
    opt("26-50", "26-50"),
    opt("51-100", "51-100"),
    opt("100+", "100+"),
];

const RESERVATION_COMPANY: &[FilterOption] = &[
    opt("starbucks", "Starbucks"),
    opt("abc-corp", "ABC Corp"),
    opt("xyz-inc", "XYZ Inc"),
    opt("tech-solutions", "Tech Solutions"),
];

const DURATION: &[FilterOption] = &[
    opt("15-min", "15 minutes"),
    opt("30-min", "30 minutes"),
    opt("1-hour", "1 hour"),
    opt("2-hours", "2 hours"),
    opt("4-hours", "4 hours"),
    opt("8-hours", "8 hours"),
    opt("all-day", "All day"),
];

// --- Registries ---

/// Work order filters.
pub const WORK_ORDER_FILTERS: &[FilterSpec] = &[
    FilterSpec::select("status", "status", "Status", STATUS),
    FilterSpec::select("priority", "priority", "Priority", PRIORITY),
    FilterSpec::select("category", "category", "Category", CATEGORY),
    FilterSpec::select("assignee", "assignee", "Assignee", ASSIGNEE),
    FilterSpec::select("propertyGroup", "propertyGroup", "Property group", PROPERTY_GROUP),
    FilterSpec::select("property", "property", "Property", PROPERTY).rule(MatchRule::Alias),
    FilterSpec::select("region", "region", "Region", REGION),
    FilterSpec::select("building", "building", "Building", BUILDING),
    FilterSpec::select("floor", "floor", "Floor", FLOOR),
    FilterSpec::new("dateRange", "created", "Created date", FilterShape::DateRange),
];

/// Visitor filters.
pub const VISITOR_FILTERS: &[FilterSpec] = &[
    FilterSpec::select("visitorType", "type", "Visitor type", VISITOR_TYPE),
    FilterSpec::select("premierAccess", "premierAccess", "Premier access", YES_NO),
    FilterSpec::select("visitorStatus", "status", "Status", VISITOR_STATUS),
    FilterSpec::select(
        "visitorPropertyStatus",
        "propertyStatus",
        "Property status",
        VISITOR_PROPERTY_STATUS,
    ),
    FilterSpec::select("vendorCompany", "vendorCompany", "Vendor company", VENDOR_COMPANY),
    FilterSpec::select("companyVisiting", "company", "Company visiting", COMPANY_VISITING),
    FilterSpec::select("requestedFor", "createdFor", "Requested for", REQUESTED_FOR),
    FilterSpec::select("createdBy", "createdBy", "Created by", CREATED_BY),
    FilterSpec::new("visitDateRange", "date", "Visit date", FilterShape::DateRange),
    FilterSpec::new("checkInDateRange", "checkIn", "Check-in date", FilterShape::DateRange),
    FilterSpec::new("checkOutDateRange", "checkOut", "Check-out date", FilterShape::DateRange),
    FilterSpec::new("createdDateRange", "created", "Created date", FilterShape::DateRange),
];

/// Reservation filters.
pub const RESERVATION_FILTERS: &[FilterSpec] = &[
    FilterSpec::select("reservationProperty", "property", "Properties", RESERVATION_PROPERTY)
        .rule(MatchRule::Alias),
    FilterSpec::select("reservationFloor", "floor", "Floor", RESERVATION_FLOOR),
    FilterSpec::select(
        "managementCompany",
        "managementCompany",
        "Management company",
        MANAGEMENT_COMPANY,
    ),
    FilterSpec::select("owner", "owner", "Owner", OWNER),
    FilterSpec::select("reservationRegion", "region", "Region", REGION),
    FilterSpec::select("reservationCreatedBy", "createdBy", "Created by", RESERVATION_CREATED_BY),
    FilterSpec::select("reservationStatus", "status", "Status", RESERVATION_STATUS),
    FilterSpec::select("reservationType", "type", "Type", RESERVATION_TYPE),
    FilterSpec::select("resource", "resourceName", "Resource", RESOURCE),
    FilterSpec::select("capacityUnits", "capacityUnits", "Capacity units", CAPACITY_UNIT),
    FilterSpec::select("capacity", "capacity", "Capacity", CAPACITY).rule(MatchRule::Bucket),
    FilterSpec::select("reservationCompany", "company", "Company", RESERVATION_COMPANY),
    FilterSpec::new("reservationDateRange", "date", "Date", FilterShape::DateRange),
    FilterSpec::new("reservationAllDay", "allDay", "All day", FilterShape::Toggle),
    FilterSpec::new("reservationTimeRange", "time", "Time", FilterShape::TimeRange),
    FilterSpec::select("reservationDuration", "duration", "Duration", DURATION),
];

/// All filters declared for a record kind.
pub fn filters_for(kind: RecordKind) -> &'static [FilterSpec] {
    match kind {
        RecordKind::WorkOrder => WORK_ORDER_FILTERS,
        RecordKind::Visitor => VISITOR_FILTERS,
        RecordKind::Reservation => RESERVATION_FILTERS,
    }
}

/// Look up a filter spec by key within a kind.
pub fn get_spec(kind: RecordKind, key: &str) -> Option<&'static FilterSpec> {
    filters_for(kind).iter().find(|spec| spec.key == key)
}

/// Look up a filter spec by key across every kind.
pub fn find_spec(key: &str) -> Option<(RecordKind, &'static FilterSpec)> {
    RecordKind::ALL
        .iter()
        .find_map(|&kind| get_spec(kind, key).map(|spec| (kind, spec)))
}
