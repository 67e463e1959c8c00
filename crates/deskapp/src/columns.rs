//! Table column layout: display order and pixel widths.
//!
//! Layout is independent of what the table shows. Reordering and resizing
//! never touch filters or sorting, and vice versa.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::model::RecordKind;

pub const DEFAULT_MIN_COLUMN_WIDTH: u32 = 50;
pub const DEFAULT_COLUMN_WIDTH: u32 = 150;

/// A table column. `field` is the record field the column shows and sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub field: &'static str,
    pub default_width: u32,
}

const fn col(key: &'static str, label: &'static str, default_width: u32) -> ColumnSpec {
    ColumnSpec {
        key,
        label,
        field: key,
        default_width,
    }
}

pub const COLUMNS: &[ColumnSpec] = &[
    col("id", "ID", 175),
    col("title", "Title", 200),
    col("category", "Category", 150),
    col("priority", "Priority", 125),
    col("status", "Status", 125),
    col("assignee", "Assignee", 150),
    col("created", "Created", 125),
    col("property", "Property", 200),
    col("name", "Name", 200),
    col("propertyStatus", "Property status", 175),
    col("type", "Type", 125),
    col("date", "Date", 125),
    col("time", "Time", 175),
    col("createdFor", "Created for", 150),
    ColumnSpec {
        key: "resId",
        label: "Res ID",
        field: "id",
        default_width: 175,
    },
    col("reservationName", "Reservation name", 200),
    col("resourceName", "Resource name", 175),
    col("company", "Company", 150),
    col("floor", "Floor", 100),
];

pub fn column_spec(key: &str) -> Option<&'static ColumnSpec> {
    COLUMNS.iter().find(|c| c.key == key)
}

/// Record field behind a column key. Unknown keys are taken as field names.
pub fn column_field(key: &str) -> &str {
    column_spec(key).map_or(key, |c| c.field)
}

pub fn default_order(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::WorkOrder => &[
            "id", "title", "category", "priority", "status", "assignee", "created", "property",
        ],
        RecordKind::Visitor => &[
            "name",
            "propertyStatus",
            "status",
            "type",
            "date",
            "time",
            "property",
            "createdFor",
        ],
        RecordKind::Reservation => &[
            "resId",
            "reservationName",
            "resourceName",
            "status",
            "date",
            "time",
            "company",
            "type",
            "property",
            "floor",
        ],
    }
}

/// Move `dragged` to the index `target` occupied before the move.
///
/// No-op when the two are equal or either is missing.
pub fn reorder(order: &[String], dragged: &str, target: &str) -> Vec<String> {
    let mut next = order.to_vec();
    if dragged == target {
        return next;
    }
    let (Some(from), Some(to)) = (
        order.iter().position(|c| c == dragged),
        order.iter().position(|c| c == target),
    ) else {
        return next;
    };
    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

/// An in-progress drag on a column edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeDrag {
    pub field: String,
    pub start_width: u32,
}

/// Width after dragging `delta` pixels from the drag's start width,
/// never below `min_width`.
pub fn resize(
    widths: &BTreeMap<String, u32>,
    drag: &ResizeDrag,
    delta: i32,
    min_width: u32,
) -> BTreeMap<String, u32> {
    let mut next = widths.clone();
    let width = (i64::from(drag.start_width) + i64::from(delta)).max(i64::from(min_width));
    next.insert(drag.field.clone(), u32::try_from(width).unwrap_or(u32::MAX));
    next
}

/// Column order and widths for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    order: Vec<String>,
    widths: BTreeMap<String, u32>,
    min_width: u32,
    default_width: u32,
}

impl ColumnLayout {
    pub fn for_kind(kind: RecordKind) -> Self {
        Self::with_limits(kind, DEFAULT_MIN_COLUMN_WIDTH, DEFAULT_COLUMN_WIDTH)
    }

    pub fn with_limits(kind: RecordKind, min_width: u32, default_width: u32) -> Self {
        Self {
            order: default_order(kind).iter().map(|c| c.to_string()).collect(),
            widths: BTreeMap::new(),
            min_width,
            default_width,
        }
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Current width: the resized width, else the column default, else the
    /// configured fallback.
    pub fn width(&self, key: &str) -> u32 {
        self.widths
            .get(key)
            .copied()
            .or_else(|| column_spec(key).map(|c| c.default_width))
            .unwrap_or(self.default_width)
    }

    pub fn reorder(&mut self, dragged: &str, target: &str) {
        self.order = reorder(&self.order, dragged, target);
        debug!(dragged, target, "reorder column");
    }

    pub fn begin_resize(&self, key: &str) -> ResizeDrag {
        ResizeDrag {
            field: key.to_string(),
            start_width: self.width(key),
        }
    }

    /// Apply a drag. `delta` is measured from where the drag started, so
    /// repeated calls during one drag do not accumulate.
    pub fn resize(&mut self, drag: &ResizeDrag, delta: i32) -> u32 {
        self.widths = resize(&self.widths, drag, delta, self.min_width);
        self.width(&drag.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reorder_moves_to_target_index() {
        assert_eq!(reorder(&cols(&["a", "b", "c"]), "a", "c"), cols(&["b", "c", "a"]));
        assert_eq!(reorder(&cols(&["a", "b", "c"]), "c", "a"), cols(&["c", "a", "b"]));
    }

    #[test]
    fn reorder_same_or_missing_is_noop() {
        let order = cols(&["a", "b", "c"]);
        assert_eq!(reorder(&order, "b", "b"), order);
        assert_eq!(reorder(&order, "x", "b"), order);
        assert_eq!(reorder(&order, "a", "x"), order);
    }

    #[test]
    fn resize_respects_minimum() {
        let drag = ResizeDrag {
            field: "title".into(),
            start_width: 200,
        };
        let widths = resize(&BTreeMap::new(), &drag, -500, 50);
        assert_eq!(widths["title"], 50);
        let widths = resize(&widths, &drag, 40, 50);
        assert_eq!(widths["title"], 240);
    }

    #[test]
    fn layout_widths_fall_back_through_defaults() {
        let layout = ColumnLayout::with_limits(RecordKind::WorkOrder, 50, 140);
        assert_eq!(layout.width("id"), 175);
        assert_eq!(layout.width("floor"), 100);
        assert_eq!(layout.width("custom"), 140);
    }

    #[test]
    fn resize_during_drag_does_not_accumulate() {
        let mut layout = ColumnLayout::for_kind(RecordKind::Visitor);
        let drag = layout.begin_resize("name");
        assert_eq!(layout.resize(&drag, 10), 210);
        assert_eq!(layout.resize(&drag, 20), 220);
        assert_eq!(layout.resize(&drag, -300), DEFAULT_MIN_COLUMN_WIDTH);
    }

    #[test]
    fn default_orders_use_known_columns() {
        for kind in RecordKind::ALL {
            for key in default_order(kind) {
                assert!(column_spec(key).is_some(), "{key}");
            }
        }
    }

    #[test]
    fn res_id_column_reads_id_field() {
        assert_eq!(column_field("resId"), "id");
        assert_eq!(column_field("status"), "status");
        assert_eq!(column_field("unknown"), "unknown");
    }

    #[test]
    fn layout_reorder_updates_order() {
        let mut layout = ColumnLayout::for_kind(RecordKind::WorkOrder);
        layout.reorder("property", "id");
        assert_eq!(layout.order()[0], "property");
        assert_eq!(layout.order().len(), 8);
    }
}
