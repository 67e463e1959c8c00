use deskapp::columns::reorder;
use deskapp::commands::create;
use deskapp::filters::{get_spec, AliasTable, FilterState, Range, RecordFilter};
use deskapp::forms::WorkOrderForm;
use deskapp::model::{parse_date, Record, RecordKind};
use deskapp::pagination::{build_page_numbers, PageItem, PaginationState};
use deskapp::sort::{toggle_sort, SortState};
use deskapp::store::memory::InMemoryStore;
use deskapp::view::{compute_view, ListState, ViewContext};
use chrono::NaiveDate;

const STATUSES: [&str; 4] = ["New", "Open", "Pending", "Closed"];
const PRIORITIES: [&str; 3] = ["Low", "Medium", "High"];
const PROPERTIES: [&str; 3] = ["1 Main Street", "2 Park Avenue", "3 Broadway"];

/// 23 work orders with repeating field values and a few shared dates.
fn collection() -> Vec<Record> {
    (0..23)
        .map(|i| {
            let day = 1 + (i * 7) % 28;
            Record::new(
                format!("W-11631-{:06}", 100 + i),
                format!("02/{:02}/2026", day),
            )
            .with("status", STATUSES[i % 4])
            .with("priority", PRIORITIES[i % 3])
            .with("property", PROPERTIES[i % 3])
        })
        .collect()
}

fn ctx(aliases: &AliasTable) -> ViewContext<'_> {
    ViewContext {
        kind: RecordKind::WorkOrder,
        aliases,
    }
}

fn everything() -> PaginationState {
    PaginationState::new(100)
}

#[test]
fn test_no_filters_no_sort_lists_newest_first() {
    let records = collection();
    let aliases = AliasTable::default();
    let view = compute_view(
        &records,
        &FilterState::new(),
        &SortState::new(),
        &everything(),
        ctx(&aliases),
    );

    assert_eq!(view.total_count, records.len());
    let dates: Vec<NaiveDate> = view
        .page
        .iter()
        .map(|r| parse_date(&r.created).unwrap())
        .collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]), "{:?}", dates);
}

#[test]
fn test_selection_keeps_exactly_matching_records() {
    let records = collection();
    let aliases = AliasTable::default();
    let spec = get_spec(RecordKind::WorkOrder, "status").unwrap();
    let mut filters = FilterState::new();
    filters
        .set_selection(spec, ["open".to_string(), "closed".to_string()].into())
        .unwrap();

    let view = compute_view(&records, &filters, &SortState::new(), &everything(), ctx(&aliases));

    let value = filters.get("status").unwrap();
    let filter = RecordFilter::new(spec, value);
    for record in &records {
        let listed = view.page.iter().any(|r| r.id == record.id);
        assert_eq!(listed, filter.matches(record, &aliases), "{}", record.id);
    }
    assert!(view
        .page
        .iter()
        .all(|r| matches!(r.text("status").as_deref(), Some("Open" | "Closed"))));
}

#[test]
fn test_filters_combine_across_fields() {
    let records = collection();
    let aliases = AliasTable::default();
    let mut state = ListState::with_page_size(RecordKind::WorkOrder, 100);
    state.toggle_option("priority", "high").unwrap();
    state.toggle_option("property", "2 Park Ave").unwrap();

    let view = state.compute(&records, &aliases);

    assert!(!view.is_empty());
    for record in &view.page {
        assert_eq!(record.text("priority").as_deref(), Some("High"));
        assert_eq!(record.text("property").as_deref(), Some("2 Park Avenue"));
    }
}

#[test]
fn test_created_date_range_is_inclusive() {
    let records = collection();
    let aliases = AliasTable::default();
    let mut state = ListState::with_page_size(RecordKind::WorkOrder, 100);
    state
        .set_range("dateRange", Range::new("2026-02-08", "2026-02-15"))
        .unwrap();

    let view = state.compute(&records, &aliases);

    let from = NaiveDate::from_ymd_opt(2026, 2, 8).unwrap();
    let to = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
    let expected = records
        .iter()
        .filter(|r| (from..=to).contains(&r.created_date().unwrap()))
        .count();
    assert_eq!(view.total_count, expected);
    assert!(expected > 0);
}

#[test]
fn test_equal_sort_keys_keep_input_order() {
    let records = collection();
    let aliases = AliasTable::default();
    let sort = toggle_sort(&SortState::new(), "priority");

    let view = compute_view(&records, &FilterState::new(), &sort, &everything(), ctx(&aliases));

    for priority in PRIORITIES {
        let sorted: Vec<&str> = view
            .page
            .iter()
            .filter(|r| r.text("priority").as_deref() == Some(priority))
            .map(|r| r.id.as_str())
            .collect();
        let input: Vec<&str> = records
            .iter()
            .filter(|r| r.text("priority").as_deref() == Some(priority))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(sorted, input, "{}", priority);
    }
}

#[test]
fn test_pages_are_bounded_and_consistent() {
    let records = collection();
    let aliases = AliasTable::default();
    for page_size in [10, 25] {
        for page in 1..=4 {
            let mut pagination = PaginationState::new(page_size);
            pagination.go_to(page);
            let view = compute_view(
                &records,
                &FilterState::new(),
                &SortState::new(),
                &pagination,
                ctx(&aliases),
            );

            assert!(view.page.len() <= page_size);
            assert_eq!(view.range_end - view.range_start + 1, view.page.len());
            assert!(view.range_end <= view.total_count);
            assert!(view.current_page <= view.total_pages);
        }
    }
}

#[test]
fn test_empty_result_has_one_page_and_no_range() {
    let aliases = AliasTable::default();
    let view = compute_view(&[], &FilterState::new(), &SortState::new(), &everything(), ctx(&aliases));
    assert_eq!(view.total_pages, 1);
    assert_eq!((view.range_start, view.range_end), (0, 0));
    assert!(view.page.is_empty());
}

#[test]
fn test_page_number_examples() {
    use PageItem::{Ellipsis, Page};
    assert_eq!(
        build_page_numbers(3, 10),
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
    );
    assert_eq!(
        build_page_numbers(8, 10),
        vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
    );
    assert_eq!(
        build_page_numbers(5, 10),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
    assert_eq!(
        build_page_numbers(2, 4),
        vec![Page(1), Page(2), Page(3), Page(4)]
    );
}

#[test]
fn test_three_sort_toggles_are_identity() {
    let empty = SortState::new();
    let once = toggle_sort(&empty, "priority");
    assert_eq!(once.priority("priority"), Some(1));
    assert_eq!(
        once.direction("priority"),
        Some(deskapp::sort::SortDirection::Ascending)
    );
    let thrice = toggle_sort(&toggle_sort(&once, "priority"), "priority");
    assert_eq!(thrice, empty);
}

#[test]
fn test_new_work_order_gets_highest_id_and_comes_first() {
    let store = InMemoryStore::new();
    let mut records = collection();
    let before: Vec<u64> = records
        .iter()
        .map(|r| r.id["W-11631-".len()..].parse().unwrap())
        .collect();
    let form = WorkOrderForm {
        issue_type: "elevator".into(),
        details: "Stuck on 3".into(),
        ..Default::default()
    };
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

    create::work_order(&store, &mut records, &form, today, 6).unwrap();

    let new_suffix: u64 = records[0].id["W-11631-".len()..].parse().unwrap();
    assert!(before.iter().all(|&n| new_suffix > n));
    assert_eq!(records.len(), 24);
}

#[test]
fn test_reorder_examples() {
    let order: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    assert_eq!(reorder(&order, "a", "c"), vec!["b", "c", "a"]);
    assert_eq!(reorder(&order, "b", "b"), vec!["a", "b", "c"]);
}
