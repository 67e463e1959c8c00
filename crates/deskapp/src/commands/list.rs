use crate::commands::{CmdMessage, CmdResult, PageInfo};
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::model::Record;

/// List the current page of `records` as the dashboard's state selects it.
pub fn run(records: &[Record], dashboard: &Dashboard) -> Result<CmdResult> {
    let view = dashboard.compute(records);
    let info = PageInfo::from(&view);
    let listed: Vec<Record> = view.page.into_iter().cloned().collect();

    let mut result = CmdResult::default().with_listed_records(listed);
    if info.total_count == 0 {
        let message = if dashboard.list().is_any_filter_active() {
            format!("No {}s match the current filters", dashboard.list().kind())
        } else {
            format!("No {}s yet", dashboard.list().kind())
        };
        result.add_message(CmdMessage::info(message));
    }
    result.page = Some(info);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::ViewSettings;
    use crate::navigation::ActivePage;
    use crate::seed;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn dashboard(page: ActivePage) -> Dashboard {
        let now = today().and_hms_opt(9, 30, 0).unwrap();
        Dashboard::new(ViewSettings::default(), page, now)
    }

    #[test]
    fn lists_newest_first_by_default() {
        let records = seed::work_orders(today());
        let result = run(&records, &dashboard(ActivePage::Tasks)).unwrap();

        let ids: Vec<_> = result.listed_records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["W-11631-000034", "W-11631-000047"]);
        let page = result.page.unwrap();
        assert_eq!((page.range_start, page.range_end, page.total_pages), (1, 2, 1));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_result_explains_filters() {
        let records = seed::work_orders(today());
        let mut dash = dashboard(ActivePage::Tasks);
        dash.list_mut().toggle_option("status", "closed").unwrap();

        let result = run(&records, &dash).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.page.as_ref().map(|p| p.range_start), Some(0));
        assert_eq!(
            result.messages,
            vec![CmdMessage::info("No work orders match the current filters")]
        );
    }

    #[test]
    fn empty_collection_says_so() {
        let result = run(&[], &dashboard(ActivePage::UpcomingVisits)).unwrap();
        assert_eq!(result.messages, vec![CmdMessage::info("No visitors yet")]);
    }
}
