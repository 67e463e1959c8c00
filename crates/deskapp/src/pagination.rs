use serde::{Deserialize, Serialize};

use crate::error::{DeskError, Result};

/// Page sizes offered by the pager when nothing is configured.
pub const DEFAULT_PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// 1-indexed.
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Change the page size; fails unless `size` is one of `allowed`.
    pub fn set_page_size(&mut self, size: usize, allowed: &[usize]) -> Result<()> {
        if size == 0 || !allowed.contains(&size) {
            return Err(DeskError::InvalidPageSize(size));
        }
        self.page_size = size;
        self.current_page = 1;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Request a page. Out-of-range requests are clamped when the view is
    /// computed, not here, since the total may still change.
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn next(&mut self, total_pages: usize) {
        self.current_page = self.current_page.saturating_add(1).min(total_pages.max(1));
    }

    /// Step back from the page actually shown, so an earlier overshoot does
    /// not swallow clicks.
    pub fn previous(&mut self, total_pages: usize) {
        self.current_page = clamp_page(self.current_page, total_pages)
            .saturating_sub(1)
            .max(1);
    }
}

/// Number of pages for `total` items; never less than 1.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "page")]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Compact page list for a pager control.
///
/// Up to five pages are all listed. Beyond that the first and last pages
/// are always shown, with a window around the current page and an ellipsis
/// for each gap.
pub fn build_page_numbers(current: usize, total: usize) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total <= 5 {
        return (1..=total.max(1)).map(Page).collect();
    }
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn page_numbers_near_start() {
        assert_eq!(
            build_page_numbers(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn page_numbers_near_end() {
        assert_eq!(
            build_page_numbers(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn page_numbers_in_middle() {
        assert_eq!(
            build_page_numbers(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn page_numbers_small_total_lists_all() {
        assert_eq!(build_page_numbers(2, 4), vec![Page(1), Page(2), Page(3), Page(4)]);
        assert_eq!(build_page_numbers(1, 0), vec![Page(1)]);
    }

    #[test]
    fn page_numbers_always_include_first_last_and_current() {
        for total in 1..=30 {
            for current in 1..=total {
                let items = build_page_numbers(current, total);
                assert_eq!(items.first(), Some(&Page(1)));
                assert_eq!(items.last(), Some(&Page(total)));
                assert!(items.contains(&Page(current)), "{current}/{total}");
                assert!(items.len() <= 7);
            }
        }
    }

    #[test]
    fn total_pages_has_floor_of_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn page_size_must_be_allowed() {
        let mut state = PaginationState::default();
        state.go_to(4);
        assert!(matches!(
            state.set_page_size(30, &DEFAULT_PAGE_SIZES),
            Err(DeskError::InvalidPageSize(30))
        ));
        assert_eq!(state.current_page, 4);

        state.set_page_size(25, &DEFAULT_PAGE_SIZES).unwrap();
        assert_eq!(state.page_size, 25);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn next_and_previous_stay_in_bounds() {
        let mut state = PaginationState::default();
        state.previous(2);
        assert_eq!(state.current_page, 1);
        state.next(2);
        state.next(2);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn previous_after_overshoot_moves_one_visible_page() {
        let mut state = PaginationState::default();
        state.go_to(9);
        state.previous(2);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn next_from_largest_page_does_not_overflow() {
        let mut state = PaginationState::default();
        state.go_to(usize::MAX);
        state.next(3);
        assert_eq!(state.current_page, 3);
    }
}
