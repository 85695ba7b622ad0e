//! Pagination metadata and page-number windows

use serde::{Deserialize, Serialize};

/// Number of page buttons shown around the current page
pub const PAGE_WINDOW_SIZE: u32 = 5;

/// Paging metadata accompanying a list of results
///
/// Returned by the posts API and computed locally for bookmarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u32,
    pub items_per_page: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationInfo {
    /// Compute paging metadata for `total_items` split into pages of `limit`
    ///
    /// `page` is taken as given, not clamped: a page past the end reports
    /// `has_next == false` and a correct `has_prev`.
    pub fn compute(page: u32, limit: u32, total_items: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total_items.div_ceil(limit)
        };

        Self {
            current_page: page,
            total_pages,
            total_items,
            items_per_page: limit,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Offset range of `page` within the full item list
    pub fn slice_bounds(page: u32, limit: u32) -> std::ops::Range<usize> {
        let start = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
        start..start.saturating_add(limit as usize)
    }
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_items: 0,
            items_per_page: 0,
            has_next: false,
            has_prev: false,
        }
    }
}

/// The run of page numbers to render around the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub pages: Vec<u32>,
    pub current: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Page numbers to show for `current` out of `total` pages
///
/// Centers up to `PAGE_WINDOW_SIZE` pages on `current`, shifted right near
/// page 1 and truncated at `total`.
pub fn page_window(current: u32, total: u32) -> PageWindow {
    let start = current.saturating_sub(PAGE_WINDOW_SIZE / 2).max(1);
    let end = total.min(start.saturating_add(PAGE_WINDOW_SIZE - 1));

    PageWindow {
        pages: (start..=end).collect(),
        current,
        has_prev: current > 1,
        has_next: current < total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_middle_page() {
        let info = PaginationInfo::compute(2, 15, 31);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.total_items, 31);
        assert_eq!(info.items_per_page, 15);
        assert!(info.has_next);
        assert!(info.has_prev);
    }

    #[test]
    fn compute_empty_list() {
        let info = PaginationInfo::compute(1, 15, 0);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_next);
        assert!(!info.has_prev);
    }

    #[test]
    fn compute_past_the_end_is_not_clamped() {
        let info = PaginationInfo::compute(9, 10, 25);
        assert_eq!(info.current_page, 9);
        assert_eq!(info.total_pages, 3);
        assert!(!info.has_next);
        assert!(info.has_prev);
    }

    #[test]
    fn zero_limit_has_no_pages() {
        let info = PaginationInfo::compute(1, 0, 10);
        assert_eq!(info.total_pages, 0);
    }

    #[test]
    fn slice_bounds_for_pages() {
        assert_eq!(PaginationInfo::slice_bounds(1, 15), 0..15);
        assert_eq!(PaginationInfo::slice_bounds(3, 10), 20..30);
    }

    #[test]
    fn deserializes_partial_object() {
        let info: PaginationInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info, PaginationInfo::default());

        let info: PaginationInfo = serde_json::from_str(
            r#"{"currentPage":2,"totalPages":4,"totalItems":40,"itemsPerPage":10,"hasNext":true,"hasPrev":true}"#,
        )
        .unwrap();
        assert_eq!(info.current_page, 2);
        assert_eq!(info.total_pages, 4);
    }

    #[test]
    fn window_near_start() {
        let window = page_window(1, 10);
        assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
        assert!(!window.has_prev);
        assert!(window.has_next);
    }

    #[test]
    fn window_centered() {
        assert_eq!(page_window(6, 10).pages, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn window_near_end_is_truncated() {
        let window = page_window(9, 10);
        assert_eq!(window.pages, vec![7, 8, 9, 10]);
        assert!(window.has_next);

        let window = page_window(10, 10);
        assert_eq!(window.pages, vec![8, 9, 10]);
        assert!(!window.has_next);
    }

    #[test]
    fn window_for_page_far_past_the_end() {
        let window = page_window(u32::MAX, 1);
        assert!(window.pages.is_empty());
        assert_eq!(window.current, u32::MAX);
        assert!(window.has_prev);
        assert!(!window.has_next);

        let window = page_window(u32::MAX, u32::MAX);
        assert_eq!(window.pages, vec![u32::MAX - 2, u32::MAX - 1, u32::MAX]);
    }

    #[test]
    fn window_with_no_pages() {
        let window = page_window(1, 0);
        assert!(window.pages.is_empty());
        assert!(!window.has_next);
    }
}
