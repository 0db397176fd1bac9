//! Pagination of listing results.

use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-indexed).
    pub current_page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages; zero for an empty result.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. The page is not clamped to the valid range.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let total_pages = if per_page == 0 { 0 } else { total.div_ceil(per_page) };

        Self {
            current_page: page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item of the page.
    pub fn offset(&self) -> usize {
        self.current_page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Whether the requested page lies past the last page of a non-empty result.
    pub fn is_out_of_range(&self) -> bool {
        self.total_pages > 0 && self.current_page > self.total_pages
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.current_page.saturating_sub(half).max(1);
        let end = start
            .saturating_add(max_visible.saturating_sub(1))
            .min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.current_page <= 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Get start item number (1-indexed); zero when the page is empty.
    pub fn start_item(&self) -> usize {
        if self.current_page == 0 || self.offset() >= self.total {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number; zero when the page is empty.
    pub fn end_item(&self) -> usize {
        if self.start_item() == 0 {
            0
        } else {
            self.current_page.saturating_mul(self.per_page).min(self.total)
        }
    }
}

/// One page of items with its pagination info.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Slice `items` into the 1-indexed `page` of size `per_page`.
///
/// A page outside `1..=total_pages` is empty; callers decide whether to
/// reset it.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let pagination = Pagination::new(page, per_page, items.len());
    let items = if page == 0 || pagination.offset() >= items.len() {
        Vec::new()
    } else {
        items.into_iter().skip(pagination.offset()).take(per_page).collect()
    };
    Page { items, pagination }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn test_pagination_first_page() {
        let p = Pagination::new(1, 10, 45);
        assert!(!p.has_prev);
        assert!(p.has_next);
        assert!(p.is_first());
        assert!(!p.is_last());
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(5, 10, 45);
        assert!(p.has_prev);
        assert!(!p.has_next);
        assert!(!p.is_first());
        assert!(p.is_last());
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let p = Pagination::new(1, 9, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert!(!p.is_out_of_range());
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(5, 10, 100);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);
        let p = Pagination::new(10, 10, 100);
        assert_eq!(p.page_numbers(5), vec![6, 7, 8, 9, 10]);
        let p = Pagination::new(1, 10, 30);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3]);
        let p = Pagination::new(usize::MAX, 10, 100);
        assert_eq!(p.page_numbers(5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_pagination_item_range() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.start_item(), 11);
        assert_eq!(p.end_item(), 20);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (1..=20).collect();

        let first = paginate(items.clone(), 1, 9);
        assert_eq!(first.items, (1..=9).collect::<Vec<_>>());
        assert_eq!(first.pagination.total_pages, 3);

        let last = paginate(items.clone(), 3, 9);
        assert_eq!(last.items, vec![19, 20]);
        assert!(last.pagination.is_last());
    }

    #[test]
    fn test_paginate_does_not_clamp() {
        let items: Vec<u32> = (1..=20).collect();
        let past = paginate(items.clone(), 4, 9);
        assert!(past.is_empty());
        assert_eq!(past.pagination.current_page, 4);
        assert!(past.pagination.is_out_of_range());

        assert!(paginate(items, 0, 9).is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let p = Pagination::new(usize::MAX, 9, 20);
        assert_eq!(p.offset(), usize::MAX);
        assert!(p.is_out_of_range());
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);

        let empty = paginate(Vec::<u32>::new(), usize::MAX, 9);
        assert!(empty.is_empty());
        assert_eq!(empty.pagination.total_pages, 0);
        assert_eq!(empty.pagination.current_page, usize::MAX);

        let past = paginate((1..=20).collect::<Vec<u32>>(), 3_000_000_000_000_000_000, 9);
        assert!(past.is_empty());
    }
}
