//! Pagination calculator for collection endpoints.

use serde::Serialize;

/// Page metadata derived from a total count and the requested page/size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub current_page: i64,
    pub page_size: i64,
    pub total_records: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageMeta {
    /// Compute page metadata.
    ///
    /// `total_pages` is `ceil(total_records / page_size)`, never below 0.
    /// The requested page is not clamped to the valid range: a page past
    /// the end simply pairs with an empty data slice and `has_next = false`.
    pub fn compute(total_records: i64, page: i64, page_size: i64) -> Self {
        // Inputs come through normalize_page; the max(1) guards the division.
        let page_size = page_size.max(1);
        let total_records = total_records.max(0);
        let total_pages = (total_records + page_size - 1) / page_size;

        Self {
            current_page: page,
            page_size,
            total_records,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }
}

/// One page of rows plus its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

/// Normalize requested pagination inputs: missing page defaults to 1,
/// missing limit to 10, and non-positive values clamp to 1.
pub fn normalize_page(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    (page.unwrap_or(1).max(1), limit.unwrap_or(10).max(1))
}

/// Row offset of a 1-indexed page.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (page - 1) * page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_has_no_pages() {
        let meta = PageMeta::compute(0, 1, 10);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_previous);
    }

    #[test]
    fn middle_page_has_both_neighbours() {
        let meta = PageMeta::compute(25, 2, 10);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(meta.has_previous);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PageMeta::compute(21, 1, 10).total_pages, 3);
        assert_eq!(PageMeta::compute(20, 1, 10).total_pages, 2);
        assert_eq!(PageMeta::compute(1, 1, 10).total_pages, 1);
    }

    #[test]
    fn last_page_has_no_next() {
        let meta = PageMeta::compute(30, 3, 10);
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_next);
        assert!(meta.has_previous);
    }

    #[test]
    fn page_past_the_end_is_not_an_error() {
        let meta = PageMeta::compute(10, 5, 10);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next);
        assert!(meta.has_previous);
    }

    #[test]
    fn normalize_applies_defaults() {
        assert_eq!(normalize_page(None, None), (1, 10));
        assert_eq!(normalize_page(Some(3), Some(25)), (3, 25));
    }

    #[test]
    fn normalize_clamps_non_positive_values() {
        assert_eq!(normalize_page(Some(0), Some(-5)), (1, 1));
        assert_eq!(normalize_page(Some(-1), Some(0)), (1, 1));
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(page_offset(1, 10), 0);
        assert_eq!(page_offset(2, 10), 10);
        assert_eq!(page_offset(4, 25), 75);
    }
}
