//! # Pagination Math
//!
//! Window arithmetic for list requests.
//!
//! ## Page Window
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total = 25, limit = 10                                                 │
//! │                                                                         │
//! │   rows:  1 ........ 10 | 11 ....... 20 | 21 ... 25                      │
//! │   page:        1       |       2       |     3                          │
//! │                                                                         │
//! │   last_page = ceil(25 / 10) = 3                                         │
//! │   page 3 → skip 20, take 10 → 5 rows                                    │
//! │   page 4 → past the end → empty page, no fetch                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::PaginationRequest;

/// Number of the last non-empty page.
///
/// Returns 0 when there are no rows or when `limit` is 0.
pub fn last_page(total: i64, limit: u32) -> u64 {
    if total <= 0 || limit == 0 {
        return 0;
    }
    (total as u64).div_ceil(u64::from(limit))
}

/// Rows to skip before the first row of `page`.
///
/// Page numbering starts at 1; page 0 is treated like page 1.
pub fn offset(page: u32, limit: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(limit)
}

/// Resolves the fetch window for a request.
///
/// Returns `Some(skip)` when the requested page holds rows, or `None`
/// when the page lies past the last page (always the case for `total = 0`)
/// and the fetch can be skipped entirely.
pub fn window(total: i64, request: &PaginationRequest) -> Option<u64> {
    if u64::from(request.page) > last_page(total, request.limit) {
        return None;
    }
    Some(offset(request.page, request.limit))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page() {
        assert_eq!(last_page(0, 10), 0);
        assert_eq!(last_page(1, 10), 1);
        assert_eq!(last_page(10, 10), 1);
        assert_eq!(last_page(11, 10), 2);
        assert_eq!(last_page(25, 10), 3);
        assert_eq!(last_page(25, 0), 0);
    }

    #[test]
    fn test_offset() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(3, 10), 20);
        assert_eq!(offset(2, 25), 25);
    }

    #[test]
    fn test_window_empty_store_short_circuits() {
        for page in 1..=5 {
            assert_eq!(window(0, &PaginationRequest::new(page, 10)), None);
        }
    }

    #[test]
    fn test_window_last_partial_page() {
        // 25 rows, page 3 of 10 → rows 21..=25
        assert_eq!(window(25, &PaginationRequest::new(3, 10)), Some(20));
    }

    #[test]
    fn test_window_past_last_page() {
        assert_eq!(window(25, &PaginationRequest::new(4, 10)), None);
    }

    #[test]
    fn test_window_huge_page_does_not_overflow() {
        assert_eq!(window(25, &PaginationRequest::new(u32::MAX, u32::MAX)), None);
        assert_eq!(offset(u32::MAX, u32::MAX), (u32::MAX as u64 - 1) * u32::MAX as u64);
    }
}
