//! Pagination defaults and clamp helpers.
//!
//! List endpoints take `pageIndex` / `pageSize` query parameters. The caller
//! may send anything, so repositories clamp the values here rather than
//! rejecting the request: a negative page index reads as the first page and
//! an out-of-range page size is pulled back into `1..=MAX_PAGE_SIZE`.

/// Default number of rows per page when `pageSize` is omitted.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of rows per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a caller-supplied page size into `1..=MAX_PAGE_SIZE`.
pub fn clamp_page_size(page_size: i64) -> i64 {
    page_size.clamp(1, MAX_PAGE_SIZE)
}

/// Clamp a caller-supplied page index to zero or above.
pub fn clamp_page_index(page_index: i64) -> i64 {
    page_index.max(0)
}

/// Row offset for a page, computed from clamped values.
///
/// Saturating: an absurdly large page index yields `i64::MAX`, which reads
/// as an empty page rather than overflowing.
pub fn page_offset(page_index: i64, page_size: i64) -> i64 {
    clamp_page_index(page_index).saturating_mul(clamp_page_size(page_size))
}
