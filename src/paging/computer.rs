//! Page arithmetic.

use crate::paging::PageMetadata;

/// Pure page-count and clamping arithmetic.
///
/// # Example
/// ```
/// use pagekit::PageComputer;
///
/// assert_eq!(PageComputer::total_pages(95, 30), 4);
/// assert_eq!(PageComputer::clamp(5, 4), 4);
/// assert_eq!(PageComputer::clamp(1, 0), 1);
/// ```
pub struct PageComputer;

impl PageComputer {
    /// `ceil(total_count / page_size)` in integer arithmetic.
    ///
    /// `page_size` must be non-zero; defaulting happens before this is called.
    #[inline]
    pub fn total_pages(total_count: usize, page_size: usize) -> usize {
        debug_assert!(page_size > 0, "page_size must be > 0");
        let pages = total_count / page_size;
        if total_count % page_size > 0 {
            pages + 1
        } else {
            pages
        }
    }

    /// Force `page_index` into `[1, max(total_pages, 1)]`.
    ///
    /// An empty result set (zero pages) clamps to page 1.
    #[inline]
    pub fn clamp(page_index: usize, total_pages: usize) -> usize {
        page_index.min(total_pages).max(1)
    }

    /// Number of records before the first record of `page_index`.
    #[inline]
    pub fn offset(page_index: usize, page_size: usize) -> usize {
        page_index.saturating_sub(1).saturating_mul(page_size)
    }

    /// Metadata for `page_index` (clamped) of a `total_count`-record source.
    pub fn metadata(total_count: usize, page_size: usize, page_index: usize) -> PageMetadata {
        let total_pages = Self::total_pages(total_count, page_size);
        let page_index = Self::clamp(page_index, total_pages);

        PageMetadata {
            total_count,
            total_pages,
            page_index,
            page_size,
            has_previous: page_index > 1,
            has_next: page_index.saturating_mul(page_size) < total_count,
        }
    }
}
