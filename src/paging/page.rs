//! A page of results and its metadata.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::common::config::DEFAULT_PAGE_SIZE;

/// Where a page sits in the full result set.
///
/// Always derived from `total_count`, `page_size` and the clamped
/// `page_index` (see [`PageComputer::metadata`](crate::PageComputer::metadata)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub total_count: usize,
    pub total_pages: usize,
    /// 1-based index of this page.
    pub page_index: usize,
    pub page_size: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageMetadata {
    /// Metadata for a pass-through (no request) result: totals are zero.
    pub fn unpaged(page_size: usize) -> Self {
        Self {
            total_count: 0,
            total_pages: 0,
            page_index: 1,
            page_size,
            has_previous: false,
            has_next: false,
        }
    }
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self::unpaged(DEFAULT_PAGE_SIZE)
    }
}

/// One page of `T` plus its metadata.
///
/// Derefs to the item slice, so a page can be iterated or indexed directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    items: Vec<T>,
    metadata: PageMetadata,
}

impl<T> Page<T> {
    pub(crate) fn new(items: Vec<T>, metadata: PageMetadata) -> Self {
        Self { items, metadata }
    }

    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn into_parts(self) -> (Vec<T>, PageMetadata) {
        (self.items, self.metadata)
    }

    /// Transform the items, keeping the metadata (e.g. entity to DTO).
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            metadata: self.metadata,
        }
    }
}

impl<T> Deref for Page<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaged_defaults() {
        let meta = PageMetadata::default();
        assert_eq!(meta.total_count, 0);
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.page_index, 1);
        assert_eq!(meta.page_size, DEFAULT_PAGE_SIZE);
        assert!(!meta.has_next && !meta.has_previous);
    }

    #[test]
    fn test_page_map_keeps_metadata() {
        let meta = PageMetadata {
            total_count: 3,
            total_pages: 1,
            page_index: 1,
            page_size: 30,
            has_previous: false,
            has_next: false,
        };
        let page = Page::new(vec![1, 2, 3], meta).map(|n| n.to_string());

        assert_eq!(page.items(), ["1", "2", "3"]);
        assert_eq!(page.metadata(), &meta);
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let json = serde_json::to_string(&PageMetadata::default()).unwrap();
        assert!(json.contains("\"totalCount\":0"));
        assert!(json.contains("\"hasNext\":false"));
    }
}
