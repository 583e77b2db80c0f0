//! Caller-supplied pagination request.

use serde::{Deserialize, Serialize};

use crate::query::SortDirection;

/// What page the caller wants and how to order it.
///
/// Zero `page_index` / `page_size` mean "use the default" (page 1, and the
/// paginator's configured page size). An empty or missing `sort_field`
/// means "sort by the type's key field".
///
/// Field names match the usual query-string spelling so a transport layer
/// can bind it directly:
///
/// ```
/// use pagekit::PageRequest;
///
/// let request: PageRequest =
///     serde_json::from_str(r#"{"pageIndex": 2, "pageSize": 10, "sortField": "name"}"#).unwrap();
/// assert_eq!(request.page_index, 2);
/// assert_eq!(request.sort_field.as_deref(), Some("name"));
/// assert!(!request.descending);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page number.
    pub page_index: usize,
    pub page_size: usize,
    pub sort_field: Option<String>,
    pub descending: bool,
}

impl PageRequest {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
            ..Self::default()
        }
    }

    /// Sort by `field` ascending.
    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_field = Some(field.into());
        self.descending = false;
        self
    }

    /// Sort by `field` descending.
    pub fn sort_by_desc(mut self, field: impl Into<String>) -> Self {
        self.sort_field = Some(field.into());
        self.descending = true;
        self
    }

    /// Explicit sort field, treating an empty string as unset.
    pub fn explicit_sort_field(&self) -> Option<&str> {
        self.sort_field.as_deref().filter(|f| !f.is_empty())
    }

    #[inline]
    pub fn direction(&self) -> SortDirection {
        SortDirection::from_descending(self.descending)
    }
}
