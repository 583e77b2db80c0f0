//! Configuration for pagekit.

use serde::{Deserialize, Serialize};

/// Page size used when a request leaves it unset (0).
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Page index used when a request leaves it unset (0). Page indexes are 1-based.
pub const DEFAULT_PAGE_INDEX: usize = 1;

/// Upper bound on page size accepted in strict mode.
pub const MAX_PAGE_SIZE: usize = 10_000;

/// Paginator settings.
///
/// Deserializable so applications can embed it in their own config files:
///
/// ```
/// use pagekit::PaginatorConfig;
///
/// let config = PaginatorConfig::default();
/// assert_eq!(config.default_page_size, 30);
/// assert!(!config.strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Page size substituted for an unset (zero) page size.
    pub default_page_size: usize,

    /// Largest page size accepted in strict mode. Ignored otherwise: any
    /// size of at least 1 is used as given.
    pub max_page_size: usize,

    /// Reject zero page index/size instead of defaulting them.
    pub strict: bool,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            strict: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PaginatorConfig::default();
        assert_eq!(config.default_page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.max_page_size, MAX_PAGE_SIZE);
        assert!(!config.strict);
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: PaginatorConfig = serde_json::from_str(r#"{"strict": true}"#).unwrap();
        assert!(config.strict);
        assert_eq!(config.default_page_size, 30);
    }
}
