//! Error types for pagekit.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error raised by a backing query engine.
pub type QueryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// All possible errors raised while paginating.
///
/// None of these are transient: the paginator performs no I/O of its own,
/// so nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The element type declares no fields, so there is nothing to sort by.
    #[error("type `{type_name}` declares no fields to sort by")]
    NoSortableField { type_name: String },

    /// The requested sort field does not exist on the element type.
    #[error("type `{type_name}` has no sort field `{field}`")]
    UnknownSortField { field: String, type_name: String },

    /// Rejected request (only raised when strict validation is enabled).
    #[error("invalid page request: {reason}")]
    InvalidPageRequest { reason: String },

    /// The backing query engine failed to count, order or fetch.
    #[error("query engine error: {0}")]
    Query(#[source] QueryError),
}

impl Error {
    /// Wrap a backing engine error.
    pub fn query<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Query(Box::new(err))
    }

    pub(crate) fn invalid_request(reason: impl Into<String>) -> Self {
        Error::InvalidPageRequest {
            reason: reason.into(),
        }
    }
}
