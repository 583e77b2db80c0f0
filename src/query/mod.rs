//! The query abstraction the paginator runs against.
//!
//! # Components
//! - [`OrderableQuery`] - What a backing engine must support
//! - [`OrderingBuilder`] / [`SortKey`] - Order-by built from a field name
//! - [`MemoryQuery`] - Adapter lifting an in-memory sequence into a query

mod memory;
mod order;

pub use memory::{IntoMemoryQuery, MemoryQuery};
pub use order::{OrderingBuilder, SortDirection, SortKey};

/// A lazily evaluated, orderable, sliceable query over records.
///
/// Implementations wrap whatever actually runs the query (a database
/// driver, a remote API, an in-memory list). Every method consumes the
/// query and returns a new one, so a query value is never mutated in place.
///
/// `skip` and `take` compose the way iterator adapters do:
/// `q.skip(10).take(5)` is rows 10..15 of `q`.
pub trait OrderableQuery: Sized {
    /// Record type produced by the query.
    type Item;

    /// Backing engine error.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Number of records the query would currently produce.
    fn count(&self) -> Result<usize, Self::Error>;

    /// Sort by `key`, replacing any earlier ordering as the primary key.
    fn order_by(self, key: SortKey<Self::Item>) -> Result<Self, Self::Error>;

    /// Drop the first `n` records.
    fn skip(self, n: usize) -> Self;

    /// Keep at most `n` records.
    fn take(self, n: usize) -> Self;

    /// Run the query and collect its records.
    fn fetch(self) -> Result<Vec<Self::Item>, Self::Error>;
}
