//! Page computation and the pagination pipeline.
//!
//! # Components
//! - [`Paginator`] - Orchestrates count, ordering, clamping and slicing
//! - [`PageComputer`] - Page count and index clamping arithmetic
//! - [`SortKeyResolver`] - Picks the sort field when none is requested
//! - [`PageRequest`] / [`Page`] / [`PageMetadata`] - Inputs and outputs
//! - [`PaginatorStats`] - Usage counters

mod computer;
mod page;
mod paginator;
mod request;
mod resolver;
mod stats;

pub use computer::PageComputer;
pub use page::{Page, PageMetadata};
pub use paginator::{Paginate, Paginator};
pub use request::PageRequest;
pub use resolver::SortKeyResolver;
pub use stats::{PaginatorStats, StatsSnapshot};
