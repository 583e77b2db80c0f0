//! pagekit - page-by-page access to ordered, filterable data sources.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagekit                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Paging (paging/)                        │   │
//! │  │   Paginator ── PageComputer ── SortKeyResolver           │   │
//! │  │   PageRequest → Page<T> + PageMetadata                   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Query (query/)                          │   │
//! │  │   OrderableQuery: count | order_by | skip | take | fetch │   │
//! │  │   OrderingBuilder + SortKey        MemoryQuery adapter   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Schema (schema/)                        │   │
//! │  │   TypeDescriptor (cached per type) + FieldValue order    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Config and error types
//! - [`schema`] - Runtime field metadata for element types
//! - [`query`] - The query abstraction and ordering by field name
//! - [`paging`] - Page arithmetic and the paginator
//!
//! # Quick Start
//! ```
//! use pagekit::query::IntoMemoryQuery;
//! use pagekit::schema::{Record, TypeDescriptor};
//! use pagekit::{PageRequest, Paginator};
//!
//! struct Product {
//!     sku: u32,
//!     price: f64,
//! }
//!
//! impl Record for Product {
//!     fn describe() -> TypeDescriptor<Self> {
//!         TypeDescriptor::builder("Product")
//!             .key("sku", |p: &Product| p.sku)
//!             .field("price", |p: &Product| p.price)
//!             .build()
//!     }
//! }
//!
//! let products = vec![
//!     Product { sku: 2, price: 9.5 },
//!     Product { sku: 1, price: 3.0 },
//!     Product { sku: 3, price: 7.25 },
//! ];
//!
//! let request = PageRequest::new(1, 2).sort_by_desc("price");
//! let page = Paginator::default().paginate(products.into_query(), Some(&request)).unwrap();
//!
//! assert_eq!(page.iter().map(|p| p.sku).collect::<Vec<_>>(), vec![2, 3]);
//! assert_eq!(page.metadata().total_pages, 2);
//! assert!(page.metadata().has_next);
//! ```

pub mod common;
pub mod paging;
pub mod query;
pub mod schema;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_PAGE_INDEX, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use common::{Error, PaginatorConfig, Result};

pub use paging::{
    Page, PageComputer, PageMetadata, PageRequest, Paginate, Paginator, PaginatorStats, SortKeyResolver,
    StatsSnapshot,
};
pub use query::{MemoryQuery, OrderableQuery, OrderingBuilder, SortDirection};
pub use schema::{Record, TypeDescriptor};
