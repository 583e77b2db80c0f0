//! Common types shared across pagekit.
//!
//! - Configuration constants and [`PaginatorConfig`]
//! - Error types

pub mod config;
pub mod error;

pub use config::PaginatorConfig;
pub use error::{Error, QueryError, Result};
