//! Default sort-field resolution.

use crate::common::{Error, Result};
use crate::schema::TypeDescriptor;

/// Decides which field a page is sorted by.
pub struct SortKeyResolver;

impl SortKeyResolver {
    /// Resolve the sort field for `descriptor`.
    ///
    /// A non-empty `explicit_field` is returned as is; whether it exists is
    /// checked later by [`OrderingBuilder`](crate::query::OrderingBuilder).
    /// Otherwise the first key field is used, falling back to the first
    /// declared field when no field is marked as key.
    ///
    /// # Errors
    /// - `Error::NoSortableField` if the type declares no fields
    pub fn resolve<T>(descriptor: &TypeDescriptor<T>, explicit_field: Option<&str>) -> Result<String> {
        if let Some(field) = explicit_field.filter(|f| !f.is_empty()) {
            return Ok(field.to_string());
        }

        let field = descriptor
            .primary_key()
            .or_else(|| descriptor.fields().first())
            .ok_or_else(|| Error::NoSortableField {
                type_name: descriptor.type_name().to_string(),
            })?;

        Ok(field.name().to_string())
    }
}
