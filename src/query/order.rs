//! Sorting by a field named at runtime.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};
use crate::query::OrderableQuery;
use crate::schema::{compare_values, FieldDescriptor, FieldValue, TypeDescriptor};

/// Ordering direction for sorted queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    #[inline]
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    #[inline]
    pub fn is_descending(self) -> bool {
        self == SortDirection::Desc
    }

    /// Apply this direction to an ascending comparison result.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

/// A validated sort instruction: one field of `T` plus a direction.
///
/// Only [`OrderingBuilder`] creates these, so the field always exists.
/// Backing engines can translate [`field_name`](Self::field_name) into their
/// own ORDER BY; in-memory sources use [`compare`](Self::compare).
pub struct SortKey<T> {
    descriptor: Arc<TypeDescriptor<T>>,
    index: usize,
    direction: SortDirection,
}

impl<T> SortKey<T> {
    pub fn field(&self) -> &FieldDescriptor<T> {
        &self.descriptor.fields()[self.index]
    }

    #[inline]
    pub fn field_name(&self) -> &str {
        self.field().name()
    }

    #[inline]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn type_name(&self) -> &str {
        self.descriptor.type_name()
    }

    /// Read the sort value off a record.
    #[inline]
    pub fn value(&self, record: &T) -> FieldValue {
        self.field().value(record)
    }

    /// Compare two records by this key, direction applied.
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        let field = self.field();
        self.direction
            .apply(compare_values(&field.value(left), &field.value(right)))
    }
}

impl<T> Clone for SortKey<T> {
    fn clone(&self) -> Self {
        Self {
            descriptor: Arc::clone(&self.descriptor),
            index: self.index,
            direction: self.direction,
        }
    }
}

impl<T> fmt::Debug for SortKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortKey")
            .field("type_name", &self.type_name())
            .field("field", &self.field_name())
            .field("direction", &self.direction)
            .finish()
    }
}

/// Builds order-by operations over an [`OrderableQuery`] from a field name.
pub struct OrderingBuilder;

impl OrderingBuilder {
    /// Validate `field_name` against the descriptor and build a key for it.
    ///
    /// # Errors
    /// - `Error::UnknownSortField` if the type has no such field
    pub fn sort_key<T>(
        descriptor: &Arc<TypeDescriptor<T>>,
        field_name: &str,
        direction: SortDirection,
    ) -> Result<SortKey<T>> {
        let index = descriptor
            .position(field_name)
            .ok_or_else(|| Error::UnknownSortField {
                field: field_name.to_string(),
                type_name: descriptor.type_name().to_string(),
            })?;

        Ok(SortKey {
            descriptor: Arc::clone(descriptor),
            index,
            direction,
        })
    }

    /// Return `source` ordered by `field_name`.
    ///
    /// # Errors
    /// - `Error::UnknownSortField` if the type has no such field
    /// - `Error::Query` if the backing engine rejects the ordering
    pub fn apply_order<Q: OrderableQuery>(
        source: Q,
        descriptor: &Arc<TypeDescriptor<Q::Item>>,
        field_name: &str,
        direction: SortDirection,
    ) -> Result<Q> {
        let key = Self::sort_key(descriptor, field_name, direction)?;
        tracing::debug!(
            type_name = descriptor.type_name(),
            field = field_name,
            kind = %key.field().kind(),
            %direction,
            "applying sort order"
        );
        source.order_by(key).map_err(Error::query)
    }
}
