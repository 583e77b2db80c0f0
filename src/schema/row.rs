//! Records whose shape is only known at runtime.
//!
//! A [`Row`] is a positional list of [`FieldValue`]s. Its descriptor is
//! built from a [`RowSchema`] (column names, kinds and the key column),
//! e.g. from a result-set header, and passed to
//! [`Paginator::paginate_with`](crate::Paginator::paginate_with).

use crate::schema::{FieldKind, FieldValue, TypeDescriptor};

/// A runtime-shaped record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    values: Vec<FieldValue>,
}

impl Row {
    pub fn new(values: Vec<FieldValue>) -> Self {
        Self { values }
    }

    /// Value at `column`; missing columns read as `Null`.
    pub fn get(&self, column: usize) -> &FieldValue {
        const NULL: &FieldValue = &FieldValue::Null;
        self.values.get(column).unwrap_or(NULL)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<FieldValue> {
        self.values
    }
}

impl From<Vec<FieldValue>> for Row {
    fn from(values: Vec<FieldValue>) -> Self {
        Row::new(values)
    }
}

#[derive(Debug, Clone)]
struct Column {
    name: String,
    kind: FieldKind,
    primary_key: bool,
}

/// Column layout of a set of [`Row`]s.
#[derive(Debug, Clone)]
pub struct RowSchema {
    name: String,
    columns: Vec<Column>,
}

impl RowSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn column(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.columns.push(Column {
            name: name.into(),
            kind,
            primary_key: false,
        });
        self
    }

    pub fn key_column(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.columns.push(Column {
            name: name.into(),
            kind,
            primary_key: true,
        });
        self
    }

    /// Descriptor reading each column by position.
    pub fn descriptor(&self) -> TypeDescriptor<Row> {
        self.columns
            .iter()
            .enumerate()
            .fold(TypeDescriptor::<Row>::builder(self.name.clone()), |builder, (i, col)| {
                builder.dynamic(col.name.clone(), col.kind, col.primary_key, move |row: &Row| {
                    row.get(i).clone()
                })
            })
            .build()
    }
}
