//! Type descriptors: named, typed field accessors for an element type.

use std::fmt;

use crate::schema::value::{FieldKind, FieldType, FieldValue};

type Accessor<T> = Box<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// One named field of an element type.
pub struct FieldDescriptor<T> {
    name: String,
    kind: FieldKind,
    primary_key: bool,
    accessor: Accessor<T>,
}

impl<T> FieldDescriptor<T> {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether this field is marked as the type's identity key.
    #[inline]
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    /// Read this field off a record.
    #[inline]
    pub fn value(&self, record: &T) -> FieldValue {
        (self.accessor)(record)
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("primary_key", &self.primary_key)
            .finish_non_exhaustive()
    }
}

/// The fields of an element type, in declaration order.
///
/// # Example
/// ```
/// use pagekit::schema::{FieldKind, TypeDescriptor};
///
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// let descriptor = TypeDescriptor::<User>::builder("User")
///     .key("id", |u: &User| u.id)
///     .field("name", |u: &User| u.name.clone())
///     .build();
///
/// assert_eq!(descriptor.primary_key().map(|f| f.name()), Some("id"));
/// assert_eq!(descriptor.field("name").map(|f| f.kind()), Some(FieldKind::Text));
/// ```
pub struct TypeDescriptor<T> {
    type_name: String,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> TypeDescriptor<T> {
    pub fn builder(type_name: impl Into<String>) -> TypeDescriptorBuilder<T> {
        TypeDescriptorBuilder {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by exact (case-sensitive) name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.position(name).map(|i| &self.fields[i])
    }

    /// Index of the named field in declaration order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// First field marked as the identity key, if any.
    pub fn primary_key(&self) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|f| f.primary_key)
    }
}

impl<T> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Builder for [`TypeDescriptor`].
///
/// Declaring a field name twice keeps the first declaration.
pub struct TypeDescriptorBuilder<T> {
    type_name: String,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> TypeDescriptorBuilder<T> {
    /// Declare a field.
    pub fn field<V, F>(self, name: impl Into<String>, accessor: F) -> Self
    where
        V: FieldType,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.push(name.into(), V::KIND, false, Box::new(move |r| accessor(r).into()))
    }

    /// Declare the identity key field.
    pub fn key<V, F>(self, name: impl Into<String>, accessor: F) -> Self
    where
        V: FieldType,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.push(name.into(), V::KIND, true, Box::new(move |r| accessor(r).into()))
    }

    /// Declare a field whose kind is only known at runtime.
    pub fn dynamic<F>(self, name: impl Into<String>, kind: FieldKind, primary_key: bool, accessor: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        self.push(name.into(), kind, primary_key, Box::new(accessor))
    }

    pub fn build(self) -> TypeDescriptor<T> {
        TypeDescriptor {
            type_name: self.type_name,
            fields: self.fields,
        }
    }

    fn push(mut self, name: String, kind: FieldKind, primary_key: bool, accessor: Accessor<T>) -> Self {
        if !self.fields.iter().any(|f| f.name == name) {
            self.fields.push(FieldDescriptor {
                name,
                kind,
                primary_key,
                accessor,
            });
        }
        self
    }
}
