//! Element type metadata.
//!
//! The paginator sorts by field *name*, so it needs to read fields off
//! records without knowing their types at compile time.
//!
//! # Components
//! - [`TypeDescriptor`] - Named field accessors of one element type
//! - [`FieldValue`] - A field value read at runtime, with a total order
//! - [`Record`] / [`descriptor_of`] - Self-describing types, cached per process
//! - [`Row`] / [`RowSchema`] - Records whose shape is known only at runtime

mod descriptor;
mod registry;
mod row;
mod value;

pub use descriptor::{FieldDescriptor, TypeDescriptor, TypeDescriptorBuilder};
pub use registry::{descriptor_of, Record};
pub use row::{Row, RowSchema};
pub use value::{compare_values, FieldKind, FieldType, FieldValue};
