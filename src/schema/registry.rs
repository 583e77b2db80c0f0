//! Process-wide cache of type descriptors.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::schema::TypeDescriptor;

/// An element type that can describe its own fields.
///
/// # Example
/// ```
/// use pagekit::schema::{descriptor_of, Record, TypeDescriptor};
///
/// struct Invoice {
///     id: u32,
///     amount: i64,
/// }
///
/// impl Record for Invoice {
///     fn describe() -> TypeDescriptor<Self> {
///         TypeDescriptor::builder("Invoice")
///             .key("id", |i: &Invoice| i.id)
///             .field("amount", |i: &Invoice| i.amount)
///             .build()
///     }
/// }
///
/// let descriptor = descriptor_of::<Invoice>();
/// assert_eq!(descriptor.type_name(), "Invoice");
/// ```
pub trait Record: Sized + 'static {
    /// Build this type's descriptor. Called once per process; use
    /// [`descriptor_of`] to get the cached copy.
    fn describe() -> TypeDescriptor<Self>;
}

type Registry = RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>;

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Cached descriptor for `T`, built on first use.
pub fn descriptor_of<T: Record>() -> Arc<TypeDescriptor<T>> {
    let type_id = TypeId::of::<T>();

    // Fast path: shared lock only
    if let Some(cached) = registry().read().get(&type_id).cloned() {
        if let Ok(descriptor) = cached.downcast::<TypeDescriptor<T>>() {
            return descriptor;
        }
    }

    // Built outside the lock; `describe` is user code.
    let built = Arc::new(T::describe());
    tracing::trace!(type_name = built.type_name(), fields = built.fields().len(), "cached type descriptor");

    let mut map = registry().write();
    // Another thread may have won the race; keep its copy.
    let entry = map
        .entry(type_id)
        .or_insert_with(|| built.clone() as Arc<dyn Any + Send + Sync>)
        .clone();
    entry.downcast::<TypeDescriptor<T>>().unwrap_or(built)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldValue;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    static DESCRIBE_CALLS: AtomicUsize = AtomicUsize::new(0);

    struct Counted {
        id: u64,
    }

    impl Record for Counted {
        fn describe() -> TypeDescriptor<Self> {
            DESCRIBE_CALLS.fetch_add(1, Ordering::SeqCst);
            TypeDescriptor::builder("Counted").key("id", |c: &Counted| c.id).build()
        }
    }

    struct Other {
        name: String,
    }

    impl Record for Other {
        fn describe() -> TypeDescriptor<Self> {
            TypeDescriptor::builder("Other").field("name", |o: &Other| o.name.clone()).build()
        }
    }

    #[test]
    fn test_descriptor_is_cached() {
        let first = descriptor_of::<Counted>();
        let second = descriptor_of::<Counted>();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(DESCRIBE_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(first.field("id").unwrap().value(&Counted { id: 3 }), FieldValue::Uint(3));
    }

    #[test]
    fn test_types_do_not_collide() {
        let other = descriptor_of::<Other>();
        assert_eq!(other.type_name(), "Other");
        assert!(other.primary_key().is_none());
        assert_eq!(
            other.field("name").unwrap().value(&Other { name: "x".into() }),
            FieldValue::from("x")
        );
    }

    #[test]
    fn test_concurrent_lookups_share_one_descriptor() {
        let handles: Vec<_> = (0..8).map(|_| thread::spawn(descriptor_of::<Other>)).collect();
        let descriptors: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for d in &descriptors[1..] {
            assert!(Arc::ptr_eq(&descriptors[0], d));
        }
    }
}
