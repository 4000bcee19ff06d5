//! Accessors: pure functions from a data item to one resolved field.
//!
//! Accessors are captured once when a template is built and invoked on
//! every render. They must not cache per-item results.

use std::sync::Arc;

/// Shared, thread-safe accessor closure.
pub type Accessor<T, R> = Arc<dyn Fn(&T) -> R + Send + Sync>;

/// Host callback invoked as `(item, new_value)` when an interactive rating
/// is picked.
pub type ChangeCallback<T> = Arc<dyn Fn(&T, u32) + Send + Sync>;

/// Box a closure as an [`Accessor`].
pub fn accessor<T, R, F>(f: F) -> Accessor<T, R>
where
    F: Fn(&T) -> R + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Evaluate an optional accessor, treating empty or whitespace-only text as
/// absent.
pub(crate) fn non_empty<T>(acc: &Option<Accessor<T, String>>, item: &T) -> Option<String> {
    acc.as_ref()
        .map(|f| f(item))
        .filter(|s| !s.trim().is_empty())
}
