//! Type-erased value storage shared by records and resolution.

use std::any::Any;
use std::sync::Arc;

/// Type-erased Arc for storage and resolution results.
pub type AnyArc = Arc<dyn Any + Send + Sync>;

/// Marker injected in place of a missing `Optional` dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Null;

/// A fresh null marker value, suitable as a fallback argument.
pub fn null_value() -> AnyArc {
    Arc::new(Null)
}

/// True when `value` is the null marker (an `Optional` dependency that
/// found no provider).
pub fn is_null(value: &AnyArc) -> bool {
    value.is::<Null>()
}
