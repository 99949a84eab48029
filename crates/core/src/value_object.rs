//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity of its own: two instances holding the same
/// values are interchangeable. Validation happens when the value is built, so
/// an existing instance is always valid. To change one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Cost(f64);
///
/// impl ValueObject for Cost {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
