//! Entity trait: identity that survives field changes.

/// Something with a stable identity.
///
/// Two entities may hold identical field values and still be different
/// entities; lookups by identity go through `id()`.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
