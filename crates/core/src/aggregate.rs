//! Aggregate root trait for collections that own other entities.

/// Aggregate root marker + minimal interface.
///
/// An aggregate owns a consistency boundary (e.g. a hub and the items it
/// holds). Every mutation bumps `version`, so two observations of the same
/// aggregate can be told apart without diffing their contents.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Number of mutations applied since construction.
    fn version(&self) -> u64;
}
