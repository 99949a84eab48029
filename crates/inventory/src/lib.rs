//! Inventory domain module.
//!
//! `Item` records and the `Hub` that collects, filters and ranks them.
//! Deterministic in-memory logic only (no IO, no storage).

pub mod hub;
pub mod item;

pub use hub::{Hub, HubSnapshot, RemoveTarget};
pub use item::{Cost, Item, TagSet};
