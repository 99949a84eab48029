//! `storehub-core`: shared domain building blocks.
//!
//! Pure domain primitives only: errors, typed identifiers, and the small
//! traits the inventory model is written against.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod time;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{HubId, ItemId};
pub use time::parse_timestamp;
pub use value_object::ValueObject;
