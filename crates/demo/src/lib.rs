//! Demo driver: runs the inventory scenario and the combinator exercises.

pub mod config;
pub mod exercises;
pub mod scenario;

pub use config::DemoConfig;
pub use exercises::{CombinatorReport, run_combinators};
pub use scenario::{ScenarioReport, run_inventory, seed_items};
