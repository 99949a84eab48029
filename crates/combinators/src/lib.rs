//! Call combinators: small wrappers that change how a function is invoked.
//!
//! - [`Memoize`]: cache results by argument tuple.
//! - [`clip`]: forward positional arguments only.
//! - [`EveryOther`]: run only on even-numbered calls.
//! - [`repeat`]: invoke a fixed number of times and collect the results.

pub mod clip;
pub mod gate;
pub mod memoize;
pub mod repeat;

pub use clip::{CallArgs, clip};
pub use gate::EveryOther;
pub use memoize::{MAX_FIB_ARGUMENT, Memoize, memoized_fib};
pub use repeat::{random_sum, repeat};
