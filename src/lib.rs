#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Population-based random search with a shrinking neighborhood radius.
//!
//! The crate minimizes a scalar function over an axis-aligned box. It
//! seeds a population uniformly over the box, keeps the best member, and
//! then repeatedly perturbs that incumbent within a radius that shrinks
//! linearly over the run. Runs are deterministic: the engine owns its own
//! seeded generator.
//!
//! # Getting Started
//!
//! ```
//! use random_search::prelude::*;
//!
//! let mut search = RandomSearch::new(Function::Rosenbrock, 2, 25)?;
//! let best = search.optimize(300);
//!
//! println!("f({best:?}) = {:.6}", Function::Rosenbrock.evaluate(&best));
//! # Ok::<(), random_search::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`ObjectiveFunction`] | What gets minimized: `evaluate` a position, declare `bounds`. |
//! | [`Function`] | The built-in benchmarks (Sphere, Rosenbrock, Rastrigin, Ackley), selectable by name. |
//! | [`RandomSearch`] | The engine: population, generator, and the optimization loop. |
//! | [`SearchOutcome`] | Best position plus fitness history of one run. |
//! | [`RunConfig`] / [`RunReport`] | The command-line boundary: parameters in, record out. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) during a run | via `cli` |
//! | `serde` | `Serialize`/`Deserialize` on public types, [`RunConfig::from_json_file`] | via `cli` |
//! | `cli` | The `random-search` binary | on |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::warn!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_warn {
    ($($arg:tt)*) => {};
}

mod driver;
mod error;
pub mod function;
mod rng_util;
pub mod search;

pub use driver::{DEFAULT_ITERATIONS, RunConfig, RunReport, execute, resolve_function};
pub use error::{Error, Result};
pub use function::{Function, ObjectiveFunction};
pub use search::{DEFAULT_SEED, RandomSearch, RandomSearchBuilder, SearchOutcome};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use random_search::prelude::*;
/// ```
pub mod prelude {
    pub use crate::driver::{RunConfig, RunReport, execute};
    pub use crate::error::{Error, Result};
    pub use crate::function::{Function, ObjectiveFunction};
    pub use crate::search::{RandomSearch, RandomSearchBuilder, SearchOutcome};
}
