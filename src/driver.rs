//! One optimization run, from parameters to the printed record.
//!
//! [`execute`] is what the `random-search` binary calls once its flags are
//! parsed: it picks the objective by name, runs the engine, and packs the
//! result into a [`RunReport`] whose `Display` form is the record written
//! to stdout.
//!
//! ```
//! use random_search::{RunConfig, execute};
//!
//! let config = RunConfig {
//!     algorithm: "Sphere".to_string(),
//!     iter: 200,
//!     agents: 25,
//!     ..RunConfig::default()
//! };
//! let report = execute(&config).unwrap();
//!
//! assert_eq!(report.iter, 200);
//! assert!(report.fopt < 1e-3);
//! assert!(report.to_string().starts_with("{\"iter\":200,\"fopt\":0.000"));
//! ```

use core::fmt;
use core::time::Duration;
#[cfg(feature = "serde")]
use std::path::Path;
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::function::{Function, ObjectiveFunction};
use crate::search::{DEFAULT_AGENTS, DEFAULT_DIMENSION, DEFAULT_SEED, RandomSearch};

/// Iteration budget used when none is given.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Parameters of a single run.
///
/// With the `serde` feature a config can be loaded from JSON. Besides the
/// field names, the task-payload spellings `alg`, `dimension` and
/// `iterations` are accepted, and any count may be given as an object
/// whose `max` entry is used (`{"min": 10, "max": 500, "step": 10}`).
/// Missing keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Objective function name, case-insensitive. Unknown names run Sphere.
    #[cfg_attr(feature = "serde", serde(alias = "alg"))]
    pub algorithm: String,
    /// Number of refinement iterations.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "iterations", deserialize_with = "count_or_max")
    )]
    pub iter: usize,
    /// Population size.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "count_or_max"))]
    pub agents: usize,
    /// Problem dimensionality.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "dimension", deserialize_with = "count_or_max")
    )]
    pub dim: usize,
    /// Seed for the engine's generator.
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: Function::Sphere.name().to_string(),
            iter: DEFAULT_ITERATIONS,
            agents: DEFAULT_AGENTS,
            dim: DEFAULT_DIMENSION,
            seed: DEFAULT_SEED,
        }
    }
}

#[cfg(feature = "serde")]
impl RunConfig {
    /// Parse a config from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the document is not
    /// valid JSON or has values of the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the file cannot be
    /// read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum Count {
    Exact(usize),
    Range { max: usize },
}

#[cfg(feature = "serde")]
fn count_or_max<'de, D: Deserializer<'de>>(deserializer: D) -> core::result::Result<usize, D::Error> {
    Ok(match Count::deserialize(deserializer)? {
        Count::Exact(n) | Count::Range { max: n } => n,
    })
}

/// The outcome of [`execute`].
///
/// `Display` renders the single-line record
/// `{"iter":100,"fopt":0.000012,"bestPos":[0.003000,-0.001000]}` with
/// six decimals for every real number.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RunReport {
    /// The iteration budget, echoed back.
    pub iter: usize,
    /// Objective value at `best_pos`.
    pub fopt: f64,
    /// The best position found.
    #[cfg_attr(feature = "serde", serde(rename = "bestPos"))]
    pub best_pos: Vec<f64>,
    /// Wall-clock time spent searching. Not part of the record.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub runtime: Duration,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"iter\":{},\"fopt\":{:.6},\"bestPos\":[", self.iter, self.fopt)?;
        for (i, x) in self.best_pos.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{x:.6}")?;
        }
        f.write_str("]}")
    }
}

/// Look up a built-in function by name, falling back to Sphere.
///
/// An unknown name is not an error: it logs a warning and the run
/// proceeds on [`Function::Sphere`].
#[must_use]
pub fn resolve_function(name: &str) -> Function {
    name.parse().unwrap_or_else(|_| {
        trace_warn!(algorithm = name, "unknown algorithm, falling back to sphere");
        Function::Sphere
    })
}

/// Run one optimization as described by `config`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) if
/// `config.dim` or `config.agents` is zero. Nothing is searched in that
/// case.
pub fn execute(config: &RunConfig) -> Result<RunReport> {
    trace_info!(
        algorithm = %config.algorithm,
        iter = config.iter,
        agents = config.agents,
        dim = config.dim,
        seed = config.seed,
        "starting run"
    );

    let function = resolve_function(&config.algorithm);
    let mut search = RandomSearch::builder(function)
        .dimension(config.dim)
        .agents(config.agents)
        .seed(config.seed)
        .build()?;

    let started = Instant::now();
    let best_pos = search.optimize(config.iter);
    let runtime = started.elapsed();

    Ok(RunReport {
        iter: config.iter,
        fopt: function.evaluate(&best_pos),
        best_pos,
        runtime,
    })
}
