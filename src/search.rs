//! Population-based random search with a shrinking neighborhood.
//!
//! The search runs in two phases:
//!
//! 1. **Initialization**: `agents` positions are drawn uniformly from the
//!    objective's box, agent-major then axis-minor. The best of them seeds
//!    the incumbent; ties keep the earliest agent.
//! 2. **Refinement**: each iteration draws `agents` candidates around the
//!    incumbent. Every coordinate is perturbed by a uniform offset in
//!    `[-r, r]` and clamped back into the box, where the radius `r` decays
//!    linearly from 10% of the domain width down to about 0.1% (see
//!    [`radius`]). A strictly better candidate replaces the incumbent
//!    immediately, so later candidates in the same iteration already
//!    perturb the improved point.
//!
//! The engine owns a [`fastrand::Rng`] seeded with [`DEFAULT_SEED`] unless
//! told otherwise, so a fresh engine with the same parameters always
//! returns the same position, bit for bit.
//!
//! # Examples
//!
//! ```
//! use random_search::{Function, ObjectiveFunction, RandomSearch};
//!
//! let mut search = RandomSearch::new(Function::Sphere, 2, 25).unwrap();
//! let best = search.optimize(200);
//!
//! assert_eq!(best.len(), 2);
//! assert!(Function::Sphere.evaluate(&best) < 1e-3);
//! ```
//!
//! With a custom seed and the full outcome:
//!
//! ```
//! use random_search::{Function, RandomSearch};
//!
//! let mut search = RandomSearch::builder(Function::Rosenbrock)
//!     .dimension(3)
//!     .agents(20)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let outcome = search.run(100);
//! assert_eq!(outcome.history.len(), 100);
//! assert!(outcome.best_fitness <= outcome.initial_fitness);
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{Error, Result};
use crate::function::ObjectiveFunction;
use crate::rng_util;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Default dimensionality of a [`RandomSearchBuilder`].
pub const DEFAULT_DIMENSION: usize = 2;

/// Default population size of a [`RandomSearchBuilder`].
pub const DEFAULT_AGENTS: usize = 10;

/// Radius at the first iteration, as a fraction of the domain width.
const INITIAL_RADIUS_FRACTION: f64 = 0.10;

/// How much of the domain width the radius loses over a full run.
const RADIUS_DECAY: f64 = 0.099;

/// Half-width of the perturbation interval at `iteration` out of `iterations`.
///
/// Starts at `0.10 * range` and decays linearly, reaching
/// `0.001 * range` only in the limit `iteration → iterations`. A run with
/// zero iterations reports the initial radius.
///
/// ```
/// use random_search::search::radius;
///
/// assert_eq!(radius(10.0, 0, 100), 1.0);
/// assert!((radius(10.0, 50, 100) - 0.505).abs() < 1e-12);
/// assert_eq!(radius(10.0, 0, 0), 1.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn radius(range: f64, iteration: usize, iterations: usize) -> f64 {
    if iterations == 0 {
        return range * INITIAL_RADIUS_FRACTION;
    }
    let t = iteration as f64 / iterations as f64;
    range * (INITIAL_RADIUS_FRACTION - RADIUS_DECAY * t)
}

/// Everything a finished search run knows about its result.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SearchOutcome {
    /// The best position found.
    pub best_position: Vec<f64>,
    /// Objective value at `best_position`.
    pub best_fitness: f64,
    /// Best objective value of the initial population.
    pub initial_fitness: f64,
    /// Best objective value after each refinement iteration.
    pub history: Vec<f64>,
    /// Number of objective evaluations spent.
    pub evaluations: usize,
}

/// The running best of a search.
///
/// The position is replaced wholesale on improvement, never edited in place.
struct Incumbent {
    position: Vec<f64>,
    fitness: f64,
}

impl Incumbent {
    fn new<F: ObjectiveFunction>(function: &F, position: Vec<f64>) -> Self {
        let fitness = function.evaluate(&position);
        Self { position, fitness }
    }

    /// Evaluate `candidate` and adopt it if strictly better.
    fn offer<F: ObjectiveFunction>(&mut self, function: &F, candidate: Vec<f64>) -> bool {
        let fitness = function.evaluate(&candidate);
        if fitness < self.fitness {
            self.position = candidate;
            self.fitness = fitness;
            true
        } else {
            false
        }
    }
}

/// Random search engine over an [`ObjectiveFunction`].
///
/// Construct with [`RandomSearch::new`] for the fixed default seed or
/// [`RandomSearch::builder`] for full control. The generator is part of
/// the engine: calling [`optimize`](Self::optimize) twice on the same
/// engine continues the same random stream, so repeatable results need
/// a fresh engine per run.
pub struct RandomSearch<F> {
    function: F,
    dim: usize,
    agents: usize,
    low: f64,
    high: f64,
    rng: fastrand::Rng,
}

impl<F: ObjectiveFunction> RandomSearch<F> {
    /// Create an engine seeded with [`DEFAULT_SEED`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `dim` or `agents` is zero, and
    /// [`Error::InvalidBounds`] if the function's bounds are not finite or
    /// `low > high`.
    pub fn new(function: F, dim: usize, agents: usize) -> Result<Self> {
        Self::builder(function)
            .dimension(dim)
            .agents(agents)
            .build()
    }

    /// Start configuring an engine for `function`.
    #[must_use]
    pub fn builder(function: F) -> RandomSearchBuilder<F> {
        RandomSearchBuilder::new(function)
    }

    /// The objective being minimized.
    #[must_use]
    pub fn function(&self) -> &F {
        &self.function
    }

    /// Number of coordinates per position.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Population size, also the number of candidates per iteration.
    #[must_use]
    pub fn agents(&self) -> usize {
        self.agents
    }

    /// Search for a minimizer and return the best position found.
    ///
    /// Every coordinate of the result lies within the function's bounds.
    /// With `iterations == 0` this is the best of the initial population.
    pub fn optimize(&mut self, iterations: usize) -> Vec<f64> {
        self.run(iterations).best_position
    }

    /// Search for a minimizer and return the full [`SearchOutcome`].
    pub fn run(&mut self, iterations: usize) -> SearchOutcome {
        let (low, high) = (self.low, self.high);
        let range = high - low;

        let population: Vec<Vec<f64>> = (0..self.agents)
            .map(|_| self.random_position(low, high))
            .collect();

        let mut members = population.into_iter();
        let mut best = Incumbent::new(&self.function, members.next().unwrap_or_default());
        for position in members {
            best.offer(&self.function, position);
        }
        let initial_fitness = best.fitness;
        trace_debug!(initial_fitness, "initial population evaluated");

        let mut history = Vec::with_capacity(iterations.min(1 << 16));
        for iteration in 0..iterations {
            let radius = radius(range, iteration, iterations);

            for _ in 0..self.agents {
                // Reads the live incumbent, which may already have moved
                // earlier in this iteration.
                let candidate: Vec<f64> = best
                    .position
                    .iter()
                    .map(|&x| (x + rng_util::symmetric(&mut self.rng, radius)).clamp(low, high))
                    .collect();
                best.offer(&self.function, candidate);
            }

            history.push(best.fitness);
            trace_debug!(iteration, radius, best_fitness = best.fitness, "iteration complete");
        }

        let evaluations = self.agents.saturating_mul(iterations.saturating_add(1));
        trace_info!(best_fitness = best.fitness, evaluations, "search finished");

        SearchOutcome {
            best_position: best.position,
            best_fitness: best.fitness,
            initial_fitness,
            history,
            evaluations,
        }
    }

    fn random_position(&mut self, low: f64, high: f64) -> Vec<f64> {
        (0..self.dim)
            .map(|_| rng_util::f64_range(&mut self.rng, low, high))
            .collect()
    }
}

/// Builder for [`RandomSearch`].
///
/// Defaults:
/// - `dimension`: [`DEFAULT_DIMENSION`] (2)
/// - `agents`: [`DEFAULT_AGENTS`] (10)
/// - `seed`: [`DEFAULT_SEED`] (42)
///
/// # Examples
///
/// ```
/// use random_search::{Function, RandomSearchBuilder};
///
/// let search = RandomSearchBuilder::new(Function::Sphere)
///     .dimension(5)
///     .agents(30)
///     .rng(fastrand::Rng::with_seed(1))
///     .build()
///     .unwrap();
///
/// assert_eq!(search.dimension(), 5);
/// ```
pub struct RandomSearchBuilder<F> {
    function: F,
    dim: usize,
    agents: usize,
    seed: u64,
    rng: Option<fastrand::Rng>,
}

impl<F: ObjectiveFunction> RandomSearchBuilder<F> {
    /// Create a builder with default settings.
    #[must_use]
    pub fn new(function: F) -> Self {
        Self {
            function,
            dim: DEFAULT_DIMENSION,
            agents: DEFAULT_AGENTS,
            seed: DEFAULT_SEED,
            rng: None,
        }
    }

    /// Set the number of coordinates per position.
    #[must_use]
    pub fn dimension(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }

    /// Set the population size.
    #[must_use]
    pub fn agents(mut self, agents: usize) -> Self {
        self.agents = agents;
        self
    }

    /// Seed the engine's generator.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use an existing generator instead of seeding a new one.
    ///
    /// Takes precedence over [`seed`](Self::seed).
    #[must_use]
    pub fn rng(mut self, rng: fastrand::Rng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration and build the engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the dimension or population
    /// size is zero, and [`Error::InvalidBounds`] if the function's bounds
    /// are not finite or `low > high`.
    pub fn build(self) -> Result<RandomSearch<F>> {
        if self.dim == 0 {
            return Err(Error::invalid_parameter("dim", "must be at least 1"));
        }
        if self.agents == 0 {
            return Err(Error::invalid_parameter("agents", "must be at least 1"));
        }

        let (low, high) = self.function.bounds();
        if !(low.is_finite() && high.is_finite()) || low > high {
            return Err(Error::InvalidBounds { low, high });
        }

        Ok(RandomSearch {
            function: self.function,
            dim: self.dim,
            agents: self.agents,
            low,
            high,
            rng: self
                .rng
                .unwrap_or_else(|| fastrand::Rng::with_seed(self.seed)),
        })
    }
}
