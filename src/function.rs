//! Objective functions the search engine minimizes.
//!
//! Any type implementing [`ObjectiveFunction`] can be searched. The
//! [`Function`] enum bundles the built-in benchmark landscapes and is what
//! the command-line driver selects by name:
//!
//! ```
//! use random_search::{Function, ObjectiveFunction};
//!
//! let f: Function = "Rosenbrock".parse().unwrap();
//! assert_eq!(f, Function::Rosenbrock);
//! assert_eq!(f.bounds(), (-2.048, 2.048));
//! assert_eq!(f.evaluate(&[1.0, 1.0, 1.0]), 0.0);
//! ```
//!
//! Custom objectives only need the two methods:
//!
//! ```
//! use random_search::ObjectiveFunction;
//!
//! struct Shifted;
//!
//! impl ObjectiveFunction for Shifted {
//!     fn evaluate(&self, position: &[f64]) -> f64 {
//!         position.iter().map(|x| (x - 1.0).powi(2)).sum()
//!     }
//!
//!     fn bounds(&self) -> (f64, f64) {
//!         (-4.0, 4.0)
//!     }
//! }
//! ```

use core::f64::consts::{E, PI};
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A scalar function to minimize over an axis-aligned box.
///
/// Implementations must be pure: `evaluate` depends only on `position`
/// and `bounds` always returns the same pair. The domain is the hypercube
/// `[low, high]` on every axis.
pub trait ObjectiveFunction {
    /// Score `position`. Lower is better.
    ///
    /// Iterates over exactly `position.len()` coordinates; no truncation
    /// or padding to a fixed dimensionality takes place.
    fn evaluate(&self, position: &[f64]) -> f64;

    /// The per-axis domain `(low, high)`.
    fn bounds(&self) -> (f64, f64);
}

impl<T: ObjectiveFunction + ?Sized> ObjectiveFunction for &T {
    fn evaluate(&self, position: &[f64]) -> f64 {
        (**self).evaluate(position)
    }

    fn bounds(&self) -> (f64, f64) {
        (**self).bounds()
    }
}

impl<T: ObjectiveFunction + ?Sized> ObjectiveFunction for Box<T> {
    fn evaluate(&self, position: &[f64]) -> f64 {
        (**self).evaluate(position)
    }

    fn bounds(&self) -> (f64, f64) {
        (**self).bounds()
    }
}

/// The built-in benchmark functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Function {
    /// `f(x) = Σ xᵢ²`. Unimodal, convex. Global minimum `f(0,…,0) = 0`.
    #[default]
    Sphere,
    /// `f(x) = Σ 100·(xᵢ₊₁ − xᵢ²)² + (1 − xᵢ)²`. Narrow curved valley.
    /// Global minimum `f(1,…,1) = 0`; zero for a single coordinate.
    Rosenbrock,
    /// `f(x) = 10n + Σ (xᵢ² − 10·cos(2πxᵢ))`. Highly multimodal.
    /// Global minimum `f(0,…,0) = 0`.
    Rastrigin,
    /// Nearly flat outer region with a deep central well.
    /// Global minimum `f(0,…,0) = 0`.
    Ackley,
}

impl Function {
    /// Every built-in function, in declaration order.
    pub const ALL: [Function; 4] = [
        Function::Sphere,
        Function::Rosenbrock,
        Function::Rastrigin,
        Function::Ackley,
    ];

    /// The canonical lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Function::Sphere => "sphere",
            Function::Rosenbrock => "rosenbrock",
            Function::Rastrigin => "rastrigin",
            Function::Ackley => "ackley",
        }
    }
}

impl ObjectiveFunction for Function {
    fn evaluate(&self, position: &[f64]) -> f64 {
        match self {
            Function::Sphere => sphere(position),
            Function::Rosenbrock => rosenbrock(position),
            Function::Rastrigin => rastrigin(position),
            Function::Ackley => ackley(position),
        }
    }

    fn bounds(&self) -> (f64, f64) {
        match self {
            Function::Sphere | Function::Rastrigin => (-5.12, 5.12),
            Function::Rosenbrock => (-2.048, 2.048),
            Function::Ackley => (-32.768, 32.768),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Function {
    type Err = Error;

    /// Case-insensitive lookup by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFunction`] if `s` names no built-in function.
    fn from_str(s: &str) -> Result<Self> {
        Function::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownFunction(s.to_string()))
    }
}

// Sums fold from +0.0 so an empty position scores exactly zero.

fn sphere(x: &[f64]) -> f64 {
    x.iter().fold(0.0, |acc, xi| acc + xi * xi)
}

fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2).fold(0.0, |acc, w| {
        acc + (100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
    })
}

#[allow(clippy::cast_precision_loss)]
fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    x.iter()
        .fold(10.0 * n, |acc, xi| acc + (xi * xi - 10.0 * (2.0 * PI * xi).cos()))
}

#[allow(clippy::cast_precision_loss)]
fn ackley(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let n = x.len() as f64;
    let sum_sq = x.iter().fold(0.0, |acc, xi| acc + xi * xi);
    let sum_cos = x.iter().fold(0.0, |acc, xi| acc + (2.0 * PI * xi).cos());
    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E
}
