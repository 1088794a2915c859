#![allow(clippy::float_cmp)]

mod convergence;
mod determinism;
mod properties;
mod replay;
