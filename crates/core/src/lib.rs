//! Core traits and types for scalar root finding.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! physical models build on:
//!
//! - [`Function`]: a real-valued function of one real variable
//! - [`Tolerance`]: the absolute plus relative convergence contract
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;
mod tolerance;

pub use function::Function;
pub use observer::Observer;
pub use tolerance::{Tolerance, ToleranceError};
