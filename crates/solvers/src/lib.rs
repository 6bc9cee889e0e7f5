//! Numerical solvers for scalar equations.
//!
//! - [`equation`]: finding roots of `f(x) = 0`

pub mod equation;
