//! Solvers for equations, finding `x` such that `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`newton`]: Newton-Raphson, upgraded to Halley's method when a second
//!   derivative is available, or the secant method when no derivative is given

pub mod newton;
