//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a function value
//! - [`HasEstimate`]: events that carry the current and next estimate
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use plumb_core::Observer;
//! use plumb_observers::traits::{CanStopEarly, HasEstimate};
//!
//! /// Stops once the estimate leaves a trusted interval.
//! struct StayInside {
//!     low: f64,
//!     high: f64,
//! }
//!
//! impl<E: HasEstimate, A: CanStopEarly> Observer<E, A> for StayInside {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let next = event.next();
//!         (next < self.low || next > self.high).then(A::stop_early)
//!     }
//! }
//! ```

use plumb_solvers::equation::newton;

/// An event that carries a function value.
pub trait HasResidual {
    /// Returns the function value at the event's estimate.
    fn residual(&self) -> f64;
}

/// An event that carries the estimate a step started from and where it landed.
pub trait HasEstimate {
    /// Returns the estimate the step was taken from.
    fn x(&self) -> f64;

    /// Returns the estimate the step produced.
    fn next(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- newton ---

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasEstimate for newton::Event {
    fn x(&self) -> f64 {
        self.x
    }

    fn next(&self) -> f64 {
        self.next
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
