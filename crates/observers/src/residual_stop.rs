use plumb_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// Stops the solver once `|f(x)|` falls to a threshold.
///
/// This trades the solver's step-based convergence test for a residual test,
/// which suits callers that only need `f(x)` small, not `x` precise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualStop {
    threshold: f64,
}

impl ResidualStop {
    /// Creates an observer that stops once `|f(x)| <= threshold`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl<E, A> Observer<E, A> for ResidualStop
where
    E: HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.residual().abs() <= self.threshold).then(A::stop_early)
    }
}
