use super::MethodKind;

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Two successive estimates agreed within the configured tolerance.
    Converged,

    /// The function evaluated to exactly zero at the estimate.
    ExactRoot,

    /// The derivative evaluated to exactly zero, so no Newton step exists.
    ZeroDerivative,

    /// The two secant points had equal function values.
    ///
    /// The reported estimate is the midpoint of the two points.
    ZeroSlope,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton, Halley, or secant solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Final estimate of the root.
    pub x: f64,

    /// Number of update steps taken.
    pub iters: usize,

    /// The method the solve ran with.
    pub method: MethodKind,
}

impl Solution {
    /// Returns true if the estimate satisfied the tolerance or is an exact root.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self.status, Status::Converged | Status::ExactRoot)
    }
}
