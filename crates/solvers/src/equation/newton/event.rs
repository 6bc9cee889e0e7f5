use super::MethodKind;

/// Event emitted by the solver for each update step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The estimate the step was taken from.
    pub x: f64,

    /// Function value at `x`.
    pub residual: f64,

    /// The new estimate.
    pub next: f64,

    /// The update formula used for this step.
    ///
    /// A Halley solve reports [`MethodKind::Newton`] for steps where the
    /// curvature correction was rejected.
    pub kind: MethodKind,
}

impl Event {
    /// Returns the step subtracted from `x`, so that `next = x - step`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.x - self.next
    }
}
