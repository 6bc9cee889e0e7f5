/// Actions an observer can take during a Newton, Halley, or secant solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the newest estimate.
    StopEarly,
}
