use plumb_core::Observer;

use crate::traits::{HasEstimate, HasResidual};

/// Records the estimates and residuals a solver visits.
///
/// Each event adds one `(x, residual)` pair, so the history describes the
/// convergence path step by step. Useful for plotting or for diagnosing a
/// solve that did not converge.
#[derive(Debug, Clone, Default)]
pub struct History {
    points: Vec<(f64, f64)>,
    last: Option<f64>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded `(x, residual)` pairs in visit order.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Returns the newest estimate produced by the last recorded step.
    #[must_use]
    pub fn last_estimate(&self) -> Option<f64> {
        self.last
    }

    /// Returns the absolute step sizes between consecutive estimates.
    #[must_use]
    pub fn step_sizes(&self) -> Vec<f64> {
        let mut xs: Vec<f64> = self.points.iter().map(|&(x, _)| x).collect();
        xs.extend(self.last);
        xs.windows(2).map(|pair| (pair[1] - pair[0]).abs()).collect()
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.points.push((event.x(), event.residual()));
        self.last = Some(event.next());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use plumb_solvers::equation::newton::{self, Action, Config, Event, Method};

    #[test]
    fn records_newton_path() {
        let f = |x: f64| x * x - 2.0;
        let fprime = |x: f64| 2.0 * x;

        let mut history = History::new();
        let solution = newton::solve(
            &f,
            1.0,
            Method::newton(&fprime),
            &Config::default(),
            |event: &Event| -> Option<Action> { history.observe(event) },
        )
        .expect("should solve");

        let points = history.points();
        assert_eq!(points.len(), solution.iters);
        assert_relative_eq!(points[0].0, 1.0);
        assert_relative_eq!(points[0].1, -1.0);
        assert_relative_eq!(points[1].0, 1.5);
        assert_relative_eq!(history.last_estimate().expect("steps taken"), solution.x);
    }

    #[test]
    fn step_sizes_shrink_near_the_root() {
        let f = |x: f64| x * x - 2.0;
        let fprime = |x: f64| 2.0 * x;

        let mut history = History::new();
        newton::solve(
            &f,
            1.0,
            Method::newton(&fprime),
            &Config::default(),
            |event: &Event| -> Option<Action> { history.observe(event) },
        )
        .expect("should solve");

        let steps = history.step_sizes();
        assert_eq!(steps.len(), history.points().len());
        assert!(steps.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn empty_history_has_no_steps() {
        let history = History::new();
        assert!(history.points().is_empty());
        assert!(history.step_sizes().is_empty());
        assert_eq!(history.last_estimate(), None);
    }
}
