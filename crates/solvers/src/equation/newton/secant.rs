use std::mem;

use plumb_core::{Function, Observer};

use super::{Action, Config, Error, Event, MethodKind, Solution, Status};

/// Relative and absolute perturbation used to derive `x1` from `x0`.
const SEED_EPS: f64 = 1e-4;

/// Returns the two starting points for the secant iteration.
///
/// Without an explicit `x1`, the second point is `x0` scaled by `1 + 1e-4`
/// and nudged by `1e-4` away from zero, so the points differ even at zero.
pub(super) fn seeds(x0: f64, x1: Option<f64>) -> Result<(f64, f64), Error> {
    match x1 {
        Some(x1) => {
            #[allow(clippy::float_cmp)]
            if x1 == x0 {
                return Err(Error::IdenticalStartingPoints { x: x0 });
            }
            Ok((x0, x1))
        }
        None => {
            let p1 = x0 * (1.0 + SEED_EPS);
            let nudge = if p1 >= 0.0 { SEED_EPS } else { -SEED_EPS };
            Ok((x0, p1 + nudge))
        }
    }
}

/// Runs the secant iteration from two starting points.
pub(super) fn iterate<F, Obs>(
    f: &F,
    mut p0: f64,
    mut p1: f64,
    config: &Config,
    observer: &mut Obs,
) -> Solution
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let finish = |x, status, iters| Solution {
        status,
        x,
        iters,
        method: MethodKind::Secant,
    };
    let tolerance = config.tolerance();

    let mut q0 = f.value(p0);
    let mut q1 = f.value(p1);

    // Order the seeds so that `p1` holds the larger residual.
    if q1.abs() < q0.abs() {
        mem::swap(&mut p0, &mut p1);
        mem::swap(&mut q0, &mut q1);
    }

    let mut p = p1;

    for iter in 1..=config.max_iters() {
        #[allow(clippy::float_cmp)]
        if q0 == q1 {
            let mid = 0.5 * (p0 + p1);
            log::debug!("Secant: equal function values at x = {p0} and x = {p1}, f = {q1}");
            return finish(mid, Status::ZeroSlope, iter - 1);
        }

        p = secant_update(p0, q0, p1, q1);

        log::trace!("Secant iter {iter}: x = {p1}, f(x) = {q1}, next = {p}");

        let event = Event {
            iter,
            x: p1,
            residual: q1,
            next: p,
            kind: MethodKind::Secant,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => return finish(p, Status::StoppedByObserver, iter),
            }
        }

        if tolerance.is_within(p, p1) {
            return finish(p, Status::Converged, iter);
        }

        p0 = p1;
        q0 = q1;
        p1 = p;
        q1 = f.value(p1);
    }

    log::debug!(
        "Secant: no convergence after {} iterations, last x = {p}",
        config.max_iters()
    );
    finish(p, Status::MaxIters, config.max_iters())
}

/// Returns the zero of the line through `(p0, q0)` and `(p1, q1)`.
///
/// The ratio is always formed with the larger-magnitude value in the
/// denominator, which keeps it within `[-1, 1]`.
fn secant_update(p0: f64, q0: f64, p1: f64, q1: f64) -> f64 {
    if q1.abs() > q0.abs() {
        (-q0 / q1 * p1 + p0) / (1.0 - q0 / q1)
    } else {
        (-q1 / q0 * p0 + p1) / (1.0 - q1 / q0)
    }
}
