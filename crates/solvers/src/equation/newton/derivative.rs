use plumb_core::{Function, Observer};

use super::{Action, Config, Event, MethodKind, Solution, Status};

/// Runs Newton-Raphson, or Halley when `fprime2` is present.
pub(super) fn iterate<F, Obs>(
    f: &F,
    x0: f64,
    fprime: &dyn Function,
    fprime2: Option<&dyn Function>,
    config: &Config,
    observer: &mut Obs,
) -> Solution
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let method = if fprime2.is_some() {
        MethodKind::Halley
    } else {
        MethodKind::Newton
    };
    let finish = |x, status, iters| Solution {
        status,
        x,
        iters,
        method,
    };
    let tolerance = config.tolerance();

    let mut p0 = x0;
    let mut p = x0;

    for iter in 1..=config.max_iters() {
        let fval = f.value(p0);

        #[allow(clippy::float_cmp)]
        if fval == 0.0 {
            log::debug!("{method:?}: exact root at x = {p0}");
            return finish(p0, Status::ExactRoot, iter - 1);
        }

        let fder = fprime.value(p0);

        #[allow(clippy::float_cmp)]
        if fder == 0.0 {
            log::debug!("{method:?}: zero derivative at x = {p0}, f(x) = {fval}");
            return finish(p0, Status::ZeroDerivative, iter - 1);
        }

        let newton_step = fval / fder;
        let (step, kind) = match fprime2 {
            Some(fprime2) => halley_step(newton_step, fder, fprime2.value(p0)),
            None => (newton_step, MethodKind::Newton),
        };
        p = p0 - step;

        log::trace!("{kind:?} iter {iter}: x = {p0}, f(x) = {fval}, next = {p}");

        let event = Event {
            iter,
            x: p0,
            residual: fval,
            next: p,
            kind,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => return finish(p, Status::StoppedByObserver, iter),
            }
        }

        if tolerance.is_within(p, p0) {
            return finish(p, Status::Converged, iter);
        }

        p0 = p;
    }

    log::debug!(
        "{method:?}: no convergence after {} iterations, last x = {p}",
        config.max_iters()
    );
    finish(p, Status::MaxIters, config.max_iters())
}

/// Applies Halley's curvature correction to a Newton step.
///
/// The correction divides the step by `1 - adj`. It is only applied while
/// `|adj| < 1`, which keeps the divisor positive; otherwise the plain Newton
/// step is returned.
fn halley_step(newton_step: f64, fder: f64, fder2: f64) -> (f64, MethodKind) {
    let adj = newton_step * fder2 / fder / 2.0;
    if adj.abs() < 1.0 {
        (newton_step / (1.0 - adj), MethodKind::Halley)
    } else {
        (newton_step, MethodKind::Newton)
    }
}
