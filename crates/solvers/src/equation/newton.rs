//! Newton-Raphson, Halley, and secant root finding for scalar equations.
//!
//! # Algorithm
//!
//! Starting from an initial estimate `x0`, each iteration replaces the
//! current estimate with the zero of a local model of `f`:
//!
//! - **Newton-Raphson** uses the tangent line, `x - f(x) / f'(x)`.
//! - **Halley** corrects the Newton step with curvature,
//!   `step / (1 - step * f''(x) / f'(x) / 2)`. The correction is applied only
//!   when that adjustment has magnitude below one; otherwise the iteration
//!   takes the plain Newton step, so the correction can never send the
//!   estimate in the opposite direction near an inflection point.
//! - **Secant** replaces the derivative with the slope through the two most
//!   recent estimates.
//!
//! The [`Method`] passed to the solver selects between them.
//! [`Method::select`] picks one from whichever derivatives are available.
//!
//! # Termination
//!
//! The solver stops when two successive estimates agree within the
//! configured [`Tolerance`](plumb_core::Tolerance), or when it cannot
//! continue: an exact zero of `f`, a zero derivative, or two equal secant
//! function values. Running out of iterations is not an error. The last
//! estimate is returned with [`Status::MaxIters`], and callers that need a
//! converged root should check [`Solution::is_converged`].
//!
//! # Limitations
//!
//! - **No bracketing**: convergence depends on the starting point
//! - **Scalar only**: one unknown, one equation
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per update step, after the new estimate is
//! computed and before the convergence check. Observers can return
//! [`Action::StopEarly`] to halt and keep the newest estimate.

mod action;
mod config;
mod derivative;
mod error;
mod event;
mod method;
mod secant;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use method::{Method, MethodKind};
pub use solution::{Solution, Status};

use plumb_core::{Function, Observer};

/// Finds a root of `f` near `x0` using the given method.
///
/// The observer receives an [`Event`] for each update step.
/// See the [module docs](self) for details on termination and observer actions.
///
/// # Errors
///
/// Returns [`Error::IdenticalStartingPoints`] if the secant method is given
/// an explicit second estimate equal to `x0`.
pub fn solve<F, Obs>(
    f: &F,
    x0: f64,
    method: Method<'_>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let solution = match method {
        Method::Secant { x1 } => {
            let (p0, p1) = secant::seeds(x0, x1)?;
            secant::iterate(f, p0, p1, config, &mut observer)
        }
        Method::Newton { fprime } => {
            derivative::iterate(f, x0, fprime, None, config, &mut observer)
        }
        Method::Halley { fprime, fprime2 } => {
            derivative::iterate(f, x0, fprime, Some(fprime2), config, &mut observer)
        }
    };

    Ok(solution)
}

/// Finds a root of `f` near `x0` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::IdenticalStartingPoints`] if the secant method is given
/// an explicit second estimate equal to `x0`.
pub fn solve_unobserved<F>(
    f: &F,
    x0: f64,
    method: Method<'_>,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(f, x0, method, config, ())
}

/// Finds a root of `f` near `x0` and returns only the estimate.
///
/// Takes raw settings instead of a [`Config`] and validates them first.
/// The returned value is the solver's final estimate whether or not it
/// converged; use [`solve`] when the termination status matters.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `abs_tol` is not strictly positive,
/// `rel_tol` is negative, or `max_iters` is zero, and
/// [`Error::IdenticalStartingPoints`] for a secant method with `x1 == x0`.
pub fn find_root<F>(
    f: &F,
    x0: f64,
    method: Method<'_>,
    abs_tol: f64,
    rel_tol: f64,
    max_iters: usize,
) -> Result<f64, Error>
where
    F: Function + ?Sized,
{
    let config = Config::new(max_iters, abs_tol, rel_tol)?;
    solve_unobserved(f, x0, method, &config).map(|solution| solution.x)
}
