use plumb_solvers::equation::newton::{self, Config, Method, Solution};

use crate::{DragModel, Error};

/// Vertical motion of a projectile under a [`DragModel`].
///
/// `vy` is the initial vertical velocity and `y0` is the launch height above
/// the target plane, so [`Flight::height`] reaches zero on impact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    model: DragModel,
    vy: f64,
    y0: f64,
}

impl Flight {
    /// Creates a flight from a drag model, vertical velocity, and launch height.
    #[must_use]
    pub fn new(model: DragModel, vy: f64, y0: f64) -> Self {
        Self { model, vy, y0 }
    }

    /// Returns the drag model.
    #[must_use]
    pub fn model(&self) -> DragModel {
        self.model
    }

    /// Height above the target plane at time `t`.
    ///
    /// `y0 + (vy + g/c) (1 - e^(-c t)) / c - g t / c`
    #[must_use]
    pub fn height(&self, t: f64) -> f64 {
        let terminal = self.model.terminal_speed();
        self.y0 + (self.vy + terminal) * self.model.travel(t) - terminal * t
    }

    /// Vertical velocity at time `t`, the first derivative of [`Flight::height`].
    ///
    /// `(vy + g/c) e^(-c t) - g/c`
    #[must_use]
    pub fn vertical_velocity(&self, t: f64) -> f64 {
        let terminal = self.model.terminal_speed();
        (self.vy + terminal) * self.decay(t) - terminal
    }

    /// Vertical acceleration at time `t`, the second derivative of [`Flight::height`].
    ///
    /// `-c (vy + g/c) e^(-c t)`
    #[must_use]
    pub fn vertical_acceleration(&self, t: f64) -> f64 {
        -self.model.drag() * (self.vy + self.model.terminal_speed()) * self.decay(t)
    }

    /// Impact time ignoring drag, `(vy + sqrt(vy² + 2 y0 g)) / g`.
    ///
    /// This is the positive root of `y0 + vy t - g t² / 2`. It is NaN when
    /// `vy² + 2 y0 g < 0`, which happens when the launch point is below the
    /// target plane and the projectile never climbs high enough to reach it.
    #[must_use]
    pub fn frictionless_guess(&self) -> f64 {
        let g = self.model.gravity();
        (self.vy + (self.vy * self.vy + 2.0 * self.y0 * g).sqrt()) / g
    }

    /// Solves for the impact time with Halley's method.
    ///
    /// Starts from [`Flight::frictionless_guess`]. When that guess is NaN the
    /// solver cannot recover and the solution holds NaN with
    /// [`Status::MaxIters`](newton::Status::MaxIters).
    ///
    /// # Errors
    ///
    /// Propagates solver argument errors. None occur for a valid `config`.
    pub fn solve_impact(&self, config: &Config) -> Result<Solution, Error> {
        let guess = self.frictionless_guess();
        if !guess.is_finite() {
            log::warn!(
                "no frictionless impact for vy = {}, y0 = {}; impact time is undefined",
                self.vy,
                self.y0
            );
        }

        let height = |t| self.height(t);
        let velocity = |t| self.vertical_velocity(t);
        let acceleration = |t| self.vertical_acceleration(t);

        let solution = newton::solve_unobserved(
            &height,
            guess,
            Method::halley(&velocity, &acceleration),
            config,
        )?;

        if !solution.is_converged() {
            log::debug!("impact time solve ended with {:?}", solution.status);
        }

        Ok(solution)
    }

    /// Returns the impact time estimate from [`Flight::solve_impact`].
    ///
    /// # Errors
    ///
    /// Propagates solver argument errors. None occur for a valid `config`.
    pub fn impact_time(&self, config: &Config) -> Result<f64, Error> {
        self.solve_impact(config).map(|solution| solution.x)
    }

    fn decay(&self, t: f64) -> f64 {
        (-self.model.drag() * t).exp()
    }
}

/// Time for a projectile to fall to the target plane under drag.
///
/// `vy` is the initial vertical velocity, `y0` the launch height above the
/// target plane, `c` the drag coefficient, and `g` the gravitational
/// acceleration. Uses the default solver [`Config`].
///
/// The result is NaN when the frictionless guess has no real root
/// (`vy² + 2 y0 g < 0`).
///
/// # Errors
///
/// Returns [`Error::Model`] if `c` or `g` is not strictly positive.
pub fn impact_time(vy: f64, y0: f64, c: f64, g: f64) -> Result<f64, Error> {
    let model = DragModel::new(c, g)?;
    Flight::new(model, vy, y0).impact_time(&Config::default())
}
