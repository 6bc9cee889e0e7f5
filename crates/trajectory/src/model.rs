use thiserror::Error;

/// Gravity and linear drag acting on a point mass.
///
/// Both coefficients are strictly positive. Units are the caller's choice as
/// long as they are consistent: the drag coefficient is per unit time and
/// gravity is length per unit time squared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragModel {
    drag: f64,
    gravity: f64,
}

/// Errors that can occur when constructing a [`DragModel`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ModelError {
    #[error("drag coefficient must be finite and positive, got {0}")]
    Drag(f64),

    #[error("gravity must be finite and positive, got {0}")]
    Gravity(f64),
}

impl DragModel {
    /// Creates a validated drag model.
    ///
    /// # Errors
    ///
    /// Returns an error if either coefficient is non-positive or non-finite.
    pub fn new(drag: f64, gravity: f64) -> Result<Self, ModelError> {
        if !drag.is_finite() || drag <= 0.0 {
            return Err(ModelError::Drag(drag));
        }
        if !gravity.is_finite() || gravity <= 0.0 {
            return Err(ModelError::Gravity(gravity));
        }
        Ok(Self { drag, gravity })
    }

    /// Returns the drag coefficient `c`.
    #[must_use]
    pub fn drag(&self) -> f64 {
        self.drag
    }

    /// Returns the gravitational acceleration `g`.
    #[must_use]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Returns the terminal fall speed `g / c`.
    #[must_use]
    pub fn terminal_speed(&self) -> f64 {
        self.gravity / self.drag
    }

    /// Returns the decayed travel factor `(1 - e^(-c t)) / c`.
    ///
    /// Multiplying an initial velocity component by this factor gives the
    /// drag-only displacement along that axis after time `t`.
    #[must_use]
    pub fn travel(&self, t: f64) -> f64 {
        -(-self.drag * t).exp_m1() / self.drag
    }

    /// Returns the displacement from the launch point after time `t`.
    #[must_use]
    pub fn displacement(&self, velocity: [f64; 3], t: f64) -> [f64; 3] {
        let [vx, vy, vz] = velocity;
        let k = self.travel(t);
        [
            vx * k,
            (vy + self.terminal_speed()) * k - self.terminal_speed() * t,
            vz * k,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_non_positive_coefficients() {
        assert_eq!(DragModel::new(0.0, 9.81), Err(ModelError::Drag(0.0)));
        assert_eq!(DragModel::new(-0.2, 9.81), Err(ModelError::Drag(-0.2)));
        assert_eq!(DragModel::new(0.2, 0.0), Err(ModelError::Gravity(0.0)));
        assert!(matches!(
            DragModel::new(f64::NAN, 9.81),
            Err(ModelError::Drag(_))
        ));
        assert!(matches!(
            DragModel::new(0.2, f64::INFINITY),
            Err(ModelError::Gravity(_))
        ));
    }

    #[test]
    fn travel_starts_at_zero_and_saturates() {
        let model = DragModel::new(2.0, 32.8).unwrap();
        assert_relative_eq!(model.travel(0.0), 0.0);
        assert_relative_eq!(model.travel(100.0), 0.5);
    }

    #[test]
    fn travel_matches_exponential_form() {
        let model = DragModel::new(0.2, 32.7435).unwrap();
        let t: f64 = 3.7;
        let expected = (1.0 - (-0.2 * t).exp()) / 0.2;
        assert_relative_eq!(model.travel(t), expected, max_relative = 1e-12);
    }

    #[test]
    fn small_drag_approaches_ballistic_path() {
        let model = DragModel::new(1e-7, 9.81).unwrap();
        let t = 2.0;
        let [x, y, z] = model.displacement([3.0, 20.0, -1.0], t);

        assert_relative_eq!(x, 6.0, epsilon = 1e-5);
        assert_relative_eq!(y, 20.0 * t - 0.5 * 9.81 * t * t, epsilon = 1e-4);
        assert_relative_eq!(z, -2.0, epsilon = 1e-5);
    }

    #[test]
    fn horizontal_travel_is_bounded_by_drag() {
        let model = DragModel::new(0.5, 9.81).unwrap();
        let [x, _, _] = model.displacement([10.0, 0.0, 0.0], 1e3);
        assert_relative_eq!(x, 20.0, epsilon = 1e-9);
    }
}
