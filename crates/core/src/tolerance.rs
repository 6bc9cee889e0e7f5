use thiserror::Error;

/// Combined absolute and relative convergence tolerance.
///
/// Two successive estimates `a` and `b` agree when
/// `|a - b| <= abs + rel * |b|`, where `b` is the earlier estimate.
/// Solvers compare estimates only through [`Tolerance::is_within`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    abs: f64,
    rel: f64,
}

/// Errors that can occur when constructing a [`Tolerance`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ToleranceError {
    #[error("absolute tolerance must be finite and positive, got {0}")]
    Abs(f64),

    #[error("relative tolerance must be finite and non-negative, got {0}")]
    Rel(f64),
}

impl Tolerance {
    /// Default absolute tolerance, roughly the square root of `f64::EPSILON`.
    pub const DEFAULT_ABS: f64 = 1.48e-8;

    /// Creates a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `abs` is not strictly positive and finite,
    /// or if `rel` is negative or non-finite.
    pub fn new(abs: f64, rel: f64) -> Result<Self, ToleranceError> {
        if !abs.is_finite() || abs <= 0.0 {
            return Err(ToleranceError::Abs(abs));
        }
        if !rel.is_finite() || rel < 0.0 {
            return Err(ToleranceError::Rel(rel));
        }
        Ok(Self { abs, rel })
    }

    /// Returns the absolute tolerance.
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.abs
    }

    /// Returns the relative tolerance.
    #[must_use]
    pub fn rel(&self) -> f64 {
        self.rel
    }

    /// Returns true if `a` is within tolerance of the reference value `b`.
    #[must_use]
    pub fn is_within(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.abs + self.rel * b.abs()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs: Self::DEFAULT_ABS,
            rel: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_is_absolute_only() {
        let tol = Tolerance::default();
        assert_relative_eq!(tol.abs(), 1.48e-8);
        assert_relative_eq!(tol.rel(), 0.0);
    }

    #[test]
    fn rejects_non_positive_abs() {
        assert!(matches!(Tolerance::new(0.0, 0.0), Err(ToleranceError::Abs(_))));
        assert!(matches!(Tolerance::new(-1e-6, 0.0), Err(ToleranceError::Abs(_))));
        assert!(matches!(
            Tolerance::new(f64::NAN, 0.0),
            Err(ToleranceError::Abs(_))
        ));
    }

    #[test]
    fn abs_error_message_covers_non_finite_values() {
        let err = Tolerance::new(f64::INFINITY, 0.0).unwrap_err();
        assert_eq!(err, ToleranceError::Abs(f64::INFINITY));
        assert_eq!(
            err.to_string(),
            "absolute tolerance must be finite and positive, got inf"
        );
    }

    #[test]
    fn rejects_bad_rel() {
        assert!(matches!(Tolerance::new(1e-8, -0.1), Err(ToleranceError::Rel(_))));
        assert!(matches!(
            Tolerance::new(1e-8, f64::INFINITY),
            Err(ToleranceError::Rel(_))
        ));
    }

    #[test]
    fn absolute_band() {
        let tol = Tolerance::new(0.1, 0.0).unwrap();
        assert!(tol.is_within(1.05, 1.0));
        assert!(tol.is_within(0.9, 1.0));
        assert!(!tol.is_within(1.2, 1.0));
    }

    #[test]
    fn relative_band_scales_with_reference() {
        let tol = Tolerance::new(1e-12, 0.01).unwrap();
        assert!(tol.is_within(1005.0, 1000.0));
        assert!(!tol.is_within(1.5, 1.0));
    }

    #[test]
    fn reference_is_the_second_argument() {
        // abs + rel * |b| differs depending on which value is the reference.
        let tol = Tolerance::new(1e-12, 0.5).unwrap();
        assert!(tol.is_within(1.0, 3.0));
        assert!(!tol.is_within(3.0, 1.0));
    }
}
