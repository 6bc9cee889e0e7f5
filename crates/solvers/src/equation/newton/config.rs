use plumb_core::{Tolerance, ToleranceError};
use thiserror::Error;

/// Configuration for the Newton, Halley, and secant solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: Tolerance,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("max_iters must be greater than 0")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            tolerance: Tolerance::default(),
        }
    }
}

impl Config {
    /// Creates a new config with a validated iteration limit and tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `abs_tol` is not strictly positive and finite,
    /// if `rel_tol` is negative or non-finite, or if `max_iters` is zero.
    pub fn new(max_iters: usize, abs_tol: f64, rel_tol: f64) -> Result<Self, ConfigError> {
        let tolerance = Tolerance::new(abs_tol, rel_tol)?;
        Self::with_tolerance(max_iters, tolerance)
    }

    /// Creates a new config from an already validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn with_tolerance(max_iters: usize, tolerance: Tolerance) -> Result<Self, ConfigError> {
        if max_iters < 1 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of update steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }
}
