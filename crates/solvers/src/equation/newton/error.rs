use thiserror::Error;

use super::ConfigError;

/// Errors that can occur before a Newton, Halley, or secant solve starts.
///
/// Every variant is an invalid argument. Failing to converge is reported
/// through [`Status`](super::Status), never as an error.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("x1 and x0 must be different (both are {x})")]
    IdenticalStartingPoints { x: f64 },
}
