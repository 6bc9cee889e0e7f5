use plumb_solvers::equation::newton;
use thiserror::Error;

use crate::{ModelError, PredictorError};

/// Errors that can occur when computing a trajectory.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid drag model: {0}")]
    Model(#[from] ModelError),

    #[error("invalid predictor config: {0}")]
    Predictor(#[from] PredictorError),

    #[error("impact time solve failed: {0}")]
    Solver(#[from] newton::Error),
}
