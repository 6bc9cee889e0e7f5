//! Impact time and trajectory sampling for projectiles under linear drag.
//!
//! A point mass launched with velocity `v` under gravity `g` and drag
//! proportional to velocity (coefficient `c`) follows a closed-form path.
//! With `k(t) = (1 - e^(-c t)) / c`:
//!
//! ```text
//! x(t) = vx k(t)
//! y(t) = (vy + g/c) k(t) - g t / c
//! z(t) = vz k(t)
//! ```
//!
//! The time at which `y0 + y(t)` reaches zero has no closed form, so
//! [`Flight`] refines the frictionless estimate with Halley's method from
//! [`plumb_solvers::equation::newton`]. [`sample`] then evaluates positions
//! over the flight, and [`Predictor`] wraps both with the uncertainty band
//! drawn around a launch whose speed is only known approximately.
//!
//! # Example
//!
//! ```rust
//! use plumb_trajectory::impact_time;
//!
//! let t = impact_time(100.0, 10.0, 2.0, 32.8).expect("valid parameters");
//! assert!(t > 4.0 && t < 4.3);
//! ```

mod error;
mod flight;
mod model;
mod predictor;
mod sampling;

pub mod units;

pub use error::Error;
pub use flight::{Flight, impact_time};
pub use model::{DragModel, ModelError};
pub use predictor::{Band, Launch, Prediction, Predictor, PredictorConfig, PredictorError};
pub use sampling::{sample, sample_times};
