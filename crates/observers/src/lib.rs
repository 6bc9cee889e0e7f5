//! Reusable observers for plumb root finders.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver event exposing the needed values.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasEstimate`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`]: forwards every event to the [`log`] facade
//! - [`History`]: records the path of estimates and residuals
//! - [`ResidualStop`]: stops the solver once the residual is small enough
//!
//! [`Observer`]: plumb_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasEstimate`]: traits::HasEstimate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod logging;
mod residual_stop;

pub use history::History;
pub use logging::LogObserver;
pub use residual_stop::ResidualStop;
