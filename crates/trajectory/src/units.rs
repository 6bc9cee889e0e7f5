//! Unit-aware entry points.
//!
//! Quantities are converted to SI base units before solving, so callers can
//! work in whatever units they have on hand.
//!
//! ```rust
//! use plumb_trajectory::units::impact_time;
//! use uom::si::{
//!     acceleration::foot_per_second_squared,
//!     f64::{Acceleration, Frequency, Length, Velocity},
//!     frequency::hertz,
//!     length::foot,
//!     time::second,
//!     velocity::foot_per_second,
//! };
//!
//! let t = impact_time(
//!     Velocity::new::<foot_per_second>(100.0),
//!     Length::new::<foot>(10.0),
//!     Frequency::new::<hertz>(2.0),
//!     Acceleration::new::<foot_per_second_squared>(32.8),
//! )
//! .expect("valid parameters");
//!
//! assert!(t.get::<second>() > 4.0);
//! ```

use uom::si::{
    f64::{Acceleration, Frequency, Length, Time, Velocity},
    time::second,
};

use crate::Error;

/// Time for a projectile to fall to the target plane under drag.
///
/// See [`crate::impact_time`]. The drag coefficient is a rate, so it is
/// given as a [`Frequency`].
///
/// # Errors
///
/// Returns [`Error::Model`] if `drag` or `gravity` is not strictly positive.
pub fn impact_time(
    vertical_velocity: Velocity,
    height: Length,
    drag: Frequency,
    gravity: Acceleration,
) -> Result<Time, Error> {
    let t = crate::impact_time(
        vertical_velocity.value,
        height.value,
        drag.value,
        gravity.value,
    )?;
    Ok(Time::new::<second>(t))
}
