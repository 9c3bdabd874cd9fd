//! Conversions between the two angular speed conventions used in this crate.
//!
//! Rotational equipment is specified in revolutions per minute, while every
//! shear and stability relation wants radians per second. Both directions go
//! through [`uom::si::f64::AngularVelocity`] so the scale factor (`π/30`)
//! lives in one place.

use uom::si::{
    angular_velocity::{radian_per_second, revolution_per_minute},
    f64::AngularVelocity,
};

/// Converts an angular speed in rad/s to revolutions per minute.
#[must_use]
pub fn revolutions_per_minute(omega: f64) -> f64 {
    AngularVelocity::new::<radian_per_second>(omega).get::<revolution_per_minute>()
}

/// Converts a spindle speed in revolutions per minute to rad/s.
#[must_use]
pub fn radians_per_second(speed: f64) -> f64 {
    AngularVelocity::new::<revolution_per_minute>(speed).get::<radian_per_second>()
}
