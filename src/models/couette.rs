//! Concentric cylinder flow models.
//!
//! [`CouetteShear`] maps a spindle speed to the laminar shear rate at a
//! fixed position in the annular gap; [`TaylorStability`] maps the same
//! input to the dimensionless Taylor number. Both are thin
//! [`twine_core::Model`] adapters over [`crate::support::couette`].

use std::{cmp::Ordering, convert::Infallible};

use thiserror::Error;
use twine_core::Model;
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Frequency, Ratio},
    frequency::hertz,
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, ConstraintError, ConstraintResult, StrictlyPositive, UnitInterval},
    couette,
};

/// The annular gap between two concentric cylinders.
///
/// Radii carry the caller's length unit. [`TaylorStability`] requires
/// metres, since its viscosity reference is in m²/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    inner_radius: f64,
    outer_radius: f64,
}

/// An error returned when [`Annulus::new`] is given invalid radii.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnnulusError {
    #[error("inner radius must be strictly positive")]
    InnerRadius(#[source] ConstraintError),
    #[error("outer radius must exceed the inner radius")]
    GapWidth,
}

impl Annulus {
    /// Creates an annulus from its inner and outer radii.
    ///
    /// # Errors
    ///
    /// Returns [`AnnulusError`] if the inner radius is not strictly positive
    /// or the outer radius does not exceed it.
    pub fn new(inner_radius: f64, outer_radius: f64) -> Result<Self, AnnulusError> {
        StrictlyPositive::new(inner_radius).map_err(AnnulusError::InnerRadius)?;
        match outer_radius.partial_cmp(&inner_radius) {
            Some(Ordering::Greater) => Ok(Self {
                inner_radius,
                outer_radius,
            }),
            _ => Err(AnnulusError::GapWidth),
        }
    }

    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }
}

/// A fractional radial position across the gap.
///
/// `0.0` is the inner wall and `1.0` the outer wall.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GapPosition(Constrained<f64, UnitInterval>);

impl GapPosition {
    /// Creates a gap position from a fraction in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the fraction lies outside the closed unit interval.
    pub fn new(fraction: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(fraction)?))
    }

    /// The position at the surface of the inner cylinder.
    #[must_use]
    pub fn inner_wall() -> Self {
        Self::new(0.0).expect("0.0 lies in the closed unit interval")
    }

    /// The position at the surface of the outer cylinder.
    #[must_use]
    pub fn outer_wall() -> Self {
        Self::new(1.0).expect("1.0 lies in the closed unit interval")
    }

    fn fraction(self) -> f64 {
        *self.0.as_ref()
    }
}

/// Laminar shear-rate model for an annulus at a fixed gap position.
///
/// Input is the spindle speed; output is the local shear rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CouetteShear {
    annulus: Annulus,
    position: GapPosition,
}

impl CouetteShear {
    #[must_use]
    pub fn new(annulus: Annulus, position: GapPosition) -> Self {
        Self { annulus, position }
    }
}

impl Model for CouetteShear {
    type Input = AngularVelocity;
    type Output = Frequency;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let rate = couette::shear_rate(
            self.annulus.inner_radius(),
            self.annulus.outer_radius(),
            input.get::<revolution_per_minute>(),
            self.position.fraction(),
        );
        Ok(Frequency::new::<hertz>(rate))
    }
}

/// Taylor number model for an annulus in metres.
///
/// Input is the spindle speed; output is the dimensionless stability number
/// predicting the onset of Taylor vortices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaylorStability {
    annulus: Annulus,
}

impl TaylorStability {
    #[must_use]
    pub fn new(annulus: Annulus) -> Self {
        Self { annulus }
    }
}

impl Model for TaylorStability {
    type Input = AngularVelocity;
    type Output = Ratio;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let ta = couette::taylor_number(
            self.annulus.inner_radius(),
            self.annulus.outer_radius(),
            input.get::<revolution_per_minute>(),
        );
        Ok(Ratio::new::<ratio>(ta))
    }
}
