//! Rotating disk shear models.
//!
//! [`UniformDisk`] computes the shear rate profile under a disk with a
//! single clearance; [`SteppedDisk`] under a disk with two concentric zones
//! of differing clearance. Both are thin [`twine_core::Model`] adapters over
//! [`crate::support::disk`].

use std::convert::Infallible;

use twine_core::Model;
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Frequency},
    frequency::hertz,
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive, UnitIntervalOpen},
    disk,
};

/// Input to the disk shear models: a spindle speed and the radii to sample.
///
/// Radii and the disk clearances share one length unit; the sampled shear
/// rates come back in the same order as the radii.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskShearInput {
    pub speed: AngularVelocity,
    pub radii: Vec<f64>,
}

/// A disk spinning at a single clearance above the plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformDisk {
    gap: Constrained<f64, StrictlyPositive>,
}

impl UniformDisk {
    /// Creates a uniform disk from its clearance above the plate.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the clearance is not strictly positive.
    pub fn new(gap: f64) -> ConstraintResult<Self> {
        Ok(Self {
            gap: StrictlyPositive::new(gap)?,
        })
    }
}

impl Model for UniformDisk {
    type Input = DiskShearInput;
    type Output = Vec<Frequency>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let speed = input.speed.get::<revolution_per_minute>();
        let rates = disk::shear_rates(speed, &input.radii, *self.gap.as_ref());
        Ok(rates.into_iter().map(Frequency::new::<hertz>).collect())
    }
}

/// A disk with two concentric zones of differing clearance.
///
/// `area_fraction` splits the zones' surface-area contributions and sets the
/// crossover radius together with the largest sampled radius; see
/// [`disk::crossover_radius`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteppedDisk {
    inner_gap: Constrained<f64, StrictlyPositive>,
    outer_gap: Constrained<f64, StrictlyPositive>,
    area_fraction: Constrained<f64, UnitIntervalOpen>,
}

impl SteppedDisk {
    /// Creates a stepped disk from its two clearances and the surface-area
    /// fraction of the inner zone.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either clearance is not strictly positive, or if
    /// `area_fraction` is not strictly inside `(0, 1)`.
    pub fn new(inner_gap: f64, outer_gap: f64, area_fraction: f64) -> ConstraintResult<Self> {
        Ok(Self {
            inner_gap: StrictlyPositive::new(inner_gap)?,
            outer_gap: StrictlyPositive::new(outer_gap)?,
            area_fraction: UnitIntervalOpen::new(area_fraction)?,
        })
    }
}

impl Model for SteppedDisk {
    type Input = DiskShearInput;
    type Output = Vec<Frequency>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let speed = input.speed.get::<revolution_per_minute>();
        let rates = disk::stepped_shear_rates(
            speed,
            &input.radii,
            *self.inner_gap.as_ref(),
            *self.outer_gap.as_ref(),
            *self.area_fraction.as_ref(),
        );
        Ok(rates.into_iter().map(Frequency::new::<hertz>).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn uniform_disk_agrees_with_support_core() -> ConstraintResult<()> {
        let model = UniformDisk::new(0.1)?;
        let input = DiskShearInput {
            speed: AngularVelocity::new::<revolution_per_minute>(60.0),
            radii: vec![1.0, 2.0, 3.0],
        };

        let output = model.call(&input).expect("model is infallible");
        let expected = disk::shear_rates(60.0, &input.radii, 0.1);

        assert_eq!(output.len(), expected.len());
        for (rate, reference) in output.iter().zip(&expected) {
            assert_relative_eq!(rate.get::<hertz>(), *reference, max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn stepped_disk_agrees_with_support_core() -> ConstraintResult<()> {
        let model = SteppedDisk::new(0.1, 0.2, 0.5)?;
        let input = DiskShearInput {
            speed: AngularVelocity::new::<revolution_per_minute>(60.0),
            radii: vec![1.0, 2.0, 3.0],
        };

        let output = model.call(&input).expect("model is infallible");
        let expected = disk::stepped_shear_rates(60.0, &input.radii, 0.1, 0.2, 0.5);

        for (rate, reference) in output.iter().zip(&expected) {
            assert_relative_eq!(rate.get::<hertz>(), *reference, max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn stepped_disk_rejects_out_of_contract_parameters() {
        assert!(matches!(
            SteppedDisk::new(0.0, 0.2, 0.5),
            Err(ConstraintError::Zero)
        ));
        assert!(matches!(
            SteppedDisk::new(0.1, 0.2, 0.0),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            SteppedDisk::new(0.1, 0.2, 1.0),
            Err(ConstraintError::AboveMaximum)
        ));
    }
}
