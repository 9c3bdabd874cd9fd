//! Conical-bottom well-plate models.
//!
//! [`ConicalWell`] maps a fill radius to the fluid volume held in one well
//! of a 24-well plate, as a thin [`twine_core::Model`] adapter over
//! [`crate::support::well`]. Unlike the annulus and disk models, this
//! geometry has fixed units — the plate's nominal dimensions are in
//! millimetres — so the interface is fully typed.

use std::convert::Infallible;

use twine_core::Model;
use uom::si::{
    angle::radian,
    f64::{Angle, Length, Volume},
    length::millimeter,
    volume::microliter,
};

use crate::support::well;

/// One well of a 24-well plate with a conical bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicalWell {
    cone_angle: Angle,
    max_fill_height: Length,
}

impl ConicalWell {
    /// Creates a well from its cone half-angle and the fluid height over
    /// the flat region.
    #[must_use]
    pub fn new(cone_angle: Angle, max_fill_height: Length) -> Self {
        Self {
            cone_angle,
            max_fill_height,
        }
    }
}

impl Model for ConicalWell {
    type Input = Length;
    type Output = Volume;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let volume = well::fill_volume(
            input.get::<millimeter>(),
            self.cone_angle.get::<radian>(),
            self.max_fill_height.get::<millimeter>(),
        );
        Ok(Volume::new::<microliter>(volume))
    }
}
