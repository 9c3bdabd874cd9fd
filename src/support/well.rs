//! Fluid volume in a conical-bottom 24-well plate well.
//!
//! The well is modeled as three concentric regions of fluid over a molded
//! bottom: a central cone-affected region, a flat region out to the well's
//! nominal radius, and a thin taper where the molding draft lets the free
//! surface climb the sidewall. Each region contributes a
//! surface-of-revolution integral `∫ 2π·r·h(r) dr` evaluated by
//! [`crate::support::quadrature`].
//!
//! Lengths are in millimetres; the returned volume is in microlitres
//! (1 mm³ = 1 µL).

use std::f64::consts::PI;

use crate::support::quadrature::integrate;

/// Nominal well diameter of a 24-well plate, mm.
pub const WELL_DIAMETER: f64 = 16.2;

/// Sidewall draft angle of the molded well, radians (`atan(0.3/17)`).
#[must_use]
pub fn draft_angle() -> f64 {
    (0.3_f64 / 17.0).atan()
}

/// Fluid volume in the well, µL.
///
/// `fill_radius` is the radius of the cone-affected region, `cone_angle` the
/// cone half-angle in radians, and `max_height` the fluid height over the
/// flat region. The three region integrals are summed as-is: callers passing
/// geometrically inconsistent values (e.g. a `fill_radius` beyond the
/// sidewall) get the signed result of the reversed-bound integrals rather
/// than an error.
#[must_use]
pub fn fill_volume(fill_radius: f64, cone_angle: f64, max_height: f64) -> f64 {
    let beta = draft_angle();
    let cone_height = (fill_radius / WELL_DIAMETER / 2.0) * (1.0 - cone_angle.tan());
    let outer_diameter = WELL_DIAMETER + max_height * beta.tan();
    let nominal_radius = WELL_DIAMETER / 2.0;

    let cone = integrate(
        |r| (cone_height + r * cone_angle.tan()) * 2.0 * PI * r,
        0.0,
        fill_radius,
    );
    let flat = integrate(|r| max_height * 2.0 * PI * r, fill_radius, nominal_radius);
    let taper = integrate(
        |r| (max_height - (r - nominal_radius) / beta.tan()) * 2.0 * PI * r,
        nominal_radius,
        outer_diameter / 2.0,
    );

    cone.value + flat.value + taper.value
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Antiderivative of `(h − (r − c)/t)·2π·r`, for closing the taper
    /// region in closed form.
    fn taper_primitive(r: f64, h: f64, c: f64, t: f64) -> f64 {
        2.0 * PI * ((h + c / t) * r.powi(2) / 2.0 - r.powi(3) / (3.0 * t))
    }

    #[test]
    fn flat_cone_matches_closed_form() {
        // With a zero cone angle the central region is a cylindrical slab of
        // height r_i/16.2/2 and each region closes analytically.
        let (fill_radius, max_height) = (5.0, 2.0);
        let beta_tan = draft_angle().tan();
        let nominal_radius = WELL_DIAMETER / 2.0;
        let outer_radius = (WELL_DIAMETER + max_height * beta_tan) / 2.0;

        let slab_height = fill_radius / WELL_DIAMETER / 2.0;
        let expected = slab_height * PI * fill_radius.powi(2)
            + max_height * PI * (nominal_radius.powi(2) - fill_radius.powi(2))
            + taper_primitive(outer_radius, max_height, nominal_radius, beta_tan)
            - taper_primitive(nominal_radius, max_height, nominal_radius, beta_tan);

        assert_relative_eq!(
            fill_volume(fill_radius, 0.0, max_height),
            expected,
            max_relative = 1e-6
        );
    }

    #[test]
    fn volume_grows_with_fluid_height() {
        let shallow = fill_volume(5.0, 0.1, 1.0);
        let deep = fill_volume(5.0, 0.1, 2.0);
        assert!(deep > shallow);
    }

    #[test]
    fn fill_radius_at_nominal_radius_drops_the_flat_region() {
        // The flat region collapses to a zero-width interval and the result
        // is just cone + taper.
        let nominal_radius = WELL_DIAMETER / 2.0;
        let volume = fill_volume(nominal_radius, 0.0, 2.0);
        assert!(volume.is_finite());

        let beta_tan = draft_angle().tan();
        let outer_radius = (WELL_DIAMETER + 2.0 * beta_tan) / 2.0;
        let slab_height = nominal_radius / WELL_DIAMETER / 2.0;
        let expected = slab_height * PI * nominal_radius.powi(2)
            + taper_primitive(outer_radius, 2.0, nominal_radius, beta_tan)
            - taper_primitive(nominal_radius, 2.0, nominal_radius, beta_tan);
        assert_relative_eq!(volume, expected, max_relative = 1e-6);
    }

    #[test]
    fn oversized_fill_radius_negates_the_flat_region() {
        // fill_radius past the nominal radius reverses the flat region's
        // bounds; the convention subtracts that area instead of failing.
        let volume = fill_volume(10.0, 0.0, 2.0);
        assert!(volume.is_finite());

        let nominal_radius = WELL_DIAMETER / 2.0;
        let reversed_flat = 2.0 * PI * (nominal_radius.powi(2) - 10.0_f64.powi(2));
        let slab_height = 10.0 / WELL_DIAMETER / 2.0;
        let beta_tan = draft_angle().tan();
        let outer_radius = (WELL_DIAMETER + 2.0 * beta_tan) / 2.0;
        let expected = slab_height * PI * 100.0
            + reversed_flat
            + taper_primitive(outer_radius, 2.0, nominal_radius, beta_tan)
            - taper_primitive(nominal_radius, 2.0, nominal_radius, beta_tan);
        assert_relative_eq!(volume, expected, max_relative = 1e-6);
    }
}
