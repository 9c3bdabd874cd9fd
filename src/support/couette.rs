//! Laminar Taylor-Couette flow relations for a concentric cylinder gap.
//!
//! All functions describe idealized laminar flow in the annulus between an
//! inner cylinder of radius `r_i` and an outer cylinder of radius `r_0`,
//! with one cylinder rotating. Radii may be in any length unit as long as
//! both use the same one; spindle speeds are in RPM and shear rates in 1/s.
//!
//! Positions inside the gap are addressed by a fraction: `0.0` is the inner
//! wall, `1.0` the outer wall, and intermediate values interpolate linearly
//! (see [`radius_at`]).

use crate::support::angular_speed;

/// Kinematic viscosity reference baked into the Taylor number, m²/s.
pub const REFERENCE_KINEMATIC_VISCOSITY: f64 = 4.566e-6;

/// Dynamic viscosity of the working fluid at 37 °C, Pa·s.
///
/// Not referenced by any relation in this module; provided for callers
/// deriving stresses from the shear rates computed here.
pub const VISCOSITY_37C: f64 = 0.0035;

/// Multiplicative factor taking 37 °C fluid properties to 22 °C.
///
/// Like [`VISCOSITY_37C`], unused by the relations themselves.
pub const SHEAR_FACTOR_37_TO_22: f64 = 1.27;

/// Submerged height of the cylinder pair assumed by [`wetted_area`], m.
pub const WETTED_HEIGHT: f64 = 0.015;

/// Radius at a fractional position across the gap.
///
/// `fraction = 0.0` returns the inner radius, `1.0` the outer radius.
#[must_use]
pub fn radius_at(inner_radius: f64, outer_radius: f64, fraction: f64) -> f64 {
    inner_radius + fraction * (outer_radius - inner_radius)
}

/// Shear rate at a fractional gap position, 1/s.
///
/// `speed` is the spindle speed in RPM. The closed form is
/// `2·r_0²·r_i²·ω / ((r_0² − r_i²)·r²)` with `ω` in rad/s and `r` the radius
/// selected by `fraction`; pass `fraction = 1.0` for the outer-wall value.
///
/// Coincident radii make the denominator vanish and the result infinite.
#[must_use]
pub fn shear_rate(inner_radius: f64, outer_radius: f64, speed: f64, fraction: f64) -> f64 {
    let omega = angular_speed::radians_per_second(speed);
    let r = radius_at(inner_radius, outer_radius, fraction);
    2.0 * outer_radius.powi(2) * inner_radius.powi(2) * omega
        / ((outer_radius.powi(2) - inner_radius.powi(2)) * r.powi(2))
}

/// Spindle speed (RPM) that produces `rate` at a fractional gap position.
///
/// Algebraic inverse of [`shear_rate`]:
/// `ω = rate·(r_0² − r_i²)·r² / (2·r_0²·r_i²)`, converted to RPM.
#[must_use]
pub fn speed_for_shear_rate(
    inner_radius: f64,
    outer_radius: f64,
    rate: f64,
    fraction: f64,
) -> f64 {
    let r = radius_at(inner_radius, outer_radius, fraction);
    let omega = rate * (outer_radius.powi(2) - inner_radius.powi(2)) * r.powi(2)
        / (2.0 * outer_radius.powi(2) * inner_radius.powi(2));
    angular_speed::revolutions_per_minute(omega)
}

/// Taylor number of the flow, dimensionless.
///
/// `ω²·r_i·(r_0 − r_i)³ / ν²` with `ν` fixed at
/// [`REFERENCE_KINEMATIC_VISCOSITY`]. Radii must be in metres for the
/// viscosity reference to apply. Predicts the onset of Taylor vortices;
/// scales with the square of the spindle speed.
#[must_use]
pub fn taylor_number(inner_radius: f64, outer_radius: f64, speed: f64) -> f64 {
    let omega = angular_speed::radians_per_second(speed);
    omega.powi(2) * inner_radius * (outer_radius - inner_radius).powi(3)
        / REFERENCE_KINEMATIC_VISCOSITY.powi(2)
}

/// Wetted surface area of the cylinder pair at [`WETTED_HEIGHT`] submersion.
///
/// A deliberate slight overestimate:
/// `0.01·(2H(r_i + r_0) + (r_0² + r_i²)/(H·(r_0² − r_i²)))`.
#[must_use]
pub fn wetted_area(inner_radius: f64, outer_radius: f64) -> f64 {
    let h = WETTED_HEIGHT;
    0.01 * (2.0 * h * (inner_radius + outer_radius)
        + (outer_radius.powi(2) + inner_radius.powi(2))
            / (h * (outer_radius.powi(2) - inner_radius.powi(2))))
}

/// Reference wetted area of a plain tube, for comparison with [`wetted_area`].
#[must_use]
pub fn tube_area(radius: f64) -> f64 {
    0.01 * 2.0 / radius
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    #[test]
    fn shear_rate_matches_reference_value() {
        // r_i = 1, r_0 = 2, 60 RPM → ω = 2π rad/s at the outer wall:
        // 2·4·1·2π / (3·4) = 4π/3.
        let rate = shear_rate(1.0, 2.0, 60.0, 1.0);
        assert_relative_eq!(rate, 4.18879, max_relative = 1e-5);
        assert_relative_eq!(rate, 4.0 * PI / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn fraction_selects_the_wall() {
        let (r_i, r_0, speed): (f64, f64, f64) = (0.012, 0.016, 90.0);
        let omega = angular_speed::radians_per_second(speed);
        let prefactor =
            2.0 * r_0.powi(2) * r_i.powi(2) * omega / (r_0.powi(2) - r_i.powi(2));

        assert_relative_eq!(
            shear_rate(r_i, r_0, speed, 0.0),
            prefactor / r_i.powi(2),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            shear_rate(r_i, r_0, speed, 1.0),
            prefactor / r_0.powi(2),
            max_relative = 1e-12
        );
    }

    #[test]
    fn speed_and_shear_rate_invert_each_other() {
        let (r_i, r_0) = (1.0, 2.5);
        for fraction in [0.0, 0.5, 1.0] {
            let rate = shear_rate(r_i, r_0, 42.0, fraction);
            assert_relative_eq!(
                speed_for_shear_rate(r_i, r_0, rate, fraction),
                42.0,
                max_relative = 1e-12
            );

            let speed = speed_for_shear_rate(r_i, r_0, 150.0, fraction);
            assert_relative_eq!(
                shear_rate(r_i, r_0, speed, fraction),
                150.0,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn taylor_number_increases_with_speed() {
        let ta: Vec<f64> = [30.0, 60.0, 120.0]
            .iter()
            .map(|&w| taylor_number(0.012, 0.016, w))
            .collect();
        assert!(ta[0] < ta[1] && ta[1] < ta[2]);

        // Quadratic in speed: doubling the speed quadruples Ta.
        assert_relative_eq!(ta[1] / ta[0], 4.0, max_relative = 1e-12);
    }

    #[test]
    fn tube_area_decreases_with_radius() {
        assert!(tube_area(0.5) > tube_area(1.0));
        assert!(tube_area(1.0) > tube_area(2.0));
    }

    #[test]
    fn wetted_area_exceeds_bare_cylinder_walls() {
        let (r_i, r_0) = (1.0, 1.5);
        assert!(wetted_area(r_i, r_0) > 0.01 * 2.0 * WETTED_HEIGHT * (r_i + r_0));
    }

    #[test]
    fn coincident_radii_yield_infinite_shear() {
        // The gap term vanishes; the result saturates rather than panics.
        assert!(shear_rate(1.0, 1.0, 60.0, 1.0).is_infinite());
    }
}
