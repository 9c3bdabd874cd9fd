//! Shear rates under a disk rotating over a flat plate.
//!
//! A disk spinning at `ω` a height `h` above a plate shears the film between
//! them at `ω·r/h`, growing linearly with radius. The stepped disk variant
//! splits the disk into two concentric zones with different clearances so
//! the outer zone can pull the shear rate back down.
//!
//! Radii and gap heights must share one length unit; speeds are in RPM and
//! shear rates in 1/s.

use crate::support::angular_speed;

/// Shear rate under the disk at a single radius, 1/s.
///
/// A zero gap height yields an infinite rate.
#[must_use]
pub fn shear_rate(speed: f64, radius: f64, gap: f64) -> f64 {
    angular_speed::radians_per_second(speed) * radius / gap
}

/// Shear rates at each radius in `radii`, in input order.
#[must_use]
pub fn shear_rates(speed: f64, radii: &[f64], gap: f64) -> Vec<f64> {
    radii.iter().map(|&r| shear_rate(speed, r, gap)).collect()
}

/// Radius where a stepped disk switches from the inner to the outer zone.
///
/// With `ratio = frac/(1 − frac)` splitting the zones' surface-area
/// contributions, the crossover sits at
/// `sqrt(4·ratio + max(r)²) / sqrt(ratio + 1)`, where `max(r)` is the
/// largest sampled radius. `area_fraction` must lie strictly inside
/// `(0, 1)` for the ratio to be finite; values at the endpoints give a
/// degenerate crossover. An empty `radii` slice has no largest radius and
/// propagates as NaN.
#[must_use]
pub fn crossover_radius(radii: &[f64], area_fraction: f64) -> f64 {
    let ratio = area_fraction / (1.0 - area_fraction);
    let r_max = radii.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (4.0 * ratio + r_max.powi(2)).sqrt() / (ratio + 1.0).sqrt()
}

/// Shear rates under a stepped disk, in input order.
///
/// Radii inside the crossover see the inner-zone clearance `inner_gap`;
/// radii at or beyond it see `outer_gap`. See [`crossover_radius`] for the
/// zone split and the contract on `area_fraction`.
#[must_use]
pub fn stepped_shear_rates(
    speed: f64,
    radii: &[f64],
    inner_gap: f64,
    outer_gap: f64,
    area_fraction: f64,
) -> Vec<f64> {
    let r_star = crossover_radius(radii, area_fraction);
    radii
        .iter()
        .map(|&r| {
            let gap = if r < r_star { inner_gap } else { outer_gap };
            shear_rate(speed, r, gap)
        })
        .collect()
}
