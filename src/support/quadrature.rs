//! Adaptive one-dimensional quadrature.
//!
//! Adaptive Simpson integration with Richardson extrapolation: each interval
//! is accepted once halving it changes the Simpson estimate by less than its
//! share of the error budget, and the final correction term is folded into
//! the result. Smooth integrands of the kind this crate integrates (low-order
//! polynomials in `r`) converge in a handful of subdivisions.
//!
//! Conventions match the usual definite-integral rules: a zero-width
//! interval integrates to exactly zero, and swapping the bounds negates the
//! result (`∫ₐᵇ = −∫ᵇₐ`).

/// Relative error target used by [`integrate`].
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-8;

/// Interval-halving limit; past this an interval is accepted as-is.
const MAX_DEPTH: u32 = 48;

/// A definite integral estimate with its error bound.
///
/// The bound accumulates each accepted interval's extrapolation residual;
/// callers needing only the estimate read [`value`](Self::value).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integral {
    pub value: f64,
    pub error_bound: f64,
}

/// Integrates `integrand` over `[lower, upper]` at the default tolerance.
pub fn integrate<F>(integrand: F, lower: f64, upper: f64) -> Integral
where
    F: Fn(f64) -> f64,
{
    integrate_with_tolerance(integrand, lower, upper, DEFAULT_RELATIVE_TOLERANCE)
}

/// Integrates `integrand` over `[lower, upper]` at a caller-chosen relative
/// tolerance.
///
/// The tolerance is relative to the initial whole-interval estimate, with an
/// absolute floor so near-zero integrals terminate.
pub fn integrate_with_tolerance<F>(
    integrand: F,
    lower: f64,
    upper: f64,
    relative_tolerance: f64,
) -> Integral
where
    F: Fn(f64) -> f64,
{
    if lower == upper {
        return Integral {
            value: 0.0,
            error_bound: 0.0,
        };
    }
    if lower > upper {
        let flipped = integrate_with_tolerance(integrand, upper, lower, relative_tolerance);
        return Integral {
            value: -flipped.value,
            error_bound: flipped.error_bound,
        };
    }

    let midpoint = 0.5 * (lower + upper);
    let f_lower = integrand(lower);
    let f_mid = integrand(midpoint);
    let f_upper = integrand(upper);
    let whole = simpson(lower, upper, f_lower, f_mid, f_upper);
    let budget = relative_tolerance * whole.abs().max(1.0);

    let (value, error_bound) = refine(
        &integrand, lower, upper, f_lower, f_mid, f_upper, whole, budget, MAX_DEPTH,
    );
    Integral { value, error_bound }
}

/// Simpson's rule over `[a, b]` from samples at the ends and midpoint.
fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

/// Recursively halves `[a, b]` until the budget is met, returning the
/// extrapolated estimate and the accumulated error bound.
#[allow(clippy::too_many_arguments)] // samples carried down to avoid re-evaluation
fn refine<F>(
    integrand: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    budget: f64,
    depth: u32,
) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    let m = 0.5 * (a + b);
    let left_mid = 0.5 * (a + m);
    let right_mid = 0.5 * (m + b);
    let f_left_mid = integrand(left_mid);
    let f_right_mid = integrand(right_mid);

    let left = simpson(a, m, fa, f_left_mid, fm);
    let right = simpson(m, b, fm, f_right_mid, fb);
    let delta = left + right - whole;

    // |delta|/15 bounds the halved estimate's error for smooth integrands.
    if depth == 0 || delta.abs() <= 15.0 * budget {
        return (left + right + delta / 15.0, delta.abs() / 15.0);
    }

    let (left_value, left_error) = refine(
        integrand, a, m, fa, f_left_mid, fm, left, 0.5 * budget, depth - 1,
    );
    let (right_value, right_error) = refine(
        integrand, m, b, fm, f_right_mid, fb, right, 0.5 * budget, depth - 1,
    );
    (left_value + right_value, left_error + right_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    #[test]
    fn cubics_are_exact() {
        // Simpson's rule integrates cubics exactly; no refinement needed.
        let result = integrate(|x| x.powi(3), 0.0, 2.0);
        assert_relative_eq!(result.value, 4.0, max_relative = 1e-14);
    }

    #[test]
    fn smooth_integrand_meets_tolerance() {
        let result = integrate(f64::sin, 0.0, PI);
        assert_relative_eq!(result.value, 2.0, max_relative = 1e-9);
        assert!(result.error_bound < 1e-6);
    }

    #[test]
    fn quartic_requires_refinement() {
        let result = integrate(|x| x.powi(4), 0.0, 1.0);
        assert_relative_eq!(result.value, 0.2, max_relative = 1e-9);
    }

    #[test]
    fn surface_of_revolution_element() {
        // ∫₀ᴿ 2π·r·h dr = π·R²·h, the cylindrical slab the well model
        // degenerates to.
        let (r, h) = (8.1, 2.0);
        let result = integrate(|x| 2.0 * PI * x * h, 0.0, r);
        assert_relative_eq!(result.value, PI * r * r * h, max_relative = 1e-12);
    }

    #[test]
    fn reversed_bounds_negate() {
        let forward = integrate(|x| x.powi(2), 0.0, 1.0);
        let backward = integrate(|x| x.powi(2), 1.0, 0.0);
        assert_relative_eq!(backward.value, -forward.value, max_relative = 1e-14);
    }

    #[test]
    fn zero_width_interval_is_zero() {
        let result = integrate(|x| x.exp(), 3.0, 3.0);
        assert_eq!(result.value, 0.0);
        assert_eq!(result.error_bound, 0.0);
    }
}
