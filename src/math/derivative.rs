use super::Vector3;

/// Default differentiation step, in the time units of the sampled function.
pub const DEFAULT_STEP: f64 = 1e-3;

/// Central-difference derivative of a scalar function of time.
///
/// Second-order accurate: truncation error is O(step²) for smooth `f`.
#[must_use]
pub fn central_difference<F: Fn(f64) -> f64>(f: F, t: f64, step: f64) -> f64 {
    (f(t + step) - f(t - step)) / (2.0 * step)
}

/// Forward-difference derivative of a scalar function of time.
///
/// First-order accurate; for use where `f` is not defined before `t`.
#[must_use]
pub fn forward_difference<F: Fn(f64) -> f64>(f: F, t: f64, step: f64) -> f64 {
    (f(t + step) - f(t)) / step
}

/// Central-difference derivative of a vector-valued function of time.
#[must_use]
pub fn central_difference_vec<F: Fn(f64) -> Vector3>(f: F, t: f64, step: f64) -> Vector3 {
    (f(t + step) - f(t - step)) / (2.0 * step)
}

/// Forward-difference derivative of a vector-valued function of time.
#[must_use]
pub fn forward_difference_vec<F: Fn(f64) -> Vector3>(f: F, t: f64, step: f64) -> Vector3 {
    (f(t + step) - f(t)) / step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_is_exact_for_quadratics() {
        let d = central_difference(|t| t * t, 3.0, DEFAULT_STEP);
        assert!((d - 6.0).abs() < 1e-9, "d={d}");
    }

    #[test]
    fn central_matches_sine_derivative() {
        // Truncation error ~ step²/6 · |cos|.
        let d = central_difference(f64::sin, 1.2, DEFAULT_STEP);
        assert!((d - 1.2_f64.cos()).abs() < 1e-6, "d={d}");
    }

    #[test]
    fn forward_is_first_order() {
        // Error ~ step/2 · |f''|; visibly worse than central.
        let d = forward_difference(f64::sin, 1.2, DEFAULT_STEP);
        assert!((d - 1.2_f64.cos()).abs() < 1e-3, "d={d}");
        assert!((d - 1.2_f64.cos()).abs() > 1e-7, "d={d}");
    }

    #[test]
    fn vector_central_matches_circle_tangent() {
        let f = |t: f64| Vector3::new(t.cos(), 0.0, t.sin());
        let d = central_difference_vec(f, 0.7, DEFAULT_STEP);
        let expected = Vector3::new(-0.7_f64.sin(), 0.0, 0.7_f64.cos());
        assert!((d - expected).norm() < 1e-6, "d={d:?}");
    }

    #[test]
    fn vector_forward_matches_linear_motion() {
        let f = |t: f64| Vector3::new(2.0 * t, -t, 0.5 * t);
        let d = forward_difference_vec(f, 10.0, DEFAULT_STEP);
        let expected = Vector3::new(2.0, -1.0, 0.5);
        assert!((d - expected).norm() < 1e-9, "d={d:?}");
    }
}
