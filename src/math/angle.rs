use std::f64::consts::{PI, TAU};

/// Wraps an angle into `(-π, π]`.
///
/// Correction is applied by repeated ±2π steps rather than a single modulo,
/// which stays exact for angles accumulated far outside the principal range
/// over a long simulation.
#[must_use]
pub fn wrap_angle(angle: f64) -> f64 {
    let mut a = angle;
    while a > PI {
        a -= TAU;
    }
    while a <= -PI {
        a += TAU;
    }
    a
}

/// Wraps an angular rate into `(-π/dt, π/dt]`.
///
/// An angle that is itself wrapped produces a spurious ±2π/dt jump when
/// differenced across the ±π seam; wrapping the rate by 2π/dt steps recovers
/// the physical value. Non-positive `dt` leaves the rate unchanged.
#[must_use]
pub fn wrap_angular_rate(rate: f64, dt: f64) -> f64 {
    if dt <= 0.0 {
        return rate;
    }
    let limit = PI / dt;
    let step = TAU / dt;
    let mut r = rate;
    while r > limit {
        r -= step;
    }
    while r <= -limit {
        r += step;
    }
    r
}

/// Returns the shortest signed angular difference `a − b`, in `(-π, π]`.
#[must_use]
pub fn angle_difference(a: f64, b: f64) -> f64 {
    wrap_angle(a - b)
}

/// Interpolates from `a` to `b` through the shorter angular direction.
///
/// `t = 0` yields `a` and `t = 1` yields `b`, both wrapped into `(-π, π]`.
#[must_use]
pub fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    wrap_angle(a + angle_difference(b, a) * t)
}
