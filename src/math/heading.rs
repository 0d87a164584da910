use nalgebra::Quaternion;

use super::UnitQuaternion;

/// Builds the orientation quaternion for a pure heading rotation about the
/// vertical +Y axis.
///
/// Literal half-angle construction, `w = cos(h/2)`, `y = sin(h/2)`,
/// `x = z = 0`. The quaternion is unit-norm by construction, so no
/// renormalization is applied; the mapping is bit-reproducible for the
/// dynamics consumer.
#[must_use]
pub fn quaternion_from_heading(heading: f64) -> UnitQuaternion {
    let (half_sin, half_cos) = (0.5 * heading).sin_cos();
    UnitQuaternion::new_unchecked(Quaternion::new(half_cos, 0.0, half_sin, 0.0))
}

/// Extracts the heading (rotation about vertical +Y) from a quaternion.
///
/// `atan2(2(w·y + x·z), 1 − 2(y² + z²))`. Inverts
/// [`quaternion_from_heading`] exactly (mod 2π); for general quaternions the
/// roll/pitch extraction order is deliberately not committed to here.
#[must_use]
pub fn heading_from_quaternion(q: &UnitQuaternion) -> f64 {
    let sin_heading = 2.0 * (q.w * q.j + q.i * q.k);
    let cos_heading = 1.0 - 2.0 * (q.j * q.j + q.k * q.k);
    sin_heading.atan2(cos_heading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::angle::wrap_angle;
    use crate::math::Vector3;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-12;

    #[test]
    fn zero_heading_is_identity() {
        let q = quaternion_from_heading(0.0);
        assert!((q.w - 1.0).abs() < TOL);
        assert!(q.i.abs() < TOL);
        assert!(q.j.abs() < TOL);
        assert!(q.k.abs() < TOL);
    }

    #[test]
    fn components_match_half_angle_form() {
        let q = quaternion_from_heading(FRAC_PI_2);
        assert!((q.w - (PI / 4.0).cos()).abs() < TOL);
        assert!((q.j - (PI / 4.0).sin()).abs() < TOL);
        assert!(q.i.abs() < TOL);
        assert!(q.k.abs() < TOL);
    }

    #[test]
    fn round_trip_mod_two_pi() {
        for heading in [-PI, -FRAC_PI_2, 0.0, FRAC_PI_2, PI - 1e-6] {
            let extracted = heading_from_quaternion(&quaternion_from_heading(heading));
            let error = wrap_angle(extracted - heading);
            assert!(error.abs() < 1e-9, "heading={heading} extracted={extracted}");
        }
    }

    #[test]
    fn round_trip_beyond_principal_range() {
        // 5π/2 and π/2 are the same physical heading.
        let extracted = heading_from_quaternion(&quaternion_from_heading(2.5 * PI));
        assert!((extracted - FRAC_PI_2).abs() < 1e-9, "extracted={extracted}");
    }

    #[test]
    fn extraction_separates_heading_from_roll() {
        // q = q_roll ∘ q_heading keeps the heading term separable; the x·z
        // product in the numerator is what makes this exact.
        let heading = PI / 3.0;
        let roll = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), 0.4);
        let q = roll * quaternion_from_heading(heading);
        let extracted = heading_from_quaternion(&q);
        assert!((extracted - heading).abs() < 1e-9, "extracted={extracted}");
    }
}
