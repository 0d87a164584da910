use crate::math::DEGENERACY_EPS;

/// Floor applied to boundary speeds. A zero boundary speed would make the
/// traversal time `T = 2L/(v0 + v1)` unbounded, so an exact stop cannot be
/// requested; speeds at or below zero are silently raised to this value.
pub const MIN_SPEED: f64 = 0.1;

/// Symmetric jerk-limited S-curve between two boundary speeds over a fixed
/// path length.
///
/// The profile is split at `T/2`: constant jerk `+j` over the first half and
/// `−j` over the second. Acceleration is continuous, zero at both ends, and
/// the boundary speeds are matched exactly, which is what lets a composer
/// chain segments without velocity discontinuities.
///
/// ```text
/// T = 2L / (v0 + v1)              j = 4(v1 − v0) / T²
/// time ≤ T/2:   v = v0 + (j/2)·time²          a = j·time
/// time > T/2:   v = v1 − (j/2)·(T − time)²    a = j·(T − time)
/// ```
///
/// Distance is the exact integral of speed: continuous at the midpoint and
/// monotonically non-decreasing. A length below [`DEGENERACY_EPS`] collapses
/// to a degenerate profile with zero duration whose kinematic queries all
/// return zero.
#[derive(Debug, Clone, Copy)]
pub struct SpeedProfile {
    start_speed: f64,
    end_speed: f64,
    length: f64,
    duration: f64,
    jerk: f64,
}

impl SpeedProfile {
    /// Builds a profile from boundary speeds and a path length.
    ///
    /// Never fails: speeds are floored to [`MIN_SPEED`] and sub-threshold
    /// lengths produce the degenerate profile.
    #[must_use]
    pub fn new(start_speed: f64, end_speed: f64, length: f64) -> Self {
        let v0 = start_speed.max(MIN_SPEED);
        let v1 = end_speed.max(MIN_SPEED);

        if length < DEGENERACY_EPS {
            return Self {
                start_speed: v0,
                end_speed: v1,
                length: 0.0,
                duration: 0.0,
                jerk: 0.0,
            };
        }

        let duration = 2.0 * length / (v0 + v1);
        let jerk = 4.0 * (v1 - v0) / (duration * duration);

        Self {
            start_speed: v0,
            end_speed: v1,
            length,
            duration,
            jerk,
        }
    }

    /// Boundary speed at `time = 0`, after flooring.
    #[must_use]
    pub fn start_speed(&self) -> f64 {
        self.start_speed
    }

    /// Boundary speed at `time = T`, after flooring.
    #[must_use]
    pub fn end_speed(&self) -> f64 {
        self.end_speed
    }

    /// Path length covered by the full profile. Zero when degenerate.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Total traversal time `T`. Zero when degenerate.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Signed jerk magnitude of the first half (the second half uses `−j`).
    #[must_use]
    pub fn jerk(&self) -> f64 {
        self.jerk
    }

    /// Whether the profile collapsed to zero length.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.duration <= 0.0
    }

    /// Instantaneous speed after `time` elapsed seconds, clamped to `[0, T]`.
    #[must_use]
    pub fn speed_at(&self, time: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let time = time.clamp(0.0, self.duration);
        let half = 0.5 * self.duration;
        if time <= half {
            self.start_speed + 0.5 * self.jerk * time * time
        } else {
            let dt_end = self.duration - time;
            self.end_speed - 0.5 * self.jerk * dt_end * dt_end
        }
    }

    /// Tangential acceleration after `time` elapsed seconds.
    #[must_use]
    pub fn accel_at(&self, time: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let time = time.clamp(0.0, self.duration);
        let half = 0.5 * self.duration;
        if time <= half {
            self.jerk * time
        } else {
            self.jerk * (self.duration - time)
        }
    }

    /// Distance covered after `time` elapsed seconds.
    #[must_use]
    pub fn distance_at(&self, time: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let time = time.clamp(0.0, self.duration);
        let half = 0.5 * self.duration;
        if time <= half {
            self.start_speed * time + self.jerk * time.powi(3) / 6.0
        } else {
            let dt_end = self.duration - time;
            let at_half = self.start_speed * half + self.jerk * half.powi(3) / 6.0;
            at_half
                + self.end_speed * (time - half)
                + self.jerk * (dt_end.powi(3) - half.powi(3)) / 6.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn constant_speed_profile() {
        // v0 = v1 = 1 over L = 10: T = 10, zero jerk, uniform motion.
        let p = SpeedProfile::new(1.0, 1.0, 10.0);
        assert!((p.duration() - 10.0).abs() < TOL);
        assert!(p.jerk().abs() < TOL);
        assert!((p.speed_at(5.0) - 1.0).abs() < TOL);
        assert!((p.distance_at(5.0) - 5.0).abs() < TOL);
        assert!(p.accel_at(5.0).abs() < TOL);
    }

    #[test]
    fn boundary_speeds_match_exactly() {
        let p = SpeedProfile::new(1.0, 3.0, 10.0);
        assert!((p.duration() - 5.0).abs() < TOL);
        assert!((p.speed_at(0.0) - 1.0).abs() < TOL);
        assert!((p.speed_at(p.duration()) - 3.0).abs() < TOL);
        // Midpoint speed is the average of the boundary speeds.
        assert!((p.speed_at(2.5) - 2.0).abs() < TOL);
    }

    #[test]
    fn acceleration_is_zero_at_ends_and_peaks_at_midpoint() {
        let p = SpeedProfile::new(1.0, 3.0, 10.0);
        // j = 4·(3−1)/25 = 0.32, peak accel = j·T/2 = 0.8.
        assert!((p.jerk() - 0.32).abs() < TOL);
        assert!(p.accel_at(0.0).abs() < TOL);
        assert!(p.accel_at(p.duration()).abs() < TOL);
        assert!((p.accel_at(2.5) - 0.8).abs() < TOL);
    }

    #[test]
    fn distance_continuous_at_midpoint() {
        let p = SpeedProfile::new(2.0, 0.5, 7.0);
        let half = 0.5 * p.duration();
        let before = p.distance_at(half - 1e-9);
        let after = p.distance_at(half + 1e-9);
        assert!((after - before).abs() < 1e-7, "before={before} after={after}");
    }

    #[test]
    fn full_distance_equals_length() {
        let p = SpeedProfile::new(1.0, 4.0, 12.5);
        assert!((p.distance_at(p.duration()) - 12.5).abs() < TOL);
    }

    #[test]
    fn distance_is_monotonic() {
        let p = SpeedProfile::new(3.0, 0.2, 9.0);
        let mut previous = 0.0;
        for i in 0..=200 {
            let time = p.duration() * f64::from(i) / 200.0;
            let d = p.distance_at(time);
            assert!(d >= previous - 1e-12, "backtracked at time={time}");
            previous = d;
        }
    }

    #[test]
    fn speeds_are_floored() {
        let p = SpeedProfile::new(0.0, -5.0, 10.0);
        assert!((p.start_speed() - MIN_SPEED).abs() < TOL);
        assert!((p.end_speed() - MIN_SPEED).abs() < TOL);
        // T = 2·10/0.2 = 100 rather than a division blowup.
        assert!((p.duration() - 100.0).abs() < TOL);
    }

    #[test]
    fn degenerate_length_collapses() {
        let p = SpeedProfile::new(1.0, 2.0, 1e-9);
        assert!(p.is_degenerate());
        assert!(p.duration().abs() < TOL);
        assert!(p.length().abs() < TOL);
        assert!(p.jerk().abs() < TOL);
        assert!(p.speed_at(0.0).abs() < TOL);
        assert!(p.accel_at(0.5).abs() < TOL);
        assert!(p.distance_at(123.0).abs() < TOL);
        // Boundary speed reporting still honors the floor invariant.
        assert!((p.start_speed() - 1.0).abs() < TOL);
    }

    #[test]
    fn queries_clamp_out_of_range_times() {
        let p = SpeedProfile::new(1.0, 3.0, 10.0);
        assert!((p.speed_at(-5.0) - 1.0).abs() < TOL);
        assert!((p.speed_at(500.0) - 3.0).abs() < TOL);
        assert!((p.distance_at(500.0) - 10.0).abs() < TOL);
    }
}
