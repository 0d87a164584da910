use crate::math::{Point3, Vector3, DEGENERACY_EPS};

use super::{Segment, SpeedProfile};

/// A jerk-limited straight segment between two points.
///
/// Motion follows the shared S-curve speed profile along the unit chord
/// direction; acceleration is purely tangential since the path has no
/// curvature.
#[derive(Debug, Clone)]
pub struct Line {
    start: Point3,
    end: Point3,
    direction: Vector3,
    profile: SpeedProfile,
}

impl Line {
    /// Creates a line segment from two endpoints and boundary speeds.
    ///
    /// Never fails: speeds are floored, and endpoints closer than the
    /// degeneracy threshold produce a zero-duration segment that stays at
    /// `start`, with the direction defaulting to the `+X` unit axis.
    #[must_use]
    pub fn new(start: Point3, end: Point3, start_speed: f64, end_speed: f64) -> Self {
        let chord = end - start;
        let length = chord.norm();
        let direction = if length < DEGENERACY_EPS {
            Vector3::x()
        } else {
            chord / length
        };

        Self {
            start,
            end,
            direction,
            profile: SpeedProfile::new(start_speed, end_speed, length),
        }
    }

    /// Returns the unit direction of travel.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Converts normalized progress to elapsed time.
    fn elapsed(&self, t: f64) -> f64 {
        t.clamp(0.0, 1.0) * self.profile.duration()
    }
}

impl Segment for Line {
    fn position(&self, t: f64) -> Point3 {
        self.start + self.direction * self.profile.distance_at(self.elapsed(t))
    }

    fn velocity(&self, t: f64) -> Vector3 {
        self.direction * self.profile.speed_at(self.elapsed(t))
    }

    fn acceleration(&self, t: f64) -> Vector3 {
        self.direction * self.profile.accel_at(self.elapsed(t))
    }

    fn duration(&self) -> f64 {
        self.profile.duration()
    }

    fn length(&self) -> f64 {
        self.profile.length()
    }

    fn start_position(&self) -> Point3 {
        self.start
    }

    fn end_position(&self) -> Point3 {
        self.end
    }

    fn start_speed(&self) -> f64 {
        self.profile.start_speed()
    }

    fn end_speed(&self) -> f64 {
        self.profile.end_speed()
    }
}
