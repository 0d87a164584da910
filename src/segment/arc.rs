use crate::math::angle::wrap_angle;
use crate::math::{Point3, Vector3, DEGENERACY_EPS};

use super::{Segment, SpeedProfile};

/// A jerk-limited circular-arc segment in a horizontal plane.
///
/// The world is Y-up: the arc lies in the X–Z plane at a fixed height, swept
/// around `center` from `start_angle` toward `end_angle` (radians). The
/// angular span is wrapped into `(−π, π]`, so the shorter direction is always
/// taken; a caller wanting the long way around pre-adjusts the input angles.
///
/// ```text
/// P(angle) = (cx + r·cos(angle), height, cz + r·sin(angle))
/// ```
///
/// Speed along the arc follows the shared S-curve profile. Acceleration is
/// the vector sum of the centripetal component (`speed²/r` toward the
/// center) and the tangential component from the profile.
#[derive(Debug, Clone)]
pub struct Arc {
    center: Point3,
    radius: f64,
    start_angle: f64,
    span: f64,
    height: f64,
    start: Point3,
    end: Point3,
    profile: SpeedProfile,
}

impl Arc {
    /// Creates an arc segment in the horizontal plane through the center.
    ///
    /// Equivalent to [`Arc::at_height`] with `center.y` as the height.
    #[must_use]
    pub fn new(
        center: Point3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        start_speed: f64,
        end_speed: f64,
    ) -> Self {
        Self::at_height(
            center,
            radius,
            start_angle,
            end_angle,
            center.y,
            start_speed,
            end_speed,
        )
    }

    /// Creates an arc segment at an explicit height.
    ///
    /// Never fails: speeds are floored, and a wrapped span (or radius) small
    /// enough to put the arc length under the degeneracy threshold produces
    /// a zero-duration segment pinned to the start point.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn at_height(
        center: Point3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        height: f64,
        start_speed: f64,
        end_speed: f64,
    ) -> Self {
        let span = wrap_angle(end_angle - start_angle);
        let length = radius * span.abs();
        let start = point_on_circle(&center, radius, height, start_angle);
        let end = point_on_circle(&center, radius, height, start_angle + span);

        Self {
            center,
            radius,
            start_angle,
            span,
            height,
            start,
            end,
            profile: SpeedProfile::new(start_speed, end_speed, length),
        }
    }

    /// Returns the arc center.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the arc radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the signed angular span in `(−π, π]`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.span
    }

    /// Returns the height of the arc plane.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Converts normalized progress to elapsed time.
    fn elapsed(&self, t: f64) -> f64 {
        t.clamp(0.0, 1.0) * self.profile.duration()
    }

    /// Angle reached after covering `distance` along the arc.
    fn angle_at_distance(&self, distance: f64) -> f64 {
        let length = self.profile.length();
        if length < DEGENERACY_EPS {
            return self.start_angle;
        }
        self.start_angle + (distance / length) * self.span
    }

    /// Unit tangent in the direction of travel at the given angle.
    fn travel_tangent(&self, angle: f64) -> Vector3 {
        let sign = if self.span >= 0.0 { 1.0 } else { -1.0 };
        Vector3::new(-sign * angle.sin(), 0.0, sign * angle.cos())
    }
}

impl Segment for Arc {
    fn position(&self, t: f64) -> Point3 {
        let distance = self.profile.distance_at(self.elapsed(t));
        point_on_circle(&self.center, self.radius, self.height, self.angle_at_distance(distance))
    }

    fn velocity(&self, t: f64) -> Vector3 {
        let time = self.elapsed(t);
        let angle = self.angle_at_distance(self.profile.distance_at(time));
        self.travel_tangent(angle) * self.profile.speed_at(time)
    }

    fn acceleration(&self, t: f64) -> Vector3 {
        if self.profile.is_degenerate() {
            return Vector3::zeros();
        }

        let time = self.elapsed(t);
        let angle = self.angle_at_distance(self.profile.distance_at(time));
        let point = point_on_circle(&self.center, self.radius, self.height, angle);

        // Centripetal direction from the actual planar offset, normalized;
        // zero if the sample sits on the center.
        let dx = point.x - self.center.x;
        let dz = point.z - self.center.z;
        let offset = (dx * dx + dz * dz).sqrt();
        let speed = self.profile.speed_at(time);
        let centripetal = if offset < DEGENERACY_EPS {
            Vector3::zeros()
        } else {
            Vector3::new(-dx / offset, 0.0, -dz / offset) * (speed * speed / self.radius)
        };

        let tangential = self.travel_tangent(angle) * self.profile.accel_at(time);

        centripetal + tangential
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

/// Evaluates the point on the circle at the given angle.
fn point_on_circle(center: &Point3, radius: f64, height: f64, angle: f64) -> Point3 {
    Point3::new(
        center.x + radius * angle.cos(),
        height,
        center.z + radius * angle.sin(),
    )
}
