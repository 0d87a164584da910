mod arc;
mod line;
mod profile;

pub use arc::Arc;
pub use line::Line;
pub use profile::{SpeedProfile, MIN_SPEED};

use crate::math::{Point3, Vector3};

/// Shared query contract for time-parameterized motion primitives.
///
/// Implementations are immutable after construction and every query is a
/// pure function of the stored parameters and `t`, so one instance can be
/// read from any number of threads without locking.
///
/// The parameter `t` is normalized progress in `[0, 1]`, mapping linearly to
/// elapsed time within the segment's own duration. Out-of-range values are
/// clamped, never rejected; no query has an error path.
pub trait Segment {
    /// Position after normalized progress `t`.
    fn position(&self, t: f64) -> Point3;

    /// Velocity after normalized progress `t`.
    fn velocity(&self, t: f64) -> Vector3;

    /// Acceleration after normalized progress `t`.
    fn acceleration(&self, t: f64) -> Vector3;

    /// Traversal time in seconds. Zero for degenerate segments.
    fn duration(&self) -> f64;

    /// Path length. Zero for degenerate segments.
    fn length(&self) -> f64;

    /// Position at `t = 0`.
    fn start_position(&self) -> Point3;

    /// Position at `t = 1`.
    fn end_position(&self) -> Point3;

    /// Boundary speed at `t = 0`, after flooring to [`MIN_SPEED`].
    fn start_speed(&self) -> f64;

    /// Boundary speed at `t = 1`, after flooring to [`MIN_SPEED`].
    fn end_speed(&self) -> f64;
}
