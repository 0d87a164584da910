use crate::error::{PathError, Result};
use crate::math::{Point3, Vector3};
use crate::segment::{Arc, Line, Segment};

/// Largest endpoint separation tolerated at a joint between segments.
pub const POSITION_TOL: f64 = 1e-6;

/// Largest boundary-speed difference tolerated at a joint.
///
/// Speeds are compared after flooring, so two requests that both floor to
/// the minimum speed always chain.
pub const SPEED_TOL: f64 = 1e-6;

/// A segment stored in a path.
#[derive(Debug, Clone)]
pub enum PathSegment {
    /// A straight flight leg.
    Line(Line),
    /// A circular turn.
    Arc(Arc),
}

impl From<Line> for PathSegment {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for PathSegment {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl Segment for PathSegment {
    fn position(&self, t: f64) -> Point3 {
        match self {
            Self::Line(line) => line.position(t),
            Self::Arc(arc) => arc.position(t),
        }
    }

    fn velocity(&self, t: f64) -> Vector3 {
        match self {
            Self::Line(line) => line.velocity(t),
            Self::Arc(arc) => arc.velocity(t),
        }
    }

    fn acceleration(&self, t: f64) -> Vector3 {
        match self {
            Self::Line(line) => line.acceleration(t),
            Self::Arc(arc) => arc.acceleration(t),
        }
    }

    fn duration(&self) -> f64 {
        match self {
            Self::Line(line) => line.duration(),
            Self::Arc(arc) => arc.duration(),
        }
    }

    fn length(&self) -> f64 {
        match self {
            Self::Line(line) => line.length(),
            Self::Arc(arc) => arc.length(),
        }
    }

    fn start_position(&self) -> Point3 {
        match self {
            Self::Line(line) => line.start_position(),
            Self::Arc(arc) => arc.start_position(),
        }
    }

    fn end_position(&self) -> Point3 {
        match self {
            Self::Line(line) => line.end_position(),
            Self::Arc(arc) => arc.end_position(),
        }
    }

    fn start_speed(&self) -> f64 {
        match self {
            Self::Line(line) => line.start_speed(),
            Self::Arc(arc) => arc.start_speed(),
        }
    }

    fn end_speed(&self) -> f64 {
        match self {
            Self::Line(line) => line.end_speed(),
            Self::Arc(arc) => arc.end_speed(),
        }
    }
}

/// One kinematic state sampled from a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub position: Point3,
    pub velocity: Vector3,
    pub acceleration: Vector3,
}

/// A chain of segments queried on one global clock.
///
/// Construction checks that consecutive segments meet: endpoints within
/// [`POSITION_TOL`] and boundary speeds within [`SPEED_TOL`]. Queries map
/// the global time onto the owning segment's normalized parameter, so a
/// valid path samples continuously across joints.
#[derive(Debug, Clone)]
pub struct Path {
    segments: Vec<PathSegment>,
    end_times: Vec<f64>,
    duration: f64,
    length: f64,
}

impl Path {
    /// Builds a path from segments laid end to end.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Empty`] for no segments,
    /// [`PathError::PositionGap`] when a segment does not start where the
    /// previous one ends, and [`PathError::SpeedMismatch`] when boundary
    /// speeds disagree at a joint.
    pub fn new(segments: Vec<PathSegment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(PathError::Empty);
        }

        for (index, pair) in segments.windows(2).enumerate() {
            let gap = (pair[1].start_position() - pair[0].end_position()).norm();
            if gap > POSITION_TOL {
                return Err(PathError::PositionGap { index, gap });
            }
            let outgoing = pair[0].end_speed();
            let incoming = pair[1].start_speed();
            if (outgoing - incoming).abs() > SPEED_TOL {
                return Err(PathError::SpeedMismatch {
                    index,
                    outgoing,
                    incoming,
                });
            }
        }

        let mut end_times = Vec::with_capacity(segments.len());
        let mut duration = 0.0;
        let mut length = 0.0;
        for segment in &segments {
            duration += segment.duration();
            length += segment.length();
            end_times.push(duration);
        }

        Ok(Self {
            segments,
            end_times,
            duration,
            length,
        })
    }

    /// Total travel time in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Total travel distance.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The segments in travel order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Position at the start of the first segment.
    #[must_use]
    pub fn start_position(&self) -> Point3 {
        self.segments[0].start_position()
    }

    /// Position at the end of the last segment.
    #[must_use]
    pub fn end_position(&self) -> Point3 {
        self.segments[self.segments.len() - 1].end_position()
    }

    /// Samples position, velocity, and acceleration at a global time.
    ///
    /// Times outside `[0, duration]` clamp to the corresponding endpoint.
    #[must_use]
    pub fn sample(&self, time: f64) -> PathSample {
        let (segment, t) = self.locate(time);
        PathSample {
            position: segment.position(t),
            velocity: segment.velocity(t),
            acceleration: segment.acceleration(t),
        }
    }

    /// Position at a global time.
    #[must_use]
    pub fn position_at(&self, time: f64) -> Point3 {
        let (segment, t) = self.locate(time);
        segment.position(t)
    }

    /// Velocity at a global time.
    #[must_use]
    pub fn velocity_at(&self, time: f64) -> Vector3 {
        let (segment, t) = self.locate(time);
        segment.velocity(t)
    }

    /// Acceleration at a global time.
    #[must_use]
    pub fn acceleration_at(&self, time: f64) -> Vector3 {
        let (segment, t) = self.locate(time);
        segment.acceleration(t)
    }

    /// Maps a global time onto a segment and its normalized parameter.
    ///
    /// Zero-duration segments own no time interval and are passed over;
    /// times at or beyond the total duration pin to the end of the last
    /// segment.
    fn locate(&self, time: f64) -> (&PathSegment, f64) {
        let time = time.clamp(0.0, self.duration);
        let mut t_start = 0.0;
        for (segment, &t_end) in self.segments.iter().zip(&self.end_times) {
            if time < t_end {
                return (segment, (time - t_start) / (t_end - t_start));
            }
            t_start = t_end;
        }
        (&self.segments[self.segments.len() - 1], 1.0)
    }
}
