//! Flyby demo — composes a line → arc → line path and samples it.
//!
//! Usage:
//! ```text
//! cargo run --example flyby
//! ```
//!
//! Logs one line per sample: position, speed, and the heading quaternion
//! recovered from the velocity direction.

use kinetis::math::heading::{heading_from_quaternion, quaternion_from_heading};
use kinetis::math::Point3;
use kinetis::path::Path;
use kinetis::segment::{Arc, Line};
use std::f64::consts::FRAC_PI_2;

fn main() -> kinetis::Result<()> {
    // Default: WARN for everything, INFO for the demo and kinetis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=kinetis=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("flyby=info".parse().unwrap_or_default())
        .add_directive("kinetis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Straight approach along +Z, quarter turn to the left, straight
    // departure along -X. Joints are tangent- and speed-continuous.
    let approach = Line::new(Point3::new(5.0, 1.0, -10.0), Point3::new(5.0, 1.0, 0.0), 2.0, 2.0);
    let turn = Arc::new(Point3::new(0.0, 1.0, 0.0), 5.0, 0.0, FRAC_PI_2, 2.0, 1.0);
    let departure = Line::new(Point3::new(0.0, 1.0, 5.0), Point3::new(-8.0, 1.0, 5.0), 1.0, 1.0);

    let path = Path::new(vec![approach.into(), turn.into(), departure.into()])?;
    tracing::info!(
        duration = path.duration(),
        length = path.length(),
        segments = path.segments().len(),
        "flyby path composed"
    );

    let steps = 24;
    for i in 0..=steps {
        let time = path.duration() * f64::from(i) / f64::from(steps);
        let sample = path.sample(time);
        let speed = sample.velocity.norm();

        // Course over ground, packed into a yaw quaternion and back.
        let course = sample.velocity.z.atan2(sample.velocity.x);
        let attitude = quaternion_from_heading(course);
        let heading_deg = heading_from_quaternion(&attitude).to_degrees();

        tracing::info!(
            time,
            x = sample.position.x,
            y = sample.position.y,
            z = sample.position.z,
            speed,
            heading_deg,
            "sample"
        );
    }

    Ok(())
}
