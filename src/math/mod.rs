pub mod angle;
pub mod derivative;
pub mod heading;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Unit quaternion type for orientations.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Threshold below which a length or angular span is treated as degenerate.
pub const DEGENERACY_EPS: f64 = 1e-6;
