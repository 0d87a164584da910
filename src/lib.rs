pub mod error;
pub mod math;
pub mod path;
pub mod segment;

pub use error::{PathError, Result};
