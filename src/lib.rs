pub mod error;
pub mod level;
pub mod math;
pub mod operations;
pub mod triangulation;
pub mod warning;

pub use error::{GeometryError, LevelError, Result, TessError};
