pub mod query;

pub use query::{triangle_corners, MatchWalls, SectorArea, TriangleArea};
