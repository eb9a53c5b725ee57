mod area;
mod match_walls;

pub use area::{triangle_corners, SectorArea, TriangleArea};
pub use match_walls::MatchWalls;
