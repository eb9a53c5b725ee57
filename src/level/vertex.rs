use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the level store.
    pub struct VertexId;
}

/// Data associated with a level vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Position in the sector's ground plane (`x` is X, `y` is Z).
    pub point: Point2,
}

impl VertexData {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    /// Creates a new vertex from level-file X/Z coordinates.
    #[must_use]
    pub fn from_xz(x: f64, z: f64) -> Self {
        Self::new(Point2::new(x, z))
    }
}
