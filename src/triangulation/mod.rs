mod boundary;
mod bridge;
mod ear_clip;
mod loops;
mod sanitize;
mod shape;
mod triangulate_level;
mod triangulate_sector;
mod validity;

pub use triangulate_level::TriangulateLevel;
pub use triangulate_sector::TriangulateSector;

/// Parameters controlling sector triangulation.
#[derive(Debug, Clone, Copy)]
pub struct TriangulationParams {
    /// Floating tolerance for collinearity, wedge and zero-area tests.
    pub tolerance: f64,
}

impl Default for TriangulationParams {
    fn default() -> Self {
        Self { tolerance: 1e-9 }
    }
}

/// Floor triangles of one sector.
///
/// Each consecutive triple of `indices` names a triangle's corners by the
/// position, in the sector's wall list, of the wall starting at that corner.
/// Triangles wind counter-clockwise in the (x, z) plane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectorTriangles {
    pub indices: Vec<usize>,
}

impl SectorTriangles {
    /// Returns `true` if the sector has no floor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates over the triangles as wall-index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// The same triangles with reversed winding, facing down for the ceiling.
    #[must_use]
    pub fn ceiling_indices(&self) -> Vec<usize> {
        self.triangles().flat_map(|[a, b, c]| [a, c, b]).collect()
    }
}

impl From<Vec<[usize; 3]>> for SectorTriangles {
    fn from(triangles: Vec<[usize; 3]>) -> Self {
        Self {
            indices: triangles.into_iter().flatten().collect(),
        }
    }
}
