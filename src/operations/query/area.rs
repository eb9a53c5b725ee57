use crate::error::Result;
use crate::level::{LevelStore, SectorId};
use crate::math::polygon_2d::triangle_signed_area;
use crate::math::Point2;
use crate::triangulation::SectorTriangles;

/// Computes the signed area enclosed by a sector's walls.
///
/// Each wall contributes its shoelace term, so clockwise holes subtract and
/// the result is independent of wall order. Walls that form no closed loop
/// still contribute.
pub struct SectorArea {
    sector: SectorId,
}

impl SectorArea {
    /// Creates a new `SectorArea` query.
    #[must_use]
    pub fn new(sector: SectorId) -> Self {
        Self { sector }
    }

    /// Executes the query, returning the area.
    ///
    /// # Errors
    ///
    /// Returns an error if the sector or one of its walls or vertices is not
    /// in the store.
    pub fn execute(&self, store: &LevelStore) -> Result<f64> {
        let mut twice_area = 0.0;
        for &id in &store.sector(self.sector)?.walls {
            let wall = store.wall(id)?;
            let a = store.vertex(wall.left)?.point;
            let b = store.vertex(wall.right)?.point;
            twice_area += a.x * b.y - b.x * a.y;
        }
        Ok(twice_area * 0.5)
    }
}

/// Computes the summed signed area of a sector's floor triangles.
pub struct TriangleArea<'a> {
    sector: SectorId,
    triangles: &'a SectorTriangles,
}

impl<'a> TriangleArea<'a> {
    /// Creates a new `TriangleArea` query.
    #[must_use]
    pub fn new(sector: SectorId, triangles: &'a SectorTriangles) -> Self {
        Self { sector, triangles }
    }

    /// Executes the query, returning the area.
    ///
    /// # Errors
    ///
    /// Returns an error if a triangle names a wall index outside the
    /// sector's wall list.
    pub fn execute(&self, store: &LevelStore) -> Result<f64> {
        Ok(triangle_corners(store, self.sector, self.triangles)?
            .iter()
            .map(|[a, b, c]| triangle_signed_area(a, b, c))
            .sum())
    }
}

/// Resolves wall-index triangles to the positions of their corners.
///
/// # Errors
///
/// Returns an error if a triangle names a wall index outside the sector's
/// wall list, or a referenced entity is missing.
pub fn triangle_corners(
    store: &LevelStore,
    sector: SectorId,
    triangles: &SectorTriangles,
) -> Result<Vec<[Point2; 3]>> {
    let corner = |index: usize| -> Result<Point2> {
        let wall = store.sector_wall(sector, index)?;
        Ok(store.vertex(wall.left)?.point)
    };
    triangles
        .triangles()
        .map(|[a, b, c]| Ok([corner(a)?, corner(b)?, corner(c)?]))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::{LevelError, TessError};
    use crate::level::WallFlags;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn rectangle(w: f64, h: f64) -> [Point2; 4] {
        [p(0.0, 0.0), p(w, 0.0), p(w, h), p(0.0, h)]
    }

    #[test]
    fn rectangle_area() {
        let mut store = LevelStore::new("TEST");
        let sector = store.add_sector(None);
        store
            .add_loop(sector, &rectangle(3.0, 2.0), WallFlags::empty())
            .unwrap();
        let area = SectorArea::new(sector).execute(&store).unwrap();
        assert_abs_diff_eq!(area, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn clockwise_hole_subtracts() {
        let mut store = LevelStore::new("TEST");
        let sector = store.add_sector(None);
        store
            .add_loop(sector, &rectangle(4.0, 4.0), WallFlags::empty())
            .unwrap();
        store
            .add_loop(
                sector,
                &[p(1.0, 1.0), p(1.0, 2.0), p(2.0, 2.0), p(2.0, 1.0)],
                WallFlags::empty(),
            )
            .unwrap();
        let area = SectorArea::new(sector).execute(&store).unwrap();
        assert_abs_diff_eq!(area, 15.0, epsilon = 1e-12);
    }

    #[test]
    fn triangle_area_and_corners() {
        let mut store = LevelStore::new("TEST");
        let sector = store.add_sector(None);
        store
            .add_loop(sector, &rectangle(2.0, 1.0), WallFlags::empty())
            .unwrap();
        let tris = SectorTriangles::from(vec![[0_usize, 1, 2], [0, 2, 3]]);

        let corners = triangle_corners(&store, sector, &tris).unwrap();
        assert_eq!(corners[1], [p(0.0, 0.0), p(2.0, 1.0), p(0.0, 1.0)]);

        let area = TriangleArea::new(sector, &tris).execute(&store).unwrap();
        assert_abs_diff_eq!(area, 2.0, epsilon = 1e-12);

        let ceiling = SectorTriangles {
            indices: tris.ceiling_indices(),
        };
        let area = TriangleArea::new(sector, &ceiling).execute(&store).unwrap();
        assert_abs_diff_eq!(area, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn bad_wall_index() {
        let mut store = LevelStore::new("TEST");
        let sector = store.add_sector(None);
        store
            .add_loop(sector, &rectangle(1.0, 1.0), WallFlags::empty())
            .unwrap();
        let tris = SectorTriangles::from(vec![[0_usize, 1, 7]]);
        let err = TriangleArea::new(sector, &tris).execute(&store);
        assert!(matches!(
            err,
            Err(TessError::Level(LevelError::WallIndexOutOfRange { index: 7, len: 4 }))
        ));
    }
}
