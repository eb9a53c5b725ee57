use tracing::debug;

use super::boundary::{drop_elevator_holes, split_outer};
use super::loops::build_loops;
use super::sanitize::sanitize;
use super::shape::{SideRef, VertexTable};
use super::{bridge, ear_clip, SectorTriangles, TriangulationParams};
use crate::error::{GeometryError, LevelError, Result};
use crate::level::{LevelStore, SectorId};
use crate::warning::{Warning, WarningLog};

/// Triangulates the floor of one sector.
///
/// The sector's walls are cleaned of degenerate and doubled segments, chained
/// into closed loops, and the loop with the largest bounding box is taken as
/// the outline. Remaining loops are holes, except those made entirely of
/// elevator walls. Holes are bridged into the outline and the result is
/// ear-clipped. No vertices are added.
pub struct TriangulateSector {
    sector: SectorId,
    params: TriangulationParams,
}

/// Triangles produced before the run stopped, and why it stopped early.
struct Outcome {
    triangles: SectorTriangles,
    failure: Option<GeometryError>,
}

impl TriangulateSector {
    /// Creates a new `TriangulateSector` operation with default parameters.
    #[must_use]
    pub fn new(sector: SectorId) -> Self {
        Self {
            sector,
            params: TriangulationParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: TriangulationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the triangulation.
    ///
    /// Geometry the engine cannot solve is not an error: one warning naming
    /// the sector is pushed to `warnings` and the triangles produced so far
    /// (possibly none) are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the sector, or a wall or vertex it refers to, is
    /// not in the store.
    pub fn execute(&self, store: &LevelStore, warnings: &mut WarningLog) -> Result<SectorTriangles> {
        let outcome = self.run(store)?;
        if let Some(failure) = outcome.failure {
            let sector = store.sector(self.sector)?;
            warnings.push(Warning::new(
                store.source_name(),
                format!("sector {} {failure}", sector.label()),
            ));
        }
        Ok(outcome.triangles)
    }

    /// Executes the triangulation, treating unsolvable geometry as an error.
    ///
    /// # Errors
    ///
    /// Returns `TessError::Geometry` if the sector cannot be triangulated, or
    /// `TessError::Level` if an entity is missing from the store.
    pub fn try_execute(&self, store: &LevelStore) -> Result<SectorTriangles> {
        let outcome = self.run(store)?;
        match outcome.failure {
            Some(failure) => Err(failure.into()),
            None => Ok(outcome.triangles),
        }
    }

    fn run(&self, store: &LevelStore) -> std::result::Result<Outcome, LevelError> {
        let tolerance = self.params.tolerance;
        let sector = store.sector(self.sector)?;
        let walls = sector
            .walls
            .iter()
            .enumerate()
            .map(|(i, &id)| Ok(SideRef::new(i, store.wall(id)?)))
            .collect::<std::result::Result<Vec<_>, LevelError>>()?;

        let pending = sanitize(&walls);
        if pending.is_empty() {
            debug!(sector = %sector.label(), "no walls left after sanitizing");
            return Ok(Outcome {
                triangles: SectorTriangles::default(),
                failure: None,
            });
        }

        let shapes = build_loops(&pending);
        let (table, outlines) = VertexTable::build(store, &shapes)?;
        let points = table.points();
        let Some((outer, holes)) = split_outer(outlines, points) else {
            return Ok(Outcome {
                triangles: SectorTriangles::default(),
                failure: Some(GeometryError::NoClosedLoop),
            });
        };
        let holes: Vec<Vec<usize>> = drop_elevator_holes(holes)
            .into_iter()
            .map(|hole| hole.corners)
            .collect();
        debug!(
            sector = %sector.label(),
            outer = outer.corners.len(),
            holes = holes.len(),
            "triangulating sector"
        );

        let mut triangles = Vec::new();
        let result = bridge::merge_holes(outer.corners, holes, points, tolerance, &mut triangles)
            .and_then(|working| ear_clip::clip(working, points, tolerance, &mut triangles));

        let indices = triangles
            .iter()
            .flatten()
            .map(|&corner| table.corner_wall(corner))
            .collect();
        Ok(Outcome {
            triangles: SectorTriangles { indices },
            failure: result.err(),
        })
    }
}
