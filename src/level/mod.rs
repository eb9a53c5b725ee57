pub mod sector;
pub mod vertex;
pub mod wall;

pub use sector::{SectorData, SectorId};
pub use vertex::{VertexData, VertexId};
pub use wall::{WallData, WallFlags, WallId};

use crate::error::LevelError;
use crate::math::Point2;
use slotmap::SlotMap;

/// Central arena that owns the geometry of one loaded level.
///
/// Walls and sectors reference vertices through typed IDs (generational
/// indices), so shared vertices are compared by identity without any
/// pointer juggling.
#[derive(Debug, Default)]
pub struct LevelStore {
    name: String,
    vertices: SlotMap<VertexId, VertexData>,
    walls: SlotMap<WallId, WallData>,
    sectors: SlotMap<SectorId, SectorData>,
}

impl LevelStore {
    /// Creates a new, empty store for the level called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the level name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the level file name used as the source of warnings.
    #[must_use]
    pub fn source_name(&self) -> String {
        format!("{}.LEV", self.name)
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, LevelError> {
        self.vertices
            .get(id)
            .ok_or(LevelError::EntityNotFound("vertex"))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, LevelError> {
        self.vertices
            .get_mut(id)
            .ok_or(LevelError::EntityNotFound("vertex"))
    }

    // --- Sector operations ---

    /// Appends a new, wall-less sector and returns its ID.
    pub fn add_sector(&mut self, name: Option<String>) -> SectorId {
        let index = self.sectors.len();
        self.sectors.insert(SectorData {
            name,
            index,
            walls: Vec::new(),
        })
    }

    /// Returns a reference to the sector data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn sector(&self, id: SectorId) -> Result<&SectorData, LevelError> {
        self.sectors
            .get(id)
            .ok_or(LevelError::EntityNotFound("sector"))
    }

    /// Returns a mutable reference to the sector data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn sector_mut(&mut self, id: SectorId) -> Result<&mut SectorData, LevelError> {
        self.sectors
            .get_mut(id)
            .ok_or(LevelError::EntityNotFound("sector"))
    }

    /// Iterates over all sectors.
    pub fn sectors(&self) -> impl Iterator<Item = (SectorId, &SectorData)> {
        self.sectors.iter()
    }

    // --- Wall operations ---

    /// Creates a wall from `left` to `right` and appends it to `sector`'s wall list.
    ///
    /// # Errors
    ///
    /// Returns an error if the sector or either vertex is not in the store.
    pub fn add_wall(
        &mut self,
        sector: SectorId,
        left: VertexId,
        right: VertexId,
        flags: WallFlags,
    ) -> Result<WallId, LevelError> {
        self.vertex(left)?;
        self.vertex(right)?;
        self.sector(sector)?;
        let id = self.walls.insert(WallData {
            left,
            right,
            flags,
            sector,
        });
        self.sector_mut(sector)?.walls.push(id);
        Ok(id)
    }

    /// Creates one vertex per point and a closed loop of walls through them,
    /// in order, appended to `sector`'s wall list.
    ///
    /// # Errors
    ///
    /// Returns an error if the sector is not in the store.
    pub fn add_loop(
        &mut self,
        sector: SectorId,
        points: &[Point2],
        flags: WallFlags,
    ) -> Result<Vec<WallId>, LevelError> {
        self.sector(sector)?;
        let ids: Vec<VertexId> = points
            .iter()
            .map(|&pt| self.add_vertex(VertexData::new(pt)))
            .collect();
        let mut walls = Vec::with_capacity(ids.len());
        for (i, &left) in ids.iter().enumerate() {
            let right = ids[(i + 1) % ids.len()];
            walls.push(self.add_wall(sector, left, right, flags)?);
        }
        Ok(walls)
    }

    /// Returns a reference to the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall(&self, id: WallId) -> Result<&WallData, LevelError> {
        self.walls.get(id).ok_or(LevelError::EntityNotFound("wall"))
    }

    /// Returns a mutable reference to the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall_mut(&mut self, id: WallId) -> Result<&mut WallData, LevelError> {
        self.walls
            .get_mut(id)
            .ok_or(LevelError::EntityNotFound("wall"))
    }

    /// Returns the wall at position `index` of `sector`'s wall list.
    ///
    /// # Errors
    ///
    /// Returns an error if the sector is missing or `index` is out of range.
    pub fn sector_wall(&self, sector: SectorId, index: usize) -> Result<&WallData, LevelError> {
        let walls = &self.sector(sector)?.walls;
        let id = walls.get(index).ok_or(LevelError::WallIndexOutOfRange {
            index,
            len: walls.len(),
        })?;
        self.wall(*id)
    }
}
