use bitflags::bitflags;

use super::sector::SectorId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a wall in the level store.
    pub struct WallId;
}

bitflags! {
    /// Wall behaviour flags as stored in the level file.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WallFlags: u32 {
        /// The wall moves with its sector's elevator. Holes made only of
        /// such walls are left open by the floor/ceiling triangulation.
        const MORPHS_WITH_ELEVATOR = 1 << 5;
    }
}

/// Data associated with a wall.
///
/// A wall is a directed segment from `left` to `right` with its sector's
/// interior on the left-hand side.
#[derive(Debug, Clone)]
pub struct WallData {
    /// Start vertex.
    pub left: VertexId,
    /// End vertex.
    pub right: VertexId,
    /// Behaviour flags.
    pub flags: WallFlags,
    /// The sector owning this wall.
    pub sector: SectorId,
}

impl WallData {
    /// Returns `true` if the wall moves with its sector's elevator.
    #[must_use]
    pub fn morphs_with_elevator(&self) -> bool {
        self.flags.contains(WallFlags::MORPHS_WITH_ELEVATOR)
    }
}
