use std::borrow::Cow;

use super::wall::WallId;

slotmap::new_key_type! {
    /// Unique identifier for a sector in the level store.
    pub struct SectorId;
}

/// Data associated with a sector.
///
/// The wall list is ordered; triangulation output refers to walls by their
/// position in it. Adjacency, not list order, defines the sector outline.
#[derive(Debug, Clone)]
pub struct SectorData {
    /// Optional name from the level file.
    pub name: Option<String>,
    /// Position of the sector in the level's sector list.
    pub index: usize,
    /// Walls bounding the sector.
    pub walls: Vec<WallId>,
}

impl SectorData {
    /// Human-readable identifier: the name when present, otherwise the index.
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Cow::Borrowed(name),
            _ => Cow::Owned(self.index.to_string()),
        }
    }
}
