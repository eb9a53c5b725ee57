use std::collections::HashMap;

use crate::error::Result;
use crate::level::{LevelStore, SectorId, WallData};
use crate::math::Point2;

/// Exact position key. `-0.0` and `0.0` map to the same key.
type PositionKey = [u64; 4];

/// Maps the walls of a rebuilt sector onto those of its previous version.
///
/// A wall matches when its left and right vertices sit at exactly the same
/// positions as an old wall's, in the same direction. No welding is done:
/// positions differing in the last bit do not match.
pub struct MatchWalls {
    from: SectorId,
    to: SectorId,
}

impl MatchWalls {
    /// Creates a new `MatchWalls` query from the old sector `from` to the
    /// new sector `to`.
    #[must_use]
    pub fn new(from: SectorId, to: SectorId) -> Self {
        Self { from, to }
    }

    /// Executes the query.
    ///
    /// Returns one entry per wall of `to`, holding the index of the matching
    /// wall in `from`'s wall list. When several old walls share a position
    /// the first one wins.
    ///
    /// # Errors
    ///
    /// Returns an error if either sector, or a wall or vertex they refer to,
    /// is not in the store.
    pub fn execute(&self, store: &LevelStore) -> Result<Vec<Option<usize>>> {
        let mut old = HashMap::new();
        for (i, &id) in store.sector(self.from)?.walls.iter().enumerate() {
            old.entry(wall_key(store, store.wall(id)?)?).or_insert(i);
        }

        store
            .sector(self.to)?
            .walls
            .iter()
            .map(|&id| Ok(old.get(&wall_key(store, store.wall(id)?)?).copied()))
            .collect()
    }
}

fn wall_key(store: &LevelStore, wall: &WallData) -> Result<PositionKey> {
    let [lx, ly] = bits(&store.vertex(wall.left)?.point);
    let [rx, ry] = bits(&store.vertex(wall.right)?.point);
    Ok([lx, ly, rx, ry])
}

fn bits(p: &Point2) -> [u64; 2] {
    [(p.x + 0.0).to_bits(), (p.y + 0.0).to_bits()]
}
