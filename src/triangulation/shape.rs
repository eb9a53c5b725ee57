use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::LevelError;
use crate::level::{LevelStore, VertexId, WallData};
use crate::math::Point2;

/// A sector wall as seen by the triangulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SideRef {
    /// Position in the sector's wall list.
    pub index: usize,
    pub left: VertexId,
    pub right: VertexId,
    pub morphs: bool,
}

impl SideRef {
    pub fn new(index: usize, wall: &WallData) -> Self {
        Self {
            index,
            left: wall.left,
            right: wall.right,
            morphs: wall.morphs_with_elevator(),
        }
    }

    /// Same undirected segment, in either direction.
    pub fn same_segment(&self, other: &Self) -> bool {
        (self.left == other.left && self.right == other.right)
            || (self.left == other.right && self.right == other.left)
    }
}

/// A closed loop reduced to local vertex indices.
#[derive(Debug, Clone)]
pub(crate) struct Outline {
    pub corners: Vec<usize>,
    /// Every wall of the loop moves with an elevator.
    pub moves_with_elevator: bool,
}

/// Dense per-call vertex table.
///
/// Loop vertices are renumbered `0..n` in order of first appearance, so the
/// geometric stages work on plain indices and slices.
#[derive(Debug, Default)]
pub(crate) struct VertexTable {
    points: Vec<Point2>,
    /// Lowest sector wall index among the walls starting at each vertex.
    corner_walls: Vec<usize>,
}

impl VertexTable {
    /// Builds the table from closed wall loops and reduces each loop to an [`Outline`].
    pub fn build(
        store: &LevelStore,
        shapes: &[Vec<SideRef>],
    ) -> Result<(Self, Vec<Outline>), LevelError> {
        let mut table = Self::default();
        let mut lookup: HashMap<VertexId, usize> = HashMap::new();
        let mut outlines = Vec::with_capacity(shapes.len());

        for shape in shapes {
            let mut corners = Vec::with_capacity(shape.len());
            for side in shape {
                let local = match lookup.entry(side.left) {
                    Entry::Occupied(e) => {
                        let local = *e.get();
                        let wall = &mut table.corner_walls[local];
                        *wall = (*wall).min(side.index);
                        local
                    }
                    Entry::Vacant(e) => {
                        table.points.push(store.vertex(side.left)?.point);
                        table.corner_walls.push(side.index);
                        *e.insert(table.points.len() - 1)
                    }
                };
                corners.push(local);
            }
            outlines.push(Outline {
                corners,
                moves_with_elevator: shape.iter().all(|side| side.morphs),
            });
        }

        Ok((table, outlines))
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn corner_wall(&self, vertex: usize) -> usize {
        self.corner_walls[vertex]
    }
}
