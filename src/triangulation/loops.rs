use std::collections::HashMap;

use tracing::debug;

use super::shape::SideRef;
use crate::level::VertexId;

/// Chains walls into closed loops by following left → right adjacency.
///
/// Seeds are taken in wall-list order; at each step the first unused wall
/// starting where the chain ends is appended. A chain that dead-ends is
/// discarded with all its walls.
pub(crate) fn build_loops(pending: &[SideRef]) -> Vec<Vec<SideRef>> {
    let mut by_left: HashMap<VertexId, Vec<usize>> = HashMap::new();
    for (i, wall) in pending.iter().enumerate() {
        by_left.entry(wall.left).or_default().push(i);
    }

    let mut used = vec![false; pending.len()];
    let mut shapes = Vec::new();

    for seed in 0..pending.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;
        let head = pending[seed].left;
        let mut tail = pending[seed].right;
        let mut shape = vec![pending[seed]];

        while tail != head {
            let next = by_left
                .get(&tail)
                .and_then(|starts| starts.iter().copied().find(|&i| !used[i]));
            let Some(next) = next else {
                debug!(
                    seed = pending[seed].index,
                    walls = shape.len(),
                    "discarding unclosed wall chain"
                );
                break;
            };
            used[next] = true;
            tail = pending[next].right;
            shape.push(pending[next]);
        }

        if tail == head {
            shapes.push(shape);
        }
    }

    shapes
}
