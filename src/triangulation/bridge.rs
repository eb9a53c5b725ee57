use std::iter;

use tracing::trace;

use super::validity::{self, Neighbors};
use crate::error::GeometryError;
use crate::math::Point2;

/// Where a hole gets bridged to: corner `corner` of `shapes[target]`.
#[derive(Debug, Clone, Copy)]
struct Bridge {
    /// Index of the hole edge `hole[edge] → hole[edge + 1]`.
    edge: usize,
    target: usize,
    corner: usize,
    turn: f64,
}

/// Merges every hole into the outer loop, returning the single working loop.
///
/// Each hole in turn is joined to the first valid corner found on the outer
/// loop or on another hole. The triangle spanned by the bridging hole edge
/// and that corner is pushed to `triangles`; triangles emitted before a
/// failure are left in place.
///
/// # Errors
///
/// Returns `GeometryError::UnmergeableHole` if some hole has no valid bridge.
pub(crate) fn merge_holes(
    outer: Vec<usize>,
    holes: Vec<Vec<usize>>,
    points: &[Point2],
    tolerance: f64,
    triangles: &mut Vec<[usize; 3]>,
) -> Result<Vec<usize>, GeometryError> {
    // shapes[0] is the outer loop, the rest are holes still to merge.
    let mut shapes = Vec::with_capacity(holes.len() + 1);
    shapes.push(outer);
    shapes.extend(holes);

    while shapes.len() > 1 {
        let Some(bridge) = find_bridge(&shapes, points, tolerance) else {
            return Err(GeometryError::UnmergeableHole {
                remaining: shapes.len() - 1,
            });
        };
        let hole = &shapes[1];
        let a = hole[bridge.edge];
        let b = hole[(bridge.edge + 1) % hole.len()];
        let c = shapes[bridge.target][bridge.corner];
        trace!(a, b, c, target = bridge.target, "bridging hole");
        if validity::encloses_area(bridge.turn, tolerance) {
            triangles.push([a, b, c]);
        }
        splice(&mut shapes, bridge);
    }

    Ok(shapes.pop().unwrap_or_default())
}

/// Scans the first hole's edges against every corner of the outer loop, then
/// of the other holes, and returns the first valid bridge.
fn find_bridge(shapes: &[Vec<usize>], points: &[Point2], tolerance: f64) -> Option<Bridge> {
    let hole = &shapes[1];
    let m = hole.len();
    for edge in 0..m {
        let a = hole[edge];
        let b = hole[(edge + 1) % m];
        let before_a = hole[(edge + m - 1) % m];
        let after_b = hole[(edge + 2) % m];

        for target in iter::once(0).chain(2..shapes.len()) {
            let shape = &shapes[target];
            let n = shape.len();
            for corner in 0..n {
                let neighbors = Neighbors::Bridge {
                    before_a,
                    after_b,
                    before_c: shape[(corner + n - 1) % n],
                    after_c: shape[(corner + 1) % n],
                };
                let corners = [a, b, shape[corner]];
                if let Some(turn) = validity::check(corners, neighbors, shapes, points, tolerance)
                {
                    return Some(Bridge {
                        edge,
                        target,
                        corner,
                        turn,
                    });
                }
            }
        }
    }
    None
}

/// Replaces the target loop with `..., c, b, ..., a, c, ...`: the hole walked
/// from `b` round to `a`, between `c` and a duplicate of `c`. The hole edge
/// `a → b` is covered by the bridge triangle.
fn splice(shapes: &mut Vec<Vec<usize>>, bridge: Bridge) {
    let hole = shapes.remove(1);
    let target = if bridge.target == 0 {
        0
    } else {
        bridge.target - 1
    };
    let shape = &mut shapes[target];
    let k = bridge.corner;
    let m = hole.len();

    let mut merged = Vec::with_capacity(shape.len() + m + 1);
    merged.extend_from_slice(&shape[..=k]);
    merged.extend((1..=m).map(|i| hole[(bridge.edge + i) % m]));
    merged.push(shape[k]);
    merged.extend_from_slice(&shape[k + 1..]);
    *shape = merged;
}
