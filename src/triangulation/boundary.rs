use tracing::debug;

use super::shape::Outline;
use crate::math::polygon_2d::bounding_box_area;
use crate::math::Point2;

/// Splits off the outer boundary: the loop with the largest bounding-box area.
///
/// Ties keep the earlier loop. Returns `None` only for an empty input.
pub(crate) fn split_outer(
    mut outlines: Vec<Outline>,
    points: &[Point2],
) -> Option<(Outline, Vec<Outline>)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, outline) in outlines.iter().enumerate() {
        let corners: Vec<Point2> = outline.corners.iter().map(|&v| points[v]).collect();
        let area = bounding_box_area(&corners);
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((i, area)),
        }
    }
    let (outer, _) = best?;
    let outer = outlines.remove(outer);
    Some((outer, outlines))
}

/// Removes holes whose walls all move with an elevator; those stay open.
pub(crate) fn drop_elevator_holes(holes: Vec<Outline>) -> Vec<Outline> {
    holes
        .into_iter()
        .filter(|hole| {
            if hole.moves_with_elevator {
                debug!(corners = hole.corners.len(), "leaving elevator hole open");
            }
            !hole.moves_with_elevator
        })
        .collect()
}
