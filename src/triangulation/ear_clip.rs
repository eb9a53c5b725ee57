use tracing::trace;

use super::validity::{self, Neighbors};
use crate::error::GeometryError;
use crate::math::polygon_2d::turning_angle;
use crate::math::Point2;

/// Clips ears off the working loop until three corners remain, pushing one
/// triangle per ear that encloses area.
///
/// The cursor is kept between iterations and only wraps; the search fails
/// once it comes back round to the position of the last clipped ear.
///
/// # Errors
///
/// Returns `GeometryError::NoEar` if a full pass finds no valid ear.
pub(crate) fn clip(
    mut working: Vec<usize>,
    points: &[Point2],
    tolerance: f64,
    triangles: &mut Vec<[usize; 3]>,
) -> Result<(), GeometryError> {
    let mut cursor = 0;
    let mut last_clip = 0;

    while working.len() > 3 {
        let n = working.len();
        let corners = [
            working[cursor],
            working[(cursor + 1) % n],
            working[(cursor + 2) % n],
        ];
        let neighbors = Neighbors::Ear {
            before: working[(cursor + n - 1) % n],
            after: working[(cursor + 3) % n],
        };
        let shapes = std::slice::from_ref(&working);

        let Some(turn) = validity::check(corners, neighbors, shapes, points, tolerance) else {
            cursor = (cursor + 1) % n;
            if cursor == last_clip {
                return Err(GeometryError::NoEar { remaining: n });
            }
            continue;
        };

        if validity::encloses_area(turn, tolerance) {
            triangles.push(corners);
        } else {
            trace!(corner = corners[1], "removing straight corner");
        }

        let middle = (cursor + 1) % n;
        working.remove(middle);
        if middle < cursor {
            cursor -= 1;
        }
        last_clip = cursor;
    }

    if let &[a, b, c] = working.as_slice() {
        let turn = turning_angle(&points[a], &points[b], &points[c]);
        if turn > 0.0 && validity::encloses_area(turn, tolerance) {
            triangles.push([a, b, c]);
        }
    }
    Ok(())
}
