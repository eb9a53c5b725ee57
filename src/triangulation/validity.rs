use std::f64::consts::PI;

use crate::math::intersect_2d::segments_intersect;
use crate::math::polygon_2d::{ccw_angle, turning_angle};
use crate::math::Point2;

/// Loop neighbours of a candidate triangle `(a, b, c)`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Neighbors {
    /// `a`, `b`, `c` are consecutive on one loop, `before` precedes `a` and
    /// `after` follows `c`. The new edge is `c → a`.
    Ear { before: usize, after: usize },
    /// `a → b` is a hole edge and `c` a corner of another loop. The new
    /// edges are `a → c` and `b → c`.
    Bridge {
        before_a: usize,
        after_b: usize,
        before_c: usize,
        after_c: usize,
    },
}

/// Tests whether triangle `(a, b, c)` can be cut from the loops in `shapes`.
///
/// Returns the turning angle at `b` when the triangle is valid. The turn
/// must not be reflex, every new edge must leave its endpoints into the
/// sector interior, and no new edge may touch a loop edge that is not
/// incident to `a`, `b` or `c`.
pub(crate) fn check(
    corners: [usize; 3],
    neighbors: Neighbors,
    shapes: &[Vec<usize>],
    points: &[Point2],
    tolerance: f64,
) -> Option<f64> {
    let [a, b, c] = corners;
    let turn = turning_angle(&points[a], &points[b], &points[c]);
    if is_reflex(turn, tolerance) {
        return None;
    }

    let fits = |apex: usize, next: usize, prev: usize, target: usize| {
        within_wedge(points, apex, next, prev, target, tolerance)
    };
    let clear = |from: usize, to: usize| !crosses_any(from, to, corners, shapes, points, tolerance);

    let valid = match neighbors {
        Neighbors::Ear { before, after } => {
            fits(a, b, before, c) && fits(c, after, b, a) && clear(c, a)
        }
        Neighbors::Bridge {
            before_a,
            after_b,
            before_c,
            after_c,
        } => {
            fits(a, b, before_a, c)
                && fits(b, after_b, a, c)
                && fits(c, after_c, before_c, a)
                && fits(c, after_c, before_c, b)
                && clear(a, c)
                && clear(b, c)
        }
    };

    valid.then_some(turn)
}

/// A turn that cuts outside the loop: strictly clockwise, short of a U-turn.
pub(crate) fn is_reflex(turn: f64, tolerance: f64) -> bool {
    turn < -tolerance && turn > -PI + tolerance
}

/// A turn neither straight ahead nor straight back.
pub(crate) fn encloses_area(turn: f64, tolerance: f64) -> bool {
    turn.abs() > tolerance && PI - turn.abs() > tolerance
}

/// Whether the direction `apex → target` lies in the interior wedge at
/// `apex`, swept counter-clockwise from `apex → next` to `apex → prev`.
fn within_wedge(
    points: &[Point2],
    apex: usize,
    next: usize,
    prev: usize,
    target: usize,
    tolerance: f64,
) -> bool {
    let origin = points[apex];
    let forward = points[next] - origin;
    let wedge = ccw_angle(&forward, &(points[prev] - origin), tolerance);
    let toward = ccw_angle(&forward, &(points[target] - origin), tolerance);
    toward <= wedge + tolerance
}

fn crosses_any(
    from: usize,
    to: usize,
    corners: [usize; 3],
    shapes: &[Vec<usize>],
    points: &[Point2],
    tolerance: f64,
) -> bool {
    shapes.iter().any(|shape| {
        shape
            .iter()
            .zip(shape.iter().cycle().skip(1))
            .filter(|&(s, e)| !corners.contains(s) && !corners.contains(e))
            .any(|(&s, &e)| {
                segments_intersect(&points[from], &points[to], &points[s], &points[e], tolerance)
            })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn square_with_notch() -> Vec<Point2> {
        // Counter-clockwise, with a reflex corner at 4.
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(3.0, 4.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 4.0),
            Point2::new(0.0, 4.0),
        ]
    }

    fn ear(loop_: &[usize], at: usize, points: &[Point2]) -> Option<f64> {
        let n = loop_.len();
        let corners = [loop_[at], loop_[(at + 1) % n], loop_[(at + 2) % n]];
        let neighbors = Neighbors::Ear {
            before: loop_[(at + n - 1) % n],
            after: loop_[(at + 3) % n],
        };
        check(corners, neighbors, &[loop_.to_vec()], points, TOL)
    }

    #[test]
    fn convex_ear_is_accepted() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let turn = ear(&[0, 1, 2, 3], 0, &pts).unwrap();
        assert!((turn - PI / 2.0).abs() < TOL);
    }

    #[test]
    fn reflex_corner_is_rejected() {
        let pts = square_with_notch();
        assert!(ear(&[0, 1, 2, 3, 4, 5, 6], 3, &pts).is_none());
    }

    #[test]
    fn diagonal_crossing_notch_is_rejected() {
        let pts = square_with_notch();
        // Convex corners, but 2 -> 0 and 1 -> 6 both cut edge 3 -> 4.
        assert!(ear(&[0, 1, 2, 3, 4, 5, 6], 0, &pts).is_none());
        assert!(ear(&[0, 1, 2, 3, 4, 5, 6], 6, &pts).is_none());
    }

    #[test]
    fn ears_beside_notch_are_accepted() {
        let pts = square_with_notch();
        assert!(ear(&[0, 1, 2, 3, 4, 5, 6], 1, &pts).is_some());
        assert!(ear(&[0, 1, 2, 3, 4, 5, 6], 4, &pts).is_some());
    }

    #[test]
    fn diagonal_leaving_the_loop_is_rejected() {
        // Concave quad: 2 -> 0 passes outside next to corner 0 without
        // crossing any edge, so only the wedge test catches it.
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(3.0, 1.0),
        ];
        assert!(ear(&[0, 1, 2, 3], 0, &pts).is_none());
        assert!(ear(&[0, 1, 2, 3], 1, &pts).is_some());
    }

    #[test]
    fn straight_corner_is_valid_without_area() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let turn = ear(&[0, 1, 2, 3, 4], 0, &pts).unwrap();
        assert!(!encloses_area(turn, TOL));
    }

    #[test]
    fn bridge_from_hole_to_outer_corner() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            // clockwise hole
            Point2::new(0.4, 0.4),
            Point2::new(0.4, 0.6),
            Point2::new(0.6, 0.6),
            Point2::new(0.6, 0.4),
        ];
        let shapes = vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]];
        let to_corner = |c: usize, before_c: usize, after_c: usize| {
            check(
                [4, 5, c],
                Neighbors::Bridge {
                    before_a: 7,
                    after_b: 6,
                    before_c,
                    after_c,
                },
                &shapes,
                &pts,
                TOL,
            )
        };
        assert!(encloses_area(to_corner(0, 3, 1).unwrap(), TOL));
        // Corner 2 lies to the right of hole edge 4 -> 5.
        assert!(to_corner(2, 1, 3).is_none());
    }

    #[test]
    fn reflex_and_area_thresholds() {
        assert!(is_reflex(-PI / 2.0, TOL));
        assert!(!is_reflex(0.0, TOL));
        assert!(!is_reflex(-PI, TOL));
        assert!(encloses_area(PI / 3.0, TOL));
        assert!(!encloses_area(PI, TOL));
        assert!(!encloses_area(-1e-12, TOL));
    }
}
