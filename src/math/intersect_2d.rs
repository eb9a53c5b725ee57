use super::{Point2, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` unless the
/// directions are parallel within `tolerance`.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
    tolerance: f64,
) -> Option<(f64, f64)> {
    let cross = d1.perp(d2);
    if cross.abs() <= tolerance {
        return None;
    }
    let d = p2 - p1;
    let t = d.perp(d2) / cross;
    let u = d.perp(d1) / cross;
    Some((t, u))
}

/// Returns `true` if `p` projects onto the segment `a`–`b`.
///
/// Uses the sign of the dot product and a squared-length comparison rather
/// than a range check on coordinates, so endpoints are included exactly.
#[must_use]
pub fn is_between(a: &Point2, b: &Point2, p: &Point2) -> bool {
    let ab = b - a;
    let dot = ab.dot(&(p - a));
    dot >= 0.0 && dot <= ab.norm_squared()
}

/// Distance from `p` to the infinite line through `a` and `b`.
///
/// Falls back to the distance to `a` when `a` and `b` are closer than
/// `tolerance`.
#[must_use]
pub fn orthogonal_distance(p: &Point2, a: &Point2, b: &Point2, tolerance: f64) -> f64 {
    let ab = b - a;
    let len = ab.norm();
    if len < tolerance {
        return (p - a).norm();
    }
    ab.perp(&(p - a)).abs() / len
}

/// Bounded segment-segment intersection test, endpoints included.
///
/// Non-parallel segments intersect when their line crossing lies between the
/// endpoints of both. Parallel segments intersect only when they are
/// collinear (within `tolerance`) and their extents overlap.
#[must_use]
pub fn segments_intersect(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    tolerance: f64,
) -> bool {
    let da = a1 - a0;
    let db = b1 - b0;
    if let Some((t, _)) = line_line_intersect_2d(a0, &da, b0, &db, tolerance) {
        let hit = a0 + da * t;
        return is_between(a0, a1, &hit) && is_between(b0, b1, &hit);
    }
    if orthogonal_distance(b0, a0, a1, tolerance) > tolerance
        || orthogonal_distance(b1, a0, a1, tolerance) > tolerance
    {
        return false;
    }
    is_between(a0, a1, b0)
        || is_between(a0, a1, b1)
        || is_between(b0, b1, a0)
        || is_between(b0, b1, a1)
}
