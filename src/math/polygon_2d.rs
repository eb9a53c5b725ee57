use std::f64::consts::TAU;

use super::{Point2, Vector2};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Signed area of the triangle `(a, b, c)`; positive when counter-clockwise.
#[must_use]
pub fn triangle_signed_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b - a).perp(&(c - a)) * 0.5
}

/// Area of the axis-aligned bounding box around `points`.
#[must_use]
pub fn bounding_box_area(points: &[Point2]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let (mut min, mut max) = (*first, *first);
    for pt in &points[1..] {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    (max.x - min.x) * (max.y - min.y)
}

/// Signed turning angle from edge `a → b` to edge `b → c`, in `(-π, π]`.
///
/// Positive is a left (counter-clockwise) turn. Zero-length edges yield `0`.
#[must_use]
pub fn turning_angle(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let d1 = b - a;
    let d2 = c - b;
    d1.perp(&d2).atan2(d1.dot(&d2))
}

/// Counter-clockwise sweep from direction `from` to direction `to`, in `[0, 2π)`.
///
/// Sweeps within `tolerance` of a full turn collapse to `0`, so two directions
/// that only differ by rounding compare as equal.
#[must_use]
pub fn ccw_angle(from: &Vector2, to: &Vector2, tolerance: f64) -> f64 {
    let mut angle = from.perp(to).atan2(from.dot(to));
    if angle < 0.0 {
        angle += TAU;
    }
    if angle >= TAU - tolerance {
        0.0
    } else {
        angle
    }
}
