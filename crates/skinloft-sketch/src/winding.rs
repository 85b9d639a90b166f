//! Winding normalization for closed loops.

use skinloft_math::{signed_area, Point2};

/// Is the loop wound counter-clockwise?
///
/// Loops with fewer than 3 vertices have zero area and report `false`.
pub fn is_ccw(points: &[Point2]) -> bool {
    signed_area(points) > 0.0
}

/// Force counter-clockwise winding.
///
/// Reverses the vertex order when the signed area is negative, otherwise
/// returns the loop unchanged. Idempotent. Loops with fewer than 3 vertices
/// pass through untouched.
pub fn ensure_ccw(mut points: Vec<Point2>) -> Vec<Point2> {
    if signed_area(&points) < 0.0 {
        points.reverse();
    }
    points
}
