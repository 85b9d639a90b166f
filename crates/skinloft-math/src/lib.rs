#![warn(missing_docs)]

//! Math types for the skinloft loft kernel.
//!
//! Thin wrappers around nalgebra providing the domain types shared by the
//! sketch and walk crates, plus the polygon measures both of them need.

/// A point in a sketch plane's local 2D frame.
pub type Point2 = nalgebra::Point2<f64>;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 2D space.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Signed area of a closed loop via the shoelace sum.
///
/// Positive for counter-clockwise winding, negative for clockwise.
/// Loops with fewer than 3 vertices have zero area.
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}

/// Perimeter length of a closed loop, including the implicit closing edge.
pub fn perimeter(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    let mut length = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        length += (points[j] - points[i]).norm();
    }
    length
}

/// Lift a 2D sketch point to 3D at the given height.
pub fn lift(p: Point2, height: f64) -> Point3 {
    Point3::new(p.x, p.y, height)
}
