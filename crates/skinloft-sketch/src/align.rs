//! Start-vertex alignment between two loops.
//!
//! The walk pairs loop positions by parameter order after alignment; the
//! only geometric anchor is loop A's vertex 0. Without this rotation two
//! loops with unrelated start vertices produce a twisted skin.

use skinloft_math::Point2;

/// Index of the vertex in `loop_b` nearest to `loop_a`'s vertex 0.
///
/// Distances compare with strict less-than, so ties keep the lowest index.
/// Returns 0 when either loop is empty.
pub fn closest_vertex_index(loop_a: &[Point2], loop_b: &[Point2]) -> usize {
    let Some(anchor) = loop_a.first() else {
        return 0;
    };
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, p) in loop_b.iter().enumerate() {
        let d = (*p - *anchor).norm_squared();
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

/// Rotate `loop_b` so its vertex nearest `loop_a`'s start becomes index 0.
pub fn align_loop_starts(loop_a: &[Point2], mut loop_b: Vec<Point2>) -> Vec<Point2> {
    if loop_b.is_empty() {
        return loop_b;
    }
    let start = closest_vertex_index(loop_a, &loop_b);
    loop_b.rotate_left(start);
    loop_b
}
