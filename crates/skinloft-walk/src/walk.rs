//! The perimeter-parameterized synchronized walk.
//!
//! Both loops are normalized, aligned, and parameterized by perimeter
//! fraction, then walked in parameter order. Whichever loop reaches its
//! next vertex first advances and the held loop contributes a point
//! interpolated on its current edge, so neither loop is ever resampled.

use skinloft_math::Point2;
use skinloft_sketch::{align_loop_starts, ensure_ccw, ParamLoop};

use crate::face::{Face, FaceBuilder};

/// Fixed absolute tolerance for tie-breaking normalized perimeter
/// parameters in `[0, 1]`. Not user-tunable.
pub const EPSILON: f64 = 1e-9;

/// One walk transition: which loop reaches its next vertex first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Both loops reach their next vertex at the same perimeter fraction.
    Tie,
    /// Loop A's next vertex comes first.
    ALeads,
    /// Loop B's next vertex comes first.
    BLeads,
}

/// Decide the next transition from the two loops' next-vertex parameters.
///
/// Parameters closer than [`EPSILON`] count as a tie; at exactly `EPSILON`
/// apart the lower parameter leads.
pub fn next_step(t_next_a: f64, t_next_b: f64) -> Step {
    if (t_next_a - t_next_b).abs() < EPSILON {
        Step::Tie
    } else if t_next_a < t_next_b {
        Step::ALeads
    } else {
        Step::BLeads
    }
}

/// Loft two closed loops at fixed heights into a quad skin.
///
/// Every original vertex of both loops lands in the output as an exact
/// corner, reached by the walk exactly once; interpolated corners only
/// ever lie on the edge of the loop that did not advance that step. The
/// result is left open at top and bottom; capping is a separate concern.
///
/// Loops with fewer than 3 vertices, or with zero perimeter, contribute no
/// geometry instead of erroring, so work-in-progress sketches still build.
pub fn perimeter_walk(
    loop_a: &[Point2],
    height_a: f64,
    loop_b: &[Point2],
    height_b: f64,
) -> Vec<Face> {
    if loop_a.len() < 3 || loop_b.len() < 3 {
        return Vec::new();
    }

    let a_points = ensure_ccw(loop_a.to_vec());
    let b_points = align_loop_starts(&a_points, ensure_ccw(loop_b.to_vec()));

    // Re-normalization inside ParamLoop is a no-op at this point.
    let a = ParamLoop::new(a_points);
    let b = ParamLoop::new(b_points);

    // An all-coincident loop parameterizes to all zeros; the walk would
    // still terminate but every face would be collapsed. Emit nothing.
    if a.perimeter() == 0.0 || b.perimeter() == 0.0 {
        return Vec::new();
    }

    let (na, nb) = (a.len(), b.len());
    let mut builder = FaceBuilder::new(height_a, height_b);
    let mut ia = 0;
    let mut ib = 0;
    // Current walk position on each loop. Starts at the aligned vertex 0
    // and is either an original vertex or the held-edge point of the
    // previous step.
    let mut pa = a.vertex(0);
    let mut pb = b.vertex(0);

    while ia < na || ib < nb {
        if ia >= na {
            // A is exhausted: hold on its final edge while B finishes. The
            // evaluation lands within tolerance of A's wrap vertex.
            let t = b.param(ib + 1);
            let next_a = a.interpolate(na - 1, t);
            let next_b = b.vertex(ib + 1);
            builder.add_quad(pa, next_a, pb, next_b);
            pa = next_a;
            pb = next_b;
            ib += 1;
        } else if ib >= nb {
            let t = a.param(ia + 1);
            let next_a = a.vertex(ia + 1);
            let next_b = b.interpolate(nb - 1, t);
            builder.add_quad(pa, next_a, pb, next_b);
            pa = next_a;
            pb = next_b;
            ia += 1;
        } else {
            let t_next_a = a.param(ia + 1);
            let t_next_b = b.param(ib + 1);
            match next_step(t_next_a, t_next_b) {
                Step::Tie => {
                    let next_a = a.vertex(ia + 1);
                    let next_b = b.vertex(ib + 1);
                    builder.add_quad(pa, next_a, pb, next_b);
                    pa = next_a;
                    pb = next_b;
                    ia += 1;
                    ib += 1;
                }
                Step::ALeads => {
                    let next_a = a.vertex(ia + 1);
                    let next_b = b.interpolate(ib, t_next_a);
                    builder.add_quad(pa, next_a, pb, next_b);
                    pa = next_a;
                    pb = next_b;
                    ia += 1;
                }
                Step::BLeads => {
                    let next_a = a.interpolate(ia, t_next_b);
                    let next_b = b.vertex(ib + 1);
                    builder.add_quad(pa, next_a, pb, next_b);
                    pa = next_a;
                    pb = next_b;
                    ib += 1;
                }
            }
        }
    }

    builder.into_faces()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use skinloft_math::{Point2, Point3};
    use std::f64::consts::TAU;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ]
    }

    fn regular_polygon(cx: f64, cy: f64, radius: f64, sides: usize) -> Vec<Point2> {
        (0..sides)
            .map(|i| {
                let angle = TAU * i as f64 / sides as f64;
                Point2::new(cx + radius * angle.cos(), cy + radius * angle.sin())
            })
            .collect()
    }

    /// Corners of `faces` that coincide bitwise with a vertex of `original`
    /// lifted to `height`.
    fn exact_corner_hits(faces: &[Face], original: &[Point2], height: f64) -> Vec<Point2> {
        original
            .iter()
            .copied()
            .filter(|v| {
                let lifted = Point3::new(v.x, v.y, height);
                faces.iter().any(|f| f.points.contains(&lifted))
            })
            .collect()
    }

    #[test]
    fn test_tie_break_boundaries() {
        // Just under epsilon: tie.
        assert_eq!(next_step(0.0, EPSILON * 0.5), Step::Tie);
        // Exactly epsilon apart: no tie, lower parameter leads.
        assert_eq!(next_step(0.0, EPSILON), Step::ALeads);
        assert_eq!(next_step(EPSILON, 0.0), Step::BLeads);
        // Well over epsilon.
        assert_eq!(next_step(0.25, 0.5), Step::ALeads);
        assert_eq!(next_step(0.5, 0.25), Step::BLeads);
        assert_eq!(next_step(0.5, 0.5), Step::Tie);
    }

    #[test]
    fn test_degenerate_loop_yields_nothing() {
        let two = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(perimeter_walk(&two, 0.0, &square(), 3.0).is_empty());
        assert!(perimeter_walk(&square(), 0.0, &two, 3.0).is_empty());
        assert!(perimeter_walk(&[], 0.0, &square(), 3.0).is_empty());
    }

    #[test]
    fn test_zero_perimeter_loop_yields_nothing() {
        let p = Point2::new(1.0, 1.0);
        let collapsed = vec![p, p, p];
        assert!(perimeter_walk(&collapsed, 0.0, &square(), 3.0).is_empty());
        assert!(perimeter_walk(&square(), 0.0, &collapsed, 3.0).is_empty());
    }

    #[test]
    fn test_identical_squares_produce_exact_quads() {
        let faces = perimeter_walk(&square(), 0.0, &square(), 3.0);
        assert_eq!(faces.len(), 4);

        let bottom = ParamLoop::new(square());
        for (i, face) in faces.iter().enumerate() {
            assert!(face.is_quad());
            // Bottom edge matches A's edge i, top edge matches B's edge i.
            let v0 = bottom.vertex(i);
            let v1 = bottom.vertex(i + 1);
            assert_eq!(face.points[0], Point3::new(v0.x, v0.y, 0.0));
            assert_eq!(face.points[1], Point3::new(v1.x, v1.y, 0.0));
            assert_eq!(face.points[2], Point3::new(v1.x, v1.y, 3.0));
            assert_eq!(face.points[3], Point3::new(v0.x, v0.y, 3.0));
        }
    }

    #[test]
    fn test_mismatched_counts_cover_all_vertices() {
        let a = square();
        let b = regular_polygon(1.0, 1.0, 1.5, 8);
        let faces = perimeter_walk(&a, 0.0, &b, 3.0);

        assert!(!faces.is_empty());
        assert!(faces.len() <= a.len() + b.len());
        for face in &faces {
            assert!(face.is_quad());
        }

        // Every original vertex of both loops shows up as an exact corner.
        assert_eq!(exact_corner_hits(&faces, &a, 0.0).len(), 4);
        assert_eq!(exact_corner_hits(&faces, &b, 3.0).len(), 8);

        // The first step is a B-lead: its held-side corner lies on A's
        // bottom edge, halfway along it.
        assert_relative_eq!(faces[0].points[1].x, 1.0, epsilon = 1e-9);
        assert_eq!(faces[0].points[1].y, 0.0);

        // The count mismatch forces at least one lead/lag step, so some
        // face carries exactly one interpolated corner.
        let originals_a: Vec<Point3> = a.iter().map(|v| Point3::new(v.x, v.y, 0.0)).collect();
        let originals_b: Vec<Point3> = b.iter().map(|v| Point3::new(v.x, v.y, 3.0)).collect();
        let has_single_interp = faces.iter().any(|f| {
            let interpolated = f
                .points
                .iter()
                .filter(|p| !originals_a.contains(p) && !originals_b.contains(p))
                .count();
            interpolated == 1
        });
        assert!(has_single_interp);
    }

    #[test]
    fn test_winding_normalized_before_walk() {
        let mut cw = square();
        cw.reverse();
        let faces_cw = perimeter_walk(&cw, 0.0, &square(), 3.0);
        let faces_ccw = perimeter_walk(&square(), 0.0, &square(), 3.0);
        assert_eq!(faces_cw, faces_ccw);
    }

    #[test]
    fn test_misaligned_start_is_rotated() {
        let a = square();
        // Same square, but starting from vertex 2.
        let mut b = square();
        b.rotate_left(2);
        let faces = perimeter_walk(&a, 0.0, &b, 3.0);
        // Alignment undoes the rotation: identical output to aligned input.
        assert_eq!(faces, perimeter_walk(&a, 0.0, &a, 3.0));
    }

    #[test]
    fn test_near_duplicate_vertex_exhausts_one_loop_early() {
        // A's fifth vertex sits within the walk tolerance of its wrap
        // vertex, so the tie branch consumes it together with B's wrap and
        // the B-exhausted branch emits the remaining face.
        let mut a = square();
        a.push(Point2::new(0.0, 1e-10));
        let b = square();
        let faces = perimeter_walk(&a, 0.0, &b, 3.0);

        assert!(faces.len() <= a.len() + b.len());
        for face in &faces {
            assert!(face.is_quad());
        }
        assert_eq!(exact_corner_hits(&faces, &b, 3.0).len(), 4);
    }

    #[test]
    fn test_emission_order_follows_parameter_order() {
        let a = square();
        let b = regular_polygon(1.0, 1.0, 1.5, 6);
        let faces = perimeter_walk(&a, 0.0, &b, 3.0);
        // The a0 corner of each face is the a1 corner of the previous one:
        // the walk emits one continuous strip.
        for pair in faces.windows(2) {
            assert_eq!(pair[0].points[1], pair[1].points[0]);
            assert_eq!(pair[0].points[2], pair[1].points[3]);
        }
    }
}
