//! Face accumulation for loft algorithms.

use serde::{Deserialize, Serialize};
use skinloft_math::{lift, Point2, Point3};

/// A single lofted face: 3 or 4 points wound for an outward-facing normal.
///
/// Consumers (renderers, exporters) must accept both sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// The corner points in winding order.
    pub points: Vec<Point3>,
}

impl Face {
    /// Number of corners.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the face has no corners.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the face is a quad.
    pub fn is_quad(&self) -> bool {
        self.points.len() == 4
    }
}

/// Accumulates faces between two loops pinned to fixed heights.
///
/// Single-use: create one per algorithm invocation, add faces, then take
/// them with [`FaceBuilder::into_faces`]. The builder never clears.
#[derive(Debug)]
pub struct FaceBuilder {
    height_a: f64,
    height_b: f64,
    faces: Vec<Face>,
}

impl FaceBuilder {
    /// A builder lifting A-side corners to `height_a` and B-side corners
    /// to `height_b`.
    pub fn new(height_a: f64, height_b: f64) -> Self {
        Self {
            height_a,
            height_b,
            faces: Vec::new(),
        }
    }

    /// Append the quad `[a0, a1, b1, b0]`.
    ///
    /// This exact corner order keeps normals outward for CCW loops walked
    /// with increasing parameter.
    pub fn add_quad(&mut self, a0: Point2, a1: Point2, b0: Point2, b1: Point2) {
        self.faces.push(Face {
            points: vec![
                lift(a0, self.height_a),
                lift(a1, self.height_a),
                lift(b1, self.height_b),
                lift(b0, self.height_b),
            ],
        });
    }

    /// Append an already-lifted triangle verbatim.
    ///
    /// The perimeter walk never emits triangles; cap algorithms do.
    pub fn add_triangle(&mut self, p0: Point3, p1: Point3, p2: Point3) {
        self.faces.push(Face {
            points: vec![p0, p1, p2],
        });
    }

    /// The accumulated faces, in emission order.
    pub fn into_faces(self) -> Vec<Face> {
        self.faces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_quad_corner_order_and_heights() {
        let mut builder = FaceBuilder::new(0.0, 3.0);
        builder.add_quad(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 0.5),
            Point2::new(2.0, 0.5),
        );
        let faces = builder.into_faces();
        assert_eq!(faces.len(), 1);
        let face = &faces[0];
        assert!(face.is_quad());
        assert_eq!(face.points[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(face.points[1], Point3::new(2.0, 0.0, 0.0));
        assert_eq!(face.points[2], Point3::new(2.0, 0.5, 3.0));
        assert_eq!(face.points[3], Point3::new(0.0, 0.5, 3.0));
    }

    #[test]
    fn test_quad_normal_faces_outward() {
        // Bottom edge of a CCW square: outward is -Y.
        let mut builder = FaceBuilder::new(0.0, 1.0);
        builder.add_quad(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        let face = &builder.into_faces()[0];
        let e0 = face.points[1] - face.points[0];
        let e1 = face.points[2] - face.points[1];
        let normal = e0.cross(&e1);
        assert!(normal.y < 0.0);
        assert_eq!(normal.x, 0.0);
    }

    #[test]
    fn test_add_triangle_verbatim() {
        let mut builder = FaceBuilder::new(0.0, 1.0);
        let p0 = Point3::new(0.0, 0.0, 5.0);
        let p1 = Point3::new(1.0, 0.0, 6.0);
        let p2 = Point3::new(0.0, 1.0, 7.0);
        builder.add_triangle(p0, p1, p2);
        let faces = builder.into_faces();
        assert_eq!(faces[0].points, vec![p0, p1, p2]);
        assert!(!faces[0].is_quad());
    }

    #[test]
    fn test_builder_accumulates_in_order() {
        let mut builder = FaceBuilder::new(0.0, 1.0);
        for i in 0..3 {
            let x = i as f64;
            builder.add_quad(
                Point2::new(x, 0.0),
                Point2::new(x + 1.0, 0.0),
                Point2::new(x, 0.0),
                Point2::new(x + 1.0, 0.0),
            );
        }
        let faces = builder.into_faces();
        assert_eq!(faces.len(), 3);
        assert_eq!(faces[2].points[0].x, 2.0);
    }
}
