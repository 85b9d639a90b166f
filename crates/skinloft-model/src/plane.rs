//! Sketch plane inputs.

use serde::{Deserialize, Serialize};
use skinloft_math::Point2;

/// One cross-section of the stack: a closed loop at a height.
///
/// Planes are owned by the editing collaborator; a build call treats them
/// as read-only snapshots and the resulting model borrows them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchPlane {
    /// Height of the sketch plane.
    pub height: f64,
    /// The loop's vertices; the edge from last back to first is implicit.
    pub points: Vec<Point2>,
}

impl SketchPlane {
    /// A plane from an explicit vertex loop.
    pub fn new(height: f64, points: Vec<Point2>) -> Self {
        Self { height, points }
    }

    /// An axis-aligned rectangle with its corner at `(x, y)`.
    pub fn rectangle(height: f64, x: f64, y: f64, width: f64, depth: f64) -> Self {
        Self::new(
            height,
            vec![
                Point2::new(x, y),
                Point2::new(x + width, y),
                Point2::new(x + width, y + depth),
                Point2::new(x, y + depth),
            ],
        )
    }

    /// A regular polygon around `(cx, cy)`, first vertex on the +X axis.
    pub fn regular_polygon(height: f64, cx: f64, cy: f64, radius: f64, sides: usize) -> Self {
        let points = (0..sides)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / sides as f64;
                Point2::new(cx + radius * angle.cos(), cy + radius * angle.sin())
            })
            .collect();
        Self::new(height, points)
    }

    /// The loop's current vertex sequence.
    pub fn loop_points(&self) -> &[Point2] {
        &self.points
    }
}
