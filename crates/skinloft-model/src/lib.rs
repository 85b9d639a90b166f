#![warn(missing_docs)]

//! Loft model assembly for the skinloft kernel.
//!
//! Sorts an externally supplied stack of sketch planes by height, invokes
//! the resolved loft algorithm once per adjacent pair, and assembles the
//! ordered segment list plus the derived roof queries. A model is a
//! snapshot of the plane stack at build time; edit a plane and you rebuild.

pub mod error;
mod locks;
mod plane;

pub use error::{BuildError, Result};
pub use locks::resize_lock_flags;
pub use plane::SketchPlane;

use skinloft_math::Point2;
use skinloft_walk::{AlgorithmRegistry, Face, DEFAULT_ALGORITHM};

/// Options for building a loftable model.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Algorithm requested for this build; `None` uses the default.
    pub algorithm: Option<String>,
    /// Configured default algorithm name, used when no algorithm is
    /// requested or the requested one is unknown.
    pub default_algorithm: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            algorithm: None,
            default_algorithm: DEFAULT_ALGORITHM.to_string(),
        }
    }
}

/// The faces connecting one adjacent pair of sketch planes.
///
/// Segments borrow their planes and never clone them; the face data was
/// captured from the plane loops at build time and does not observe later
/// edits.
#[derive(Debug, Clone)]
pub struct LoftSegment<'a> {
    /// The lower plane of the pair.
    pub bottom: &'a SketchPlane,
    /// The upper plane of the pair.
    pub top: &'a SketchPlane,
    /// Faces produced by the loft algorithm, in emission order.
    pub faces: Vec<Face>,
}

/// An ordered stack of loft segments, bottom to top.
#[derive(Debug, Clone)]
pub struct LoftableModel<'a> {
    segments: Vec<LoftSegment<'a>>,
    fell_back_from: Option<String>,
}

impl<'a> LoftableModel<'a> {
    /// The segments, ordered by ascending plane height.
    pub fn segments(&self) -> &[LoftSegment<'a>] {
        &self.segments
    }

    /// True when the model has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The requested algorithm name that was unknown, when the build fell
    /// back to the default.
    pub fn fell_back_from(&self) -> Option<&str> {
        self.fell_back_from.as_deref()
    }

    /// Height of the top plane, or `0.0` for an empty model.
    pub fn roof_height(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.top.height)
    }

    /// Loop vertices of the top plane, or `None` for an empty model.
    pub fn roof_vertices(&self) -> Option<&'a [Point2]> {
        self.segments.last().map(|s| s.top.loop_points())
    }

    /// Every plane of the model, bottom first.
    ///
    /// Reconstructed as the first segment's bottom plane followed by each
    /// segment's top plane; equal by construction to the height-sorted
    /// input.
    pub fn all_planes(&self) -> Vec<&'a SketchPlane> {
        let mut planes = Vec::with_capacity(self.segments.len() + 1);
        if let Some(first) = self.segments.first() {
            planes.push(first.bottom);
        }
        for segment in &self.segments {
            planes.push(segment.top);
        }
        planes
    }

    /// Total face count across all segments.
    pub fn face_count(&self) -> usize {
        self.segments.iter().map(|s| s.faces.len()).sum()
    }
}

/// Build a loftable model from the current plane stack.
///
/// Planes are sorted ascending by height (stable, so equal heights keep
/// their input order) and the resolved algorithm runs once per adjacent
/// pair. Fewer than two planes yield an empty model, not an error.
///
/// An unknown requested algorithm logs a warning and falls back to the
/// configured default, recorded on the returned model.
///
/// # Errors
///
/// Returns [`BuildError::NoAlgorithm`] when the default algorithm itself
/// is unregistered; no partial model is produced.
pub fn build_from_planes<'a>(
    planes: &'a [SketchPlane],
    registry: &AlgorithmRegistry,
    options: &BuildOptions,
) -> Result<LoftableModel<'a>> {
    if planes.len() < 2 {
        return Ok(LoftableModel {
            segments: Vec::new(),
            fell_back_from: None,
        });
    }

    let mut sorted: Vec<&SketchPlane> = planes.iter().collect();
    sorted.sort_by(|a, b| a.height.total_cmp(&b.height));

    let resolved = registry.resolve(options.algorithm.as_deref(), &options.default_algorithm)?;
    if let Some(requested) = &resolved.fell_back_from {
        log::warn!(
            "unknown loft algorithm \"{requested}\", falling back to \"{}\"",
            options.default_algorithm
        );
    }

    let mut segments = Vec::with_capacity(sorted.len() - 1);
    for pair in sorted.windows(2) {
        let (bottom, top) = (pair[0], pair[1]);
        let faces = (resolved.algorithm)(
            bottom.loop_points(),
            bottom.height,
            top.loop_points(),
            top.height,
        );
        segments.push(LoftSegment { bottom, top, faces });
    }

    Ok(LoftableModel {
        segments,
        fell_back_from: resolved.fell_back_from,
    })
}
