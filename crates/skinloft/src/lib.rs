#![warn(missing_docs)]

//! skinloft — loft surfaces over stacked sketch loops.
//!
//! Connects a stack of independently drawn closed 2D outlines at distinct
//! heights into a continuous, mostly-quad 3D skin, without resampling or
//! distorting the original loops. Loops may disagree on vertex count,
//! winding, and start vertex; the perimeter walk reconciles them.
//!
//! # Example
//!
//! ```
//! use skinloft::{build_from_planes, AlgorithmRegistry, BuildOptions, SketchPlane};
//!
//! let planes = vec![
//!     SketchPlane::rectangle(0.0, 0.0, 0.0, 2.0, 2.0),
//!     SketchPlane::rectangle(3.0, 0.0, 0.0, 2.0, 2.0),
//! ];
//!
//! let registry = AlgorithmRegistry::default();
//! let model = build_from_planes(&planes, &registry, &BuildOptions::default()).unwrap();
//!
//! assert_eq!(model.segments().len(), 1);
//! assert_eq!(model.roof_height(), 3.0);
//! ```

pub use skinloft_math::{lift, perimeter, signed_area, Point2, Point3, Vec2};
pub use skinloft_model::{
    build_from_planes, resize_lock_flags, BuildError, BuildOptions, LoftSegment, LoftableModel,
    SketchPlane,
};
pub use skinloft_sketch::{align_loop_starts, closest_vertex_index, ensure_ccw, is_ccw, ParamLoop};
pub use skinloft_walk::{
    next_step, perimeter_walk, AlgorithmRegistry, Face, FaceBuilder, LoftAlgorithm, RegistryError,
    Resolved, Step, DEFAULT_ALGORITHM, EPSILON,
};
