#![warn(missing_docs)]

//! Loft algorithms for the skinloft kernel.
//!
//! The perimeter walk connects two closed loops at different heights with a
//! quad skin without resampling either loop, even when the loops disagree
//! on vertex count, winding, and start vertex. The registry lets alternate
//! loft strategies be selected by name.

mod face;
mod registry;
mod walk;

pub use face::{Face, FaceBuilder};
pub use registry::{
    AlgorithmRegistry, LoftAlgorithm, RegistryError, Resolved, DEFAULT_ALGORITHM,
};
pub use walk::{next_step, perimeter_walk, Step, EPSILON};
