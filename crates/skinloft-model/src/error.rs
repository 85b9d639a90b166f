//! Error types for model building.

use skinloft_walk::RegistryError;
use thiserror::Error;

/// Errors that can occur while building a loftable model.
#[derive(Debug, Clone, Error)]
pub enum BuildError {
    /// No usable loft algorithm is registered.
    #[error(transparent)]
    NoAlgorithm(#[from] RegistryError),
}

/// Result type for model building.
pub type Result<T> = std::result::Result<T, BuildError>;
