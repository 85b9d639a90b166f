//! Name-keyed lookup of loft algorithms.
//!
//! The registry is an explicit value built at the composition root and
//! passed by reference wherever an algorithm must be resolved. There is no
//! process-global table and no import-time registration.

use std::collections::HashMap;

use skinloft_math::Point2;
use thiserror::Error;

use crate::face::Face;
use crate::walk::perimeter_walk;

/// A loft algorithm: two closed loops at two heights in, faces out.
pub type LoftAlgorithm = fn(&[Point2], f64, &[Point2], f64) -> Vec<Face>;

/// Name under which the perimeter walk is registered.
pub const DEFAULT_ALGORITHM: &str = "perimeter-walk";

/// Errors from algorithm resolution.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// The fallback algorithm itself is unregistered, so no valid
    /// algorithm exists and the build cannot proceed.
    #[error("default loft algorithm \"{0}\" is not registered")]
    DefaultMissing(String),
}

/// Outcome of [`AlgorithmRegistry::resolve`].
#[derive(Debug, Clone)]
pub struct Resolved {
    /// The algorithm to invoke.
    pub algorithm: LoftAlgorithm,
    /// Set when the requested name was unknown and the default was used
    /// instead.
    pub fell_back_from: Option<String>,
}

/// An explicit name → algorithm table.
#[derive(Debug, Clone)]
pub struct AlgorithmRegistry {
    algorithms: HashMap<String, LoftAlgorithm>,
}

impl AlgorithmRegistry {
    /// A registry with no entries.
    pub fn empty() -> Self {
        Self {
            algorithms: HashMap::new(),
        }
    }

    /// Register `algorithm` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, algorithm: LoftAlgorithm) {
        self.algorithms.insert(name.into(), algorithm);
    }

    /// Look up an algorithm by name.
    pub fn lookup(&self, name: &str) -> Option<LoftAlgorithm> {
        self.algorithms.get(name).copied()
    }

    /// Resolve `requested` against this registry.
    ///
    /// A known requested name wins. An unknown requested name falls back
    /// to `default_name`, and the returned [`Resolved`] records the
    /// fallback so callers can observe it. A missing default is fatal.
    pub fn resolve(
        &self,
        requested: Option<&str>,
        default_name: &str,
    ) -> Result<Resolved, RegistryError> {
        if let Some(name) = requested {
            if let Some(algorithm) = self.lookup(name) {
                return Ok(Resolved {
                    algorithm,
                    fell_back_from: None,
                });
            }
            let algorithm = self
                .lookup(default_name)
                .ok_or_else(|| RegistryError::DefaultMissing(default_name.to_string()))?;
            return Ok(Resolved {
                algorithm,
                fell_back_from: Some(name.to_string()),
            });
        }

        let algorithm = self
            .lookup(default_name)
            .ok_or_else(|| RegistryError::DefaultMissing(default_name.to_string()))?;
        Ok(Resolved {
            algorithm,
            fell_back_from: None,
        })
    }
}

impl Default for AlgorithmRegistry {
    /// A registry with the built-in algorithms registered.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(DEFAULT_ALGORITHM, perimeter_walk as LoftAlgorithm);
        registry
    }
}
