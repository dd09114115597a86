//! Error types for the visualization core.
//!
//! The energy model is the only fallible part of the crate: molecule
//! lookups can miss and curve parameters can be degenerate. The qubit
//! engine is total over normalized states and returns no errors.

use thiserror::Error;

/// Errors raised by the molecular energy model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Molecule identifier outside the supported set
    #[error("unknown molecule: {0}")]
    UnknownMolecule(String),

    /// Degenerate or non-finite numeric input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
