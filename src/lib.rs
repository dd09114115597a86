//! Quantum Chemistry Visualization Core
//!
//! This crate provides the computational core behind a browser-based
//! quantum chemistry visualization: a molecular energy model (Morse
//! potential with quantum corrections, curve generation, bond-length
//! optimization) and a single-qubit state engine (gate application,
//! Bloch-sphere projection, projective measurement, report export).
//! All functions are pure; the UI layer owns state and rendering.

pub mod error;
pub mod molecular;
pub mod quantum;
pub mod report;

pub use error::{ModelError, Result};

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ModelError, Result};
    pub use crate::molecular::prelude::*;
    pub use crate::quantum::prelude::*;
    pub use crate::report::{format_complex, QuantumReport};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
