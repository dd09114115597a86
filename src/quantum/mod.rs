//! Single-qubit state engine
//!
//! This module represents a qubit as a pair of complex amplitudes and
//! evolves it under a fixed set of named unitary gates. Derived views
//! (Bloch-sphere coordinates, measurement probabilities) and projective
//! measurement live here; formatting and export live in `crate::report`.

pub mod gate;
pub mod measurement;
pub mod session;
pub mod state;

pub use gate::Gate;
pub use measurement::{measure, Measurement, MeasurementRecord, Outcome};
pub use session::QubitSession;
pub use state::{BlochVector, Probabilities, QubitState};

/// Re-export commonly used types
pub mod prelude {
    pub use super::{BlochVector, Gate, Measurement, Outcome, Probabilities, QubitState};
    pub use super::{MeasurementRecord, QubitSession};
}
