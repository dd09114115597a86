//! Projective measurement in the computational basis
//!
//! The only non-deterministic operation in the crate. The random source
//! is injected so callers (and tests) control it; nothing here reaches
//! for a global generator.

use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use super::state::QubitState;

/// A single measurement outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    /// Measurement yielded 0
    #[serde(rename = "0")]
    Zero,
    /// Measurement yielded 1
    #[serde(rename = "1")]
    One,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Zero => write!(f, "0"),
            Outcome::One => write!(f, "1"),
        }
    }
}

/// Result of one projective measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// The sampled outcome
    pub outcome: Outcome,
    /// The collapsed state, exactly |0⟩ or |1⟩
    pub state: QubitState,
}

/// One entry of a session's append-only measurement history
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementRecord {
    pub outcome: Outcome,
    pub timestamp: DateTime<Utc>,
}

/// Measure a qubit in the computational basis
///
/// Draws one uniform sample from `rng` and collapses by the Born rule:
/// outcomes below `|α|²` yield 0 and the |0⟩ state, everything else
/// yields 1 and |1⟩. The input state is untouched; sequencing the
/// collapse into session state is the caller's job.
pub fn measure<R: Rng + ?Sized>(state: &QubitState, rng: &mut R) -> Measurement {
    let prob0 = state.probabilities().prob0;

    if rng.gen::<f64>() < prob0 {
        Measurement {
            outcome: Outcome::Zero,
            state: QubitState::zero(),
        }
    } else {
        Measurement {
            outcome: Outcome::One,
            state: QubitState::one(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn measurement_collapses_to_exact_basis_state() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let measured = measure(&QubitState::plus(), &mut rng);
            match measured.outcome {
                Outcome::Zero => assert_eq!(measured.state, QubitState::zero()),
                Outcome::One => assert_eq!(measured.state, QubitState::one()),
            }
        }
    }

    #[test]
    fn certain_states_measure_deterministically() {
        let mut rng = StdRng::seed_from_u64(7);

        let zero = measure(&QubitState::zero(), &mut rng);
        assert_eq!(zero.outcome, Outcome::Zero);

        let one = measure(&QubitState::one(), &mut rng);
        assert_eq!(one.outcome, Outcome::One);
    }

    #[test]
    fn outcome_displays_as_bit() {
        assert_eq!(Outcome::Zero.to_string(), "0");
        assert_eq!(Outcome::One.to_string(), "1");
    }
}
