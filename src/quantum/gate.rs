//! Single-qubit gates
//!
//! The fixed gate palette the visualization exposes. Each gate is a pure
//! total function on qubit states; all five are unitary, so normalization
//! is preserved.

use std::fmt::{self, Display};

use num_complex::Complex64;

use super::state::QubitState;

/// 1/sqrt(2)
pub const FRAC_1_SQRT_2: f64 = 0.7071067811865475;

/// The named gates offered by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// NOT gate: swaps the amplitudes
    PauliX,
    PauliY,
    PauliZ,
    Hadamard,
    /// S gate: quarter-turn phase on |1⟩
    Phase,
}

impl Gate {
    /// All gates in UI palette order
    pub const ALL: [Gate; 5] = [
        Gate::PauliX,
        Gate::PauliY,
        Gate::PauliZ,
        Gate::Hadamard,
        Gate::Phase,
    ];

    /// Display name used for buttons and logs
    pub fn name(&self) -> &'static str {
        match self {
            Gate::PauliX => "Pauli-X",
            Gate::PauliY => "Pauli-Y",
            Gate::PauliZ => "Pauli-Z",
            Gate::Hadamard => "Hadamard",
            Gate::Phase => "Phase (S)",
        }
    }

    /// Apply the gate, returning the evolved state
    pub fn apply(&self, state: &QubitState) -> QubitState {
        let (alpha, beta) = (state.alpha, state.beta);

        match self {
            Gate::PauliX => QubitState::new(beta, alpha),
            Gate::PauliY => QubitState::new(
                Complex64::new(-beta.im, beta.re),
                Complex64::new(alpha.im, -alpha.re),
            ),
            Gate::PauliZ => QubitState::new(alpha, -beta),
            Gate::Hadamard => {
                QubitState::new((alpha + beta) * FRAC_1_SQRT_2, (alpha - beta) * FRAC_1_SQRT_2)
            }
            // i·β on the |1⟩ amplitude
            Gate::Phase => QubitState::new(alpha, Complex64::new(-beta.im, beta.re)),
        }
    }
}

impl Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
