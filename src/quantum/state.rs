//! Qubit state representation
//!
//! A single qubit in the form α|0⟩ + β|1⟩, with the derived geometric and
//! probabilistic views the visualization needs.

use std::fmt::{self, Display};

use num_complex::Complex64;

/// A single qubit state α|0⟩ + β|1⟩
///
/// States handed out by this crate are normalized: every gate is unitary
/// and measurement collapse produces an exact basis state. All operations
/// return new values; nothing mutates in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QubitState {
    /// Amplitude of |0⟩
    pub alpha: Complex64,
    /// Amplitude of |1⟩
    pub beta: Complex64,
}

/// A point on (or inside) the Bloch sphere
///
/// Pure states land exactly on the unit sphere; the renderer consuming
/// this treats it as a plain vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Born-rule probabilities for the computational basis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probabilities {
    /// Probability of measuring |0⟩
    pub prob0: f64,
    /// Probability of measuring |1⟩
    pub prob1: f64,
}

impl QubitState {
    /// Create a state from raw amplitudes
    pub fn new(alpha: Complex64, beta: Complex64) -> Self {
        QubitState { alpha, beta }
    }

    /// The |0⟩ state
    pub fn zero() -> Self {
        QubitState {
            alpha: Complex64::new(1.0, 0.0),
            beta: Complex64::new(0.0, 0.0),
        }
    }

    /// The |1⟩ state
    pub fn one() -> Self {
        QubitState {
            alpha: Complex64::new(0.0, 0.0),
            beta: Complex64::new(1.0, 0.0),
        }
    }

    /// The |+⟩ state, the session's initial state
    pub fn plus() -> Self {
        QubitState {
            alpha: Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
            beta: Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
        }
    }

    /// The |-⟩ state
    pub fn minus() -> Self {
        QubitState {
            alpha: Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
            beta: Complex64::new(-1.0 / 2.0_f64.sqrt(), 0.0),
        }
    }

    /// Check normalization: |α|² + |β|² = 1
    pub fn is_normalized(&self) -> bool {
        let norm_sqr = self.alpha.norm_sqr() + self.beta.norm_sqr();
        (norm_sqr - 1.0).abs() < 1e-10
    }

    /// Born-rule probabilities for measuring |0⟩ and |1⟩
    pub fn probabilities(&self) -> Probabilities {
        Probabilities {
            prob0: self.alpha.norm_sqr(),
            prob1: self.beta.norm_sqr(),
        }
    }

    /// Project the state onto the Bloch sphere
    ///
    /// `x = 2·Re(α·β̄)`, `y = 2·Im(ᾱ·β)`, `z = |α|² − |β|²`. For any
    /// normalized state the result lies on the unit sphere.
    pub fn bloch_vector(&self) -> BlochVector {
        let (alpha, beta) = (self.alpha, self.beta);

        BlochVector {
            x: 2.0 * (alpha.re * beta.re + alpha.im * beta.im),
            y: 2.0 * (alpha.im * beta.re - alpha.re * beta.im),
            z: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::plus()
    }
}

impl Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}{:+.6}i)|0⟩ + ({:.6}{:+.6}i)|1⟩",
            self.alpha.re, self.alpha.im, self.beta.re, self.beta.im
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn basis_and_superposition_states_are_normalized() {
        for state in [
            QubitState::zero(),
            QubitState::one(),
            QubitState::plus(),
            QubitState::minus(),
        ] {
            assert!(state.is_normalized());
        }
    }

    #[test]
    fn plus_state_probabilities_are_balanced() {
        let probs = QubitState::plus().probabilities();
        assert_relative_eq!(probs.prob0, 0.5, epsilon = 1e-12);
        assert_relative_eq!(probs.prob1, 0.5, epsilon = 1e-12);
        assert_relative_eq!(probs.prob0 + probs.prob1, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn bloch_vector_lies_on_unit_sphere() {
        let states = [
            QubitState::zero(),
            QubitState::one(),
            QubitState::plus(),
            QubitState::minus(),
            // |0⟩ + i|1⟩ up to normalization
            QubitState::new(
                Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
                Complex64::new(0.0, 1.0 / 2.0_f64.sqrt()),
            ),
            QubitState::new(Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8)),
        ];

        for state in states {
            let b = state.bloch_vector();
            let norm = b.x * b.x + b.y * b.y + b.z * b.z;
            assert_relative_eq!(norm, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn bloch_vector_maps_basis_states_to_poles() {
        let zero = QubitState::zero().bloch_vector();
        assert_relative_eq!(zero.z, 1.0, epsilon = 1e-12);

        let one = QubitState::one().bloch_vector();
        assert_relative_eq!(one.z, -1.0, epsilon = 1e-12);

        let plus = QubitState::plus().bloch_vector();
        assert_relative_eq!(plus.x, 1.0, epsilon = 1e-12);
    }
}
