//! Session-scoped qubit state
//!
//! The UI holds one of these per visualization session instead of global
//! component state: the current qubit, the append-only measurement log,
//! and the random source used for collapse all live here. Every update
//! goes through the pure functions in the sibling modules.

use chrono::Utc;
use rand::rngs::ThreadRng;
use rand::Rng;

use super::gate::Gate;
use super::measurement::{measure, MeasurementRecord, Outcome};
use super::state::QubitState;
use crate::report::QuantumReport;

/// A single qubit session: current state, measurement history, randomness
pub struct QubitSession<R: Rng = ThreadRng> {
    state: QubitState,
    history: Vec<MeasurementRecord>,
    rng: R,
}

impl QubitSession<ThreadRng> {
    /// Create a session starting in |+⟩ with thread-local randomness
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for QubitSession<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QubitSession<R> {
    /// Create a session with an explicit random source (seeded in tests)
    pub fn with_rng(rng: R) -> Self {
        QubitSession {
            state: QubitState::plus(),
            history: Vec::new(),
            rng,
        }
    }

    /// The current qubit state
    pub fn state(&self) -> &QubitState {
        &self.state
    }

    /// The append-only measurement history, oldest first
    pub fn history(&self) -> &[MeasurementRecord] {
        &self.history
    }

    /// Apply a gate to the current state
    pub fn apply_gate(&mut self, gate: Gate) {
        self.state = gate.apply(&self.state);
    }

    /// Measure the qubit, collapse the state, and log the outcome
    pub fn measure(&mut self) -> Outcome {
        let measured = measure(&self.state, &mut self.rng);
        self.state = measured.state;
        self.history.push(MeasurementRecord {
            outcome: measured.outcome,
            timestamp: Utc::now(),
        });
        measured.outcome
    }

    /// Restore the initial |+⟩ state and clear the history
    pub fn reset(&mut self) {
        self.state = QubitState::plus();
        self.history.clear();
    }

    /// Snapshot the session for export
    pub fn report(&self) -> QuantumReport {
        QuantumReport::new(&self.state, &self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn session_starts_in_plus_with_empty_history() {
        let session = QubitSession::with_rng(StdRng::seed_from_u64(1));
        assert_eq!(*session.state(), QubitState::plus());
        assert!(session.history().is_empty());
    }

    #[test]
    fn gates_and_measurements_sequence_through_the_session() {
        let mut session = QubitSession::with_rng(StdRng::seed_from_u64(1));

        session.apply_gate(Gate::Hadamard); // |+⟩ -> |0⟩
        let outcome = session.measure();
        assert_eq!(outcome, Outcome::Zero);
        assert_eq!(*session.state(), QubitState::zero());
        assert_eq!(session.history().len(), 1);

        // A collapsed qubit stays gate-addressable
        session.apply_gate(Gate::PauliX);
        let outcome = session.measure();
        assert_eq!(outcome, Outcome::One);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn reset_restores_initial_state_and_clears_history() {
        let mut session = QubitSession::with_rng(StdRng::seed_from_u64(1));
        session.apply_gate(Gate::PauliX);
        session.measure();

        session.reset();
        assert_eq!(*session.state(), QubitState::plus());
        assert!(session.history().is_empty());
    }
}
