//! Molecular energy model
//!
//! This module holds the static molecule table and the energy functions
//! built on it: a classical Morse potential, a quantum-corrected variant,
//! curve sampling for charts, and a windowed minimum search.

pub mod energy;
pub mod molecule;

pub use energy::{
    classical_energy, current_energy_values, find_optimal_bond_length, generate_energy_curve,
    quantum_energy, EnergyPoint, EnergyReading, OptimalBondLength,
};
pub use molecule::{MoleculeSpec, MorseParameters, MOLECULES};

/// Re-export commonly used types and functions
pub mod prelude {
    pub use super::{classical_energy, generate_energy_curve, quantum_energy};
    pub use super::{EnergyPoint, MoleculeSpec, MorseParameters};
}
