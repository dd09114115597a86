//! Energy functions for the supported molecules
//!
//! The classical curve is a Morse potential shifted onto the molecule's
//! absolute energy scale. The quantum curve adds a zero-point term, a
//! decaying oscillatory correction, and a quartic anharmonicity term on
//! top of it. Both are pure functions of the molecule table.

use ndarray::Array1;
use serde::Serialize;

use super::molecule::{MoleculeSpec, MorseParameters};
use crate::error::{ModelError, Result};

/// One sample of an energy curve, rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyPoint {
    /// Bond length in Å, 3 decimals
    pub bond_length: f64,
    /// Morse-potential energy in eV, 4 decimals
    pub classical_energy: f64,
    /// Quantum-corrected energy in eV, 4 decimals
    pub quantum_energy: f64,
}

/// Classical and quantum energies at a single bond length
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyReading {
    pub classical: f64,
    pub quantum: f64,
    /// `quantum - classical`
    pub difference: f64,
}

/// Result of the windowed minimum search
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimalBondLength {
    /// Bond length in Å, 3 decimals
    pub bond_length: f64,
    /// Quantum energy at that bond length in eV, 4 decimals
    pub energy: f64,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

fn check_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::InvalidArgument(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

/// Calculate the classical energy using the Morse potential
///
/// `V(r) = De·(1 − exp(−a·(r − re)))² − De`, shifted by the molecule's
/// equilibrium total energy. Finite bond lengths outside the molecule's
/// modeled domain are accepted; the potential is total over the reals.
pub fn classical_energy(molecule_id: &str, bond_length: f64) -> Result<f64> {
    let molecule = MoleculeSpec::lookup(molecule_id)?;
    check_finite("bond length", bond_length)?;

    let MorseParameters { de, a, re } = molecule.morse;
    let x = bond_length - re;
    let well = de * (1.0 - (-a * x).exp()).powi(2) - de;

    Ok(well + molecule.equilibrium_energy)
}

/// Calculate the quantum-corrected energy
///
/// Adds three terms to the classical energy: the zero-point energy
/// `0.5·√(2·De·a²)` (constant per molecule), an oscillatory correction
/// `−0.05·exp(−|x|)·sin(10x)` that is largest near equilibrium, and a
/// quartic anharmonicity term `0.02·x⁴`, with `x = r − re`.
pub fn quantum_energy(molecule_id: &str, bond_length: f64) -> Result<f64> {
    let molecule = MoleculeSpec::lookup(molecule_id)?;
    let classical = classical_energy(molecule_id, bond_length)?;

    let MorseParameters { de, a, re } = molecule.morse;
    let zero_point = 0.5 * (2.0 * de * a * a).sqrt();

    let x = bond_length - re;
    let oscillatory = -0.05 * (-x.abs()).exp() * (10.0 * x).sin();
    let anharmonic = 0.02 * x.powi(4);

    Ok(classical + zero_point + oscillatory + anharmonic)
}

/// Generate evenly spaced energy curve samples for charting
///
/// Samples `num_points` bond lengths from `min` to `max` inclusive
/// (defaulting to the molecule's modeled domain) and evaluates both
/// energies at each. Deterministic: identical arguments produce
/// identical output.
pub fn generate_energy_curve(
    molecule_id: &str,
    min: Option<f64>,
    max: Option<f64>,
    num_points: usize,
) -> Result<Vec<EnergyPoint>> {
    let molecule = MoleculeSpec::lookup(molecule_id)?;

    if num_points < 2 {
        return Err(ModelError::InvalidArgument(format!(
            "curve needs at least 2 points, got {}",
            num_points
        )));
    }

    let min = min.unwrap_or(molecule.min_bond_length);
    let max = max.unwrap_or(molecule.max_bond_length);
    check_finite("curve minimum", min)?;
    check_finite("curve maximum", max)?;

    Array1::linspace(min, max, num_points)
        .iter()
        .map(|&r| {
            Ok(EnergyPoint {
                bond_length: round_to(r, 3),
                classical_energy: round_to(classical_energy(molecule_id, r)?, 4),
                quantum_energy: round_to(quantum_energy(molecule_id, r)?, 4),
            })
        })
        .collect()
}

/// Get both energies and their difference at one bond length
pub fn current_energy_values(molecule_id: &str, bond_length: f64) -> Result<EnergyReading> {
    let classical = classical_energy(molecule_id, bond_length)?;
    let quantum = quantum_energy(molecule_id, bond_length)?;

    Ok(EnergyReading {
        classical: round_to(classical, 4),
        quantum: round_to(quantum, 4),
        difference: round_to(quantum - classical, 4),
    })
}

/// Find the bond length minimizing the quantum energy
///
/// Scans ±0.5 Å around the literature equilibrium at 0.01 Å steps (101
/// samples) and keeps the earliest minimum. This is a local search: a
/// true minimum outside the window will not be found.
pub fn find_optimal_bond_length(molecule_id: &str) -> Result<OptimalBondLength> {
    let molecule = MoleculeSpec::lookup(molecule_id)?;

    const SEARCH_RANGE: f64 = 0.5; // Å
    const STEP: f64 = 0.01; // Å
    let steps = (2.0 * SEARCH_RANGE / STEP).round() as usize;

    let start = molecule.equilibrium_bond_length - SEARCH_RANGE;
    let mut best_length = molecule.equilibrium_bond_length;
    let mut best_energy = f64::INFINITY;

    for i in 0..=steps {
        let r = start + i as f64 * STEP;
        let energy = quantum_energy(molecule_id, r)?;
        if energy < best_energy {
            best_energy = energy;
            best_length = r;
        }
    }

    Ok(OptimalBondLength {
        bond_length: round_to(best_length, 3),
        energy: round_to(best_energy, 4),
    })
}
