//! Static molecule data
//!
//! Literature constants for the small set of molecules the visualization
//! supports. Everything here is defined at process start and never mutated.

use serde::Serialize;

use crate::error::{ModelError, Result};

/// Morse potential parameters for one molecule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MorseParameters {
    /// Dissociation energy De in eV
    pub de: f64,
    /// Decay constant a in Å⁻¹
    pub a: f64,
    /// Equilibrium bond length re in Å
    pub re: f64,
}

/// A supported molecule with its physical constants and display metadata
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoleculeSpec {
    /// Identifier used by the UI ("h2", "lih", "h2o")
    pub id: &'static str,
    /// Short display name
    pub name: &'static str,
    /// Full chemical name
    pub full_name: &'static str,
    /// One-line description shown in the molecule picker
    pub description: &'static str,
    /// Number of atoms
    pub atoms: u32,
    /// Difficulty tag shown in the UI
    pub difficulty: &'static str,
    /// Equilibrium bond length in Å
    pub equilibrium_bond_length: f64,
    /// Total electronic energy at equilibrium in eV
    pub equilibrium_energy: f64,
    /// Dissociation energy in eV
    pub dissociation_energy: f64,
    /// Lower end of the modeled bond-length domain in Å
    pub min_bond_length: f64,
    /// Upper end of the modeled bond-length domain in Å
    pub max_bond_length: f64,
    /// Slider step suggested to the UI in Å
    pub optimal_step: f64,
    /// Morse parameters; `re` and `de` duplicate the fields above
    pub morse: MorseParameters,
}

/// All supported molecules, keyed by `id`
pub const MOLECULES: [MoleculeSpec; 3] = [
    MoleculeSpec {
        id: "h2",
        name: "H₂",
        full_name: "Hydrogen Molecule",
        description: "Simplest molecular system - perfect for quantum algorithm testing",
        atoms: 2,
        difficulty: "Beginner",
        equilibrium_bond_length: 0.74,
        equilibrium_energy: -1.174,
        dissociation_energy: 4.52,
        min_bond_length: 0.4,
        max_bond_length: 4.0,
        optimal_step: 0.05,
        morse: MorseParameters {
            de: 4.52,
            a: 1.94,
            re: 0.74,
        },
    },
    MoleculeSpec {
        id: "lih",
        name: "LiH",
        full_name: "Lithium Hydride",
        description: "Ionic-covalent bonding showcase with interesting electronic structure",
        atoms: 2,
        difficulty: "Intermediate",
        equilibrium_bond_length: 1.59,
        equilibrium_energy: -2.431,
        dissociation_energy: 2.43,
        min_bond_length: 1.0,
        max_bond_length: 5.0,
        optimal_step: 0.1,
        morse: MorseParameters {
            de: 2.43,
            a: 1.13,
            re: 1.59,
        },
    },
    MoleculeSpec {
        id: "h2o",
        name: "H₂O",
        full_name: "Water Molecule",
        description: "Complex multi-electron system with bent geometry",
        atoms: 3,
        difficulty: "Advanced",
        equilibrium_bond_length: 0.96,
        equilibrium_energy: -10.06,
        dissociation_energy: 5.10,
        min_bond_length: 0.7,
        max_bond_length: 3.0,
        optimal_step: 0.05,
        morse: MorseParameters {
            de: 5.10,
            a: 2.13,
            re: 0.96,
        },
    },
];

impl MoleculeSpec {
    /// Look up a molecule by identifier
    pub fn lookup(id: &str) -> Result<&'static MoleculeSpec> {
        MOLECULES
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| ModelError::UnknownMolecule(id.to_string()))
    }
}
