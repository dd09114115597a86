//! Display formatting and report export
//!
//! Thin adapter between the numeric core and the UI: complex-amplitude
//! formatting and the JSON snapshot the export button downloads. No new
//! physics happens here.

use chrono::{DateTime, Utc};
use num_complex::Complex64;
use serde::Serialize;

use crate::quantum::{MeasurementRecord, QubitState};

// Round to 3 decimals, folding -0.0 into 0.0 so it never prints a sign
fn round3(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a complex amplitude for display
///
/// Both parts are rounded to 3 decimals with trailing zeros trimmed.
/// Real-only values print bare (`0.707`), imaginary-only as `-0.5i`,
/// mixed as `0.5 + 0.5i` or `0.5 - 0.5i`.
pub fn format_complex(c: Complex64) -> String {
    let re = round3(c.re);
    let im = round3(c.im);

    if im == 0.0 {
        format!("{}", re)
    } else if re == 0.0 {
        format!("{}i", im)
    } else if im > 0.0 {
        format!("{} + {}i", re, im)
    } else {
        format!("{} - {}i", re, im.abs())
    }
}

/// Formatted amplitudes and probabilities of the current state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    /// Formatted α
    pub amplitude0: String,
    /// Formatted β
    pub amplitude1: String,
    pub probabilities: ProbabilitySnapshot,
}

/// Percentage probabilities, 1 decimal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilitySnapshot {
    pub state0: String,
    pub state1: String,
}

/// Bloch coordinates formatted to 3 decimals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlochSnapshot {
    pub x: String,
    pub y: String,
    pub z: String,
}

/// Exportable snapshot of a qubit session
///
/// Field names serialize in camelCase, matching the JSON schema the
/// visualization's download button has always produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantumReport {
    pub timestamp: DateTime<Utc>,
    pub quantum_state: StateSnapshot,
    pub bloch_sphere: BlochSnapshot,
    pub measurements: Vec<MeasurementRecord>,
    pub operations: String,
}

impl QuantumReport {
    /// Snapshot a state and its measurement history, timestamped now
    pub fn new(state: &QubitState, history: &[MeasurementRecord]) -> Self {
        Self::at(state, history, Utc::now())
    }

    /// Snapshot with an explicit timestamp
    pub fn at(
        state: &QubitState,
        history: &[MeasurementRecord],
        timestamp: DateTime<Utc>,
    ) -> Self {
        let probs = state.probabilities();
        let bloch = state.bloch_vector();

        QuantumReport {
            timestamp,
            quantum_state: StateSnapshot {
                amplitude0: format_complex(state.alpha),
                amplitude1: format_complex(state.beta),
                probabilities: ProbabilitySnapshot {
                    state0: format!("{:.1}%", probs.prob0 * 100.0),
                    state1: format!("{:.1}%", probs.prob1 * 100.0),
                },
            },
            bloch_sphere: BlochSnapshot {
                x: format!("{:.3}", bloch.x),
                y: format!("{:.3}", bloch.y),
                z: format!("{:.3}", bloch.z),
            },
            measurements: history.to_vec(),
            operations: "User applied quantum gates and measurements".to_string(),
        }
    }

    /// Serialize to the pretty-printed JSON payload the UI downloads
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Suggested download filename for this report
    pub fn filename(&self) -> String {
        format!(
            "quantum-visualization-{}.json",
            self.timestamp.timestamp_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_complex_trims_and_rounds() {
        assert_eq!(format_complex(Complex64::new(0.7071, 0.0)), "0.707");
        assert_eq!(format_complex(Complex64::new(0.0, -0.5)), "-0.5i");
        assert_eq!(format_complex(Complex64::new(0.5, 0.5)), "0.5 + 0.5i");
        assert_eq!(format_complex(Complex64::new(0.5, -0.5)), "0.5 - 0.5i");
        assert_eq!(format_complex(Complex64::new(0.0, 0.0)), "0");
        assert_eq!(format_complex(Complex64::new(1.0, 0.0)), "1");
    }

    #[test]
    fn format_complex_never_prints_negative_zero() {
        assert_eq!(format_complex(Complex64::new(-0.0001, 0.0)), "0");
        assert_eq!(format_complex(Complex64::new(0.3, -0.0002)), "0.3");
    }

    #[test]
    fn report_matches_state_views() {
        let state = QubitState::plus();
        let report = QuantumReport::new(&state, &[]);

        assert_eq!(report.quantum_state.amplitude0, "0.707");
        assert_eq!(report.quantum_state.amplitude1, "0.707");
        assert_eq!(report.quantum_state.probabilities.state0, "50.0%");
        assert_eq!(report.quantum_state.probabilities.state1, "50.0%");
        assert_eq!(report.bloch_sphere.x, "1.000");
        assert_eq!(report.bloch_sphere.y, "0.000");
        assert_eq!(report.bloch_sphere.z, "0.000");
        assert!(report.measurements.is_empty());
    }

    #[test]
    fn filename_embeds_timestamp_millis() {
        let timestamp = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let report = QuantumReport::at(&QubitState::plus(), &[], timestamp);
        assert_eq!(
            report.filename(),
            "quantum-visualization-1700000000000.json"
        );
    }
}
