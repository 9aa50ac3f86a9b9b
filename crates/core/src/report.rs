//! Structured estimation results, consumable by any renderer.

use crate::algorithm::AuxMap;
use crate::numerics::round_or_truncate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// One `(time, memory, parameters)` block; `INFINITY` encodes "no feasible
/// sample / not implemented" and renders as `--`.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateBlock {
    pub time: f64,
    pub memory: f64,
    pub parameters: BTreeMap<String, i64>,
}

impl EstimateBlock {
    pub fn infeasible() -> Self {
        Self {
            time: f64::INFINITY,
            memory: f64::INFINITY,
            parameters: BTreeMap::new(),
        }
    }
}

/// Per-algorithm slice of the report.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmReport {
    pub algorithm: String,
    pub estimate: EstimateBlock,
    #[serde(skip_serializing_if = "AuxMap::is_empty")]
    pub additional_information: AuxMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tilde_o_estimate: Option<EstimateBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum_estimate: Option<f64>,
}

/// The full estimation result in registration order, together with the
/// rendering options a table renderer needs to format it.
#[derive(Debug, Clone)]
pub struct Report {
    pub entries: Vec<AlgorithmReport>,
    pub precision: usize,
    pub truncate: bool,
    pub show_all_parameters: bool,
}

impl Report {
    pub fn get(&self, algorithm: &str) -> Option<&AlgorithmReport> {
        self.entries.iter().find(|e| e.algorithm == algorithm)
    }

    /// Entry with the smallest time; ties go to the earlier entry.
    pub fn fastest(&self) -> Option<&AlgorithmReport> {
        let mut best: Option<&AlgorithmReport> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.estimate.time < b.estimate.time) {
                best = Some(entry);
            }
        }
        best
    }

    /// Formats one complexity value per the report's precision settings;
    /// non-finite values become `--`.
    pub fn format_value(&self, x: f64) -> String {
        format_complexity(x, self.truncate, self.precision)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// Serialised as a mapping `algorithm -> {estimate, ...}` so any JSON
// consumer can index by name; entry order is preserved.
impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.algorithm, entry)?;
        }
        map.end()
    }
}

/// `--` for non-finite values, fixed-point otherwise.
pub fn format_complexity(x: f64, truncate: bool, precision: usize) -> String {
    if !x.is_finite() {
        return "--".to_string();
    }
    round_or_truncate(x, truncate, precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report {
            entries: vec![
                AlgorithmReport {
                    algorithm: "Alpha".into(),
                    estimate: EstimateBlock {
                        time: 28.34,
                        memory: 12.71,
                        parameters: BTreeMap::from([("r".to_string(), 4)]),
                    },
                    additional_information: AuxMap::new(),
                    tilde_o_estimate: None,
                    quantum_estimate: None,
                },
                AlgorithmReport {
                    algorithm: "Beta".into(),
                    estimate: EstimateBlock::infeasible(),
                    additional_information: AuxMap::new(),
                    tilde_o_estimate: None,
                    quantum_estimate: None,
                },
            ],
            precision: 1,
            truncate: false,
            show_all_parameters: false,
        }
    }

    #[test]
    fn test_fastest_skips_to_minimum() {
        let report = sample_report();
        assert_eq!(report.fastest().unwrap().algorithm, "Alpha");
    }

    #[test]
    fn test_format_value() {
        let report = sample_report();
        assert_eq!(report.format_value(28.34), "28.3");
        assert_eq!(report.format_value(f64::INFINITY), "--");
    }

    #[test]
    fn test_json_is_keyed_by_algorithm() {
        let report = sample_report();
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert!((json["Alpha"]["estimate"]["time"].as_f64().unwrap() - 28.34).abs() < 1e-9);
        // INFINITY is not representable in JSON and becomes null.
        assert!(json["Beta"]["estimate"]["time"].is_null());
    }
}
