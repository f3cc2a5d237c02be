//! Individual outlier records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity tier of a single outlier.
///
/// Only samples past the detection threshold get a record at all; within
/// those, `Critical` marks the extreme tail (z-score above 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "HIGH"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// One detected outlier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Index of the sample within the scanned sequence.
    pub index: usize,
    /// The offending value.
    pub value: f64,
    /// Z-score magnitude (always non-negative).
    pub z_score: f64,
    /// Severity tier.
    pub severity: Severity,
}
