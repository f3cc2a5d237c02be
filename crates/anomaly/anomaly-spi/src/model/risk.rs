//! Danger rating for a scanned sequence.

use crate::model::{Anomaly, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Danger rating derived from the anomalies found in a sequence.
///
/// Ordered so that the worst rating across batches is simply the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    High,
    Critical,
}

impl RiskLevel {
    /// Rate a set of anomalies: critical if any critical outlier exists,
    /// high if any outlier exists, low otherwise.
    pub fn from_anomalies(anomalies: &[Anomaly]) -> Self {
        if anomalies.iter().any(|a| a.severity == Severity::Critical) {
            RiskLevel::Critical
        } else if anomalies.is_empty() {
            RiskLevel::Low
        } else {
            RiskLevel::High
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}
