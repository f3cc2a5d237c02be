//! Detection result types.

use crate::model::{Anomaly, RiskLevel};
use serde::{Deserialize, Serialize};

/// Result of scanning one sequence for outliers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Outliers found, in index order.
    pub anomalies: Vec<Anomaly>,
    /// Danger rating for the whole sequence.
    pub danger: RiskLevel,
    /// Z-score threshold used for detection.
    pub threshold: f64,
}

impl DetectionReport {
    /// Create a report from detected anomalies.
    pub fn new(anomalies: Vec<Anomaly>, threshold: f64) -> Self {
        let danger = RiskLevel::from_anomalies(&anomalies);
        Self {
            anomalies,
            danger,
            threshold,
        }
    }

    /// An empty report: nothing found, low risk.
    pub fn empty(threshold: f64) -> Self {
        Self::new(Vec::new(), threshold)
    }

    /// Count of detected outliers.
    pub fn anomaly_count(&self) -> usize {
        self.anomalies.len()
    }

    /// True when no outliers were found.
    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty()
    }
}
