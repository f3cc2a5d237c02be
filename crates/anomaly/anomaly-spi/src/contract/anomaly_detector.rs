//! Anomaly detector contract.

use crate::error::Result;
use crate::model::DetectionReport;

/// Common trait for all anomaly detectors.
pub trait AnomalyDetector {
    /// Fit the detector to reference data.
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Detect outliers in the given data.
    fn detect(&self, data: &[f64]) -> Result<DetectionReport>;

    /// Score each point (higher = more anomalous).
    fn score(&self, data: &[f64]) -> Result<Vec<f64>>;

    /// Check if the detector has been fitted.
    fn is_fitted(&self) -> bool;
}
