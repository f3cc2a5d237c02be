//! Anomaly Detection Facade
//!
//! Unified re-exports for the anomaly detection module.
//!
//! This facade provides a single entry point to all anomaly detection
//! functionality:
//! - `AnomalyDetector` trait, `Anomaly`, `DetectionReport`, `RiskLevel` from SPI
//! - `ZScoreConfig` from API
//! - `ZScoreDetector` and the one-shot `scan` from Core

// Re-export everything from SPI
pub use anomaly_spi::*;

// Re-export everything from API
pub use anomaly_api::*;

// Re-export everything from Core
pub use anomaly_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use anomaly_api::ZScoreConfig;
    pub use anomaly_core::{scan, scan_with, ZScoreDetector};
    pub use anomaly_spi::{
        Anomaly, AnomalyDetector, AnomalyError, DetectionReport, Result, RiskLevel, Severity,
    };
}
