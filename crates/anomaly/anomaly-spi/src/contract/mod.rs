//! Contract module containing trait definitions for anomaly detection

mod anomaly_detector;

pub use anomaly_detector::AnomalyDetector;
