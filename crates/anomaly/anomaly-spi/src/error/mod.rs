//! Error module containing error types and result aliases

mod anomaly_error;

pub use anomaly_error::AnomalyError;

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;
