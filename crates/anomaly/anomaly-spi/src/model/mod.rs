//! Model module containing data structures

mod anomaly;
mod detection_report;
mod risk;

pub use anomaly::{Anomaly, Severity};
pub use detection_report::DetectionReport;
pub use risk::RiskLevel;
