//! Anomaly detector implementations.

mod zscore;

pub use zscore::{scan, scan_with, ZScoreDetector};
