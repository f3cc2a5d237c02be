//! Basic example demonstrating anomaly detection
//!
//! Run with: cargo run --example basic -p anomaly-facade

use anomaly_facade::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== anomaly-facade Basic Examples ===\n");

    // Steady sensor readings with two injected spikes
    let mut readings: Vec<f64> = (0..60).map(|i| 20.0 + (i as f64 * 0.3).sin()).collect();
    readings[15] = 32.0;
    readings[45] = 120.0;

    // 1. One-shot scan with defaults
    println!("1. One-shot scan (threshold=3.0)");
    let report = scan(&readings);
    println!("   Anomalies: {}", report.anomaly_count());
    for a in &report.anomalies {
        println!(
            "   index {:>3}: {:>8.2} (z = {:.2}, {})",
            a.index, a.value, a.z_score, a.severity
        );
    }
    println!("   Danger: {}\n", report.danger);

    // 2. Fit on reference data, detect on new data
    println!("2. Fit-then-detect");
    let reference: Vec<f64> = (0..100).map(|i| 20.0 + (i as f64 * 0.3).sin()).collect();
    let mut detector = ZScoreDetector::new(3.0);
    detector.fit(&reference)?;
    let probe = vec![20.5, 19.8, 55.0, 20.1];
    let probe_report = detector.detect(&probe)?;
    println!("   Anomalies in probe: {}", probe_report.anomaly_count());

    // 3. Custom thresholds
    println!("\n3. Custom configuration");
    let config = ZScoreConfig {
        threshold: 2.0,
        critical_threshold: 4.0,
    };
    let strict = scan_with(&readings, &config);
    println!(
        "   Stricter threshold finds {} anomalies, danger {}",
        strict.anomaly_count(),
        strict.danger
    );

    println!("\n=== Examples Complete ===");
    Ok(())
}
