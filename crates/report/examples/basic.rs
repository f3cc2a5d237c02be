//! Basic example running the full analysis pipeline on a messy text stream.
//!
//! Run with: cargo run --example basic -p report

use report::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "report=debug".into()),
        )
        .init();

    println!("=== trendful-ts Basic Example ===\n");

    // A messy stream: brackets, commas, missing-value markers, one spike
    let mut tokens: Vec<String> = (0..200).map(|i| (2.5 * i as f64 + 10.0).to_string()).collect();
    tokens[50] = "NULL".to_string();
    tokens[80] = "N/A".to_string();
    tokens[120] = "100000".to_string();
    let text = format!("[{}]", tokens.join(", "));

    let started = std::time::Instant::now();
    let analysis = Engine::new().analyze_text(&text)?;
    let elapsed = started.elapsed();
    let overall = &analysis.overall;

    println!("Input points:    {}", overall.total_points);
    println!("Valid points:    {}", overall.valid_points);
    println!("Invalid points:  {}", overall.invalid_points);
    println!("Batches:         {}", overall.batches);
    println!();
    println!("Mean:            {:.4}", overall.mean);
    println!("Std deviation:   {:.4}", overall.std_dev);
    println!("Model:           {}", overall.best_fit.kind);
    println!("Formula:         {}", overall.best_fit.params);
    println!("Confidence:      {:.2}%", overall.avg_score * 100.0);
    println!();
    println!("Anomalies:       {}", overall.total_anomalies);
    for (batch, anomaly) in analysis.all_anomalies() {
        println!(
            "   batch {} index {}: {:.2} (z = {:.2}, {})",
            batch, anomaly.index, anomaly.value, anomaly.z_score, anomaly.severity
        );
    }
    println!("Risk level:      {}", overall.danger);
    println!("Stability:       {:.2}%", overall.stability);
    println!();
    println!("Predictions:");
    for p in &overall.predictions {
        println!(
            "   position {:>5}: {:>12.4} (+/-{:.2})",
            p.position, p.value, p.uncertainty
        );
    }
    println!();
    println!("Analyzed in {:.2?}", elapsed);

    Ok(())
}
