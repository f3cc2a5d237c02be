//! Basic example demonstrating trend fitting and model selection
//!
//! Run with: cargo run --example basic -p trend-facade

use trend_facade::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== trend-facade Basic Examples ===\n");

    // 1. Automatic model selection on a linear series
    println!("1. Linear series");
    let linear: Vec<f64> = (0..30).map(|i| 2.0 * i as f64 + 5.0).collect();
    let fit = analyze(&linear)?;
    println!("   Selected: {} (score {:.4})", fit.kind, fit.score);
    println!("   Formula:  {}", fit.params);
    println!("   Next:     {:.2}\n", fit.params.evaluate(30.0));

    // 2. Exponential growth
    println!("2. Exponential series");
    let growth: Vec<f64> = (0..12).map(|i| 3.0 * (0.35 * i as f64).exp()).collect();
    let fit = analyze(&growth)?;
    println!("   Selected: {} (score {:.4})", fit.kind, fit.score);
    for candidate in &fit.all_scores {
        println!("   candidate {:12} -> {:.4}", candidate.kind.to_string(), candidate.score);
    }
    println!();

    // 3. Using a model directly
    println!("3. Direct quadratic fit");
    let parabola: Vec<f64> = (0..15).map(|i| (i * i) as f64 * 0.5 - 3.0).collect();
    let mut quad = QuadraticTrend::new();
    quad.fit(&parabola)?;
    let (a, b, c) = quad.coefficients();
    println!("   a = {:.4}, b = {:.4}, c = {:.4}", a, b, c);
    println!("   predict_at(20) = {:.2}", quad.predict_at(20.0)?);

    println!("\n=== Examples Complete ===");
    Ok(())
}
