//! Performance benchmarks for the analysis pipeline

use std::hint::black_box;
use std::time::Instant;

use report::prelude::*;

fn generate_text(n: usize) -> String {
    (0..n)
        .map(|i| {
            let t = i as f64;
            format!("{:.4}", 100.0 + t * 0.05 + (t * 0.1).sin() * 10.0)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench<F, R>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut() -> R,
{
    // Warmup
    for _ in 0..3 {
        black_box(f());
    }

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(f());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations;

    println!(
        "{:30} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
        name, elapsed, per_iter, iterations
    );
}

fn main() {
    println!("=== Pipeline Performance Benchmarks ===\n");

    let text_1k = generate_text(1_000);
    let text_10k = generate_text(10_000);
    let text_100k = generate_text(100_000);
    let values_10k: Vec<f64> = (0..10_000).map(|i| 100.0 + i as f64 * 0.05).collect();

    println!("--- Parsing ---");
    bench("parse (1K)", 1000, || ingest::parse(&text_1k));
    bench("parse (10K)", 100, || ingest::parse(&text_10k));
    bench("parse (100K)", 10, || ingest::parse(&text_100k));

    println!("\n--- Batch processing ---");
    bench("process_batch (10K)", 100, || {
        process_batch(&values_10k, 1, 0)
    });

    println!("\n--- Full pipeline ---");
    let engine = Engine::new();
    bench("analyze_text (1K)", 100, || engine.analyze_text(&text_1k));
    bench("analyze_text (10K)", 10, || engine.analyze_text(&text_10k));
    bench("analyze_text (100K)", 3, || engine.analyze_text(&text_100k));

    println!("\n=== Benchmarks Complete ===");
}
