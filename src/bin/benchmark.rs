//! Performance benchmark comparing the serial and parallel tick

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sparse_life::{SimulationEngine, Strategy};

fn soup(size: i64, density: f64) -> anyhow::Result<SimulationEngine> {
    let mut engine = SimulationEngine::new();
    engine.set_area(size, size)?;
    let mut rng = StdRng::seed_from_u64(size as u64);
    engine.seed_random(density, &mut rng)?;
    Ok(engine)
}

/// Average milliseconds per generation
fn benchmark(engine: &SimulationEngine, strategy: Strategy, iterations: u32) -> f64 {
    let mut engine = engine.clone();
    let start = Instant::now();
    for _ in 0..iterations {
        engine.step(strategy);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("=== Sparse Life Tick Benchmark ===\n");

    let sizes = [25, 100, 250, 500, 1000];
    let iterations = 20;

    for strategy in Strategy::all() {
        println!("{:>10}: {}", strategy.name(), strategy.description());
    }
    println!();

    println!("{:>10} {:>10} {:>12} {:>12}", "Size", "Live", "Strategy", "ms/gen");
    println!("{:-<48}", "");

    for size in sizes {
        let engine = soup(size, 0.3)?;
        for strategy in Strategy::all() {
            println!(
                "{:>10} {:>10} {:>12} {:>12.2}",
                format!("{}x{}", size, size),
                engine.store().count(),
                strategy.name(),
                benchmark(&engine, strategy, iterations)
            );
        }
    }
    Ok(())
}
