//! CopyBench CLI - Memory Copy Throughput Benchmark
//!
//! Selects a copy backend from a single positional digit, runs the
//! benchmark harness over it, and prints the timing protocol to stdout.

use clap::Parser;
use copybench::config::{BenchMode, CliArgs};
use copybench::core::CopyPool;
use copybench::error::{CopyBenchError, Result};
use copybench::harness::{self, BenchConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let mode = match args.backend.as_deref() {
        Some(selector) => match BenchMode::from_selector(selector) {
            Ok(mode) => mode,
            Err(err) => {
                tracing::debug!("{}", err);
                usage();
                std::process::exit(1);
            }
        },
        None => {
            usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(mode) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("OK!");
}

fn usage() {
    let app = std::env::args()
        .next()
        .unwrap_or_else(|| String::from("copybench"));
    println!(
        "Usage: {} 1|2|3|4|5 [1 == std, 2 == avx2, 3 == avx-512, 4 == movsb and 5 == multithreaded avx2]",
        app
    );
}

fn run(mode: BenchMode) -> Result<()> {
    let backend = mode.backend();
    if !backend.is_supported() {
        return Err(CopyBenchError::UnsupportedCpu {
            backend: backend.name(),
            feature: backend.required_feature().unwrap_or("unknown"),
        });
    }

    let config = BenchConfig::default();

    let stats = match mode {
        BenchMode::Single(backend) => {
            let routine = backend.routine();
            harness::run(mode.label(), &config, |dst, src| routine.copy(dst, src))
        }
        BenchMode::Multithreaded { backend, workers } => {
            let mut pool = CopyPool::new(workers);
            pool.set_backend(backend);
            let stats = harness::run(mode.label(), &config, |dst, src| pool.exec(dst, src));
            pool.shutdown();
            stats
        }
    };

    stats.print_summary();
    Ok(())
}
