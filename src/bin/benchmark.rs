//! Performance benchmark comparing the neighbour-counting strategies

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use ecs_life::domain::{Algorithm, CellStore, commit_system, lifecycle_system, populate};

/// Random ~30% population on a `size × size` arena
fn seeded_store(size: usize) -> CellStore {
    let mut store = CellStore::with_capacity(size * size);
    let mut rng = StdRng::seed_from_u64(0x5eed);
    populate(&mut store, size, size, size * size * 3 / 10, &mut rng);
    store
}

/// Average milliseconds per generation (lifecycle + commit)
fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let mut store = seeded_store(size);

    let start = Instant::now();
    for _ in 0..iterations {
        lifecycle_system(&mut store, algorithm);
        commit_system(&mut store);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Generation Benchmark ===\n");

    let sizes = [50, 100, 200, 500, 1000];
    let iterations = 10;

    println!("{:>10} {:>12} {:>12} {:>12} {:>10}",
        "Size", "Naive", "Lookup", "Parallel", "Speedup");
    println!("{:-<60}", "");

    for size in sizes {
        // The pairwise scan is quadratic; skip it where it would take minutes
        let naive_ms = if size <= 200 {
            benchmark(Algorithm::NaiveScan, size, iterations)
        } else {
            0.0
        };
        let lookup_ms = benchmark(Algorithm::Lookup, size, iterations);
        let parallel_ms = benchmark(Algorithm::LookupParallel, size, iterations);

        let naive_str = if naive_ms > 0.0 { format!("{:>12.2}", naive_ms) } else { format!("{:>12}", "-") };
        let speedup = lookup_ms / parallel_ms.max(f64::EPSILON);

        println!(
            "{:>10} {} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            naive_str,
            lookup_ms,
            parallel_ms,
            speedup
        );
    }

    let size = 1000;
    let cells = (size * size) as f64;
    let parallel_ms = benchmark(Algorithm::LookupParallel, size, iterations);
    println!("\n=== Throughput at {}x{} ===\n", size, size);
    println!("Lookup+Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms, cells / (parallel_ms / 1000.0) / 1_000_000.0);
}
