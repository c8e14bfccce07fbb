//! Performance benchmark comparing serial and parallel steps

use std::time::Instant;

use pvp_life::domain::transition;
use pvp_life::{Algorithm, CellStore, GameState, IterationCap, Mode, RandomSoup};

fn soup(extent: i32, mode: Mode) -> CellStore {
    let mut game = GameState::new(mode, IterationCap::Unbounded);
    if let Err(e) = RandomSoup::new(0.3, extent).fill(&mut game, Some(42)) {
        eprintln!("failed to fill soup: {e}");
    }
    game.cells().clone()
}

/// Average milliseconds per generation
fn benchmark(algorithm: Algorithm, start: &CellStore, mode: Mode, iterations: u32) -> f64 {
    let mut current = start.clone();
    let mut next = CellStore::with_capacity(current.count());

    let started = Instant::now();
    for _ in 0..iterations {
        transition::step_with(algorithm, &current, mode, &mut next);
        std::mem::swap(&mut current, &mut next);
    }
    started.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations)
}

fn main() {
    println!("=== Sparse Life Performance Benchmark ===\n");

    let extents = [16, 32, 64, 128, 256, 512];
    let iterations = 20;

    for mode in [Mode::SingleColor, Mode::TwoColor] {
        println!("--- {} ({}) ---", mode.name(), mode.description());
        println!("{:>10} {:>10} {:>12} {:>12} {:>10}",
            "Board", "Cells", "Serial", "Parallel", "Speedup");
        println!("{:-<60}", "");

        for extent in extents {
            let start = soup(extent, mode);
            let serial_ms = benchmark(Algorithm::Serial, &start, mode, iterations);
            let parallel_ms = benchmark(Algorithm::Parallel, &start, mode, iterations);

            println!(
                "{:>10} {:>10} {:>12.2} {:>12.2} {:>9.1}x",
                format!("{}x{}", extent * 2, extent * 2),
                start.count(),
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms.max(f64::EPSILON)
            );
        }
        println!();
    }
}
