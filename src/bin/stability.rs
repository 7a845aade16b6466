//! Passes-to-stability report for the default board

use rand::{SeedableRng, rngs::StdRng};
use space_gen::EditorConfig;
use space_gen::domain::{Algorithm, Grid, NoiseGenerator, SmoothReport, SmoothingEngine};

const SEEDS: u64 = 8;

/// Seed a board of the configured size and smooth it with the given pass implementation
fn run(config: &EditorConfig, seed: u64, algorithm: Algorithm) -> (Grid, SmoothReport) {
    let mut grid = Grid::new(config.width, config.height);
    let mut rng = StdRng::seed_from_u64(seed);
    NoiseGenerator::default().seed(&mut grid, &mut rng);

    let report = SmoothingEngine::new(config.max_iterations, algorithm).smooth(&mut grid);
    (grid, report)
}

fn main() {
    let config = EditorConfig::default();
    println!("=== Cave smoothing, {}x{} board ===\n", config.width, config.height);
    println!("{:>6} {:>32} {:>10} {:>8}", "Seed", "Outcome", "Changed", "Agree");
    println!("{:-<60}", "");

    for seed in 0..SEEDS {
        let (serial_grid, report) = run(&config, seed, Algorithm::Serial);
        let (parallel_grid, _) = run(&config, seed, Algorithm::Parallel);
        let agree = if serial_grid == parallel_grid { "yes" } else { "NO" };
        println!(
            "{:>6} {:>32} {:>10} {:>8}",
            seed,
            report.outcome.to_string(),
            report.changes.len(),
            agree
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_on_default_board() {
        let config = EditorConfig::default();
        let (grid, report) = run(&config, 0, Algorithm::Serial);
        assert_eq!(grid.dimensions(), (50, 50));
        assert!(report.outcome.iterations() <= config.max_iterations);
    }

    #[test]
    fn test_pass_implementations_agree() {
        let config = EditorConfig::default();
        for seed in 0..3 {
            let (serial, a) = run(&config, seed, Algorithm::Serial);
            let (parallel, b) = run(&config, seed, Algorithm::Parallel);
            assert_eq!(serial, parallel);
            assert_eq!(a, b);
        }
    }
}
