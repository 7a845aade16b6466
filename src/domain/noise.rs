use rand::Rng;

use super::{Cell, CellChange, Grid, GridError, Result};

/// Share of cells seeded as walls by default
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.45;

/// Seeds a grid with independent per-cell random walls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseGenerator {
    wall_probability: f64,
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self {
            wall_probability: DEFAULT_WALL_PROBABILITY,
        }
    }
}

impl NoiseGenerator {
    /// Rejects probabilities outside [0, 1], NaN included
    pub fn new(wall_probability: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&wall_probability) {
            Ok(Self { wall_probability })
        } else {
            Err(GridError::InvalidProbability(wall_probability))
        }
    }

    pub const fn wall_probability(&self) -> f64 {
        self.wall_probability
    }

    /// Overwrite every cell: wall with `wall_probability`, open otherwise.
    /// Prior content is discarded.
    pub fn seed(&self, grid: &mut Grid, rng: &mut impl Rng) -> Vec<CellChange> {
        let next = (0..grid.cells().len())
            .map(|_| {
                if rng.random::<f64>() < self.wall_probability {
                    Cell::Wall
                } else {
                    Cell::Open
                }
            })
            .collect();

        let changes = grid.replace_cells(next);
        log::debug!(
            "seeded {} walls at p={} ({} cells changed)",
            grid.count(Cell::Wall),
            self.wall_probability,
            changes.len()
        );
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_rejects_bad_probability() {
        assert_eq!(NoiseGenerator::new(1.5), Err(GridError::InvalidProbability(1.5)));
        assert_eq!(NoiseGenerator::new(-0.1), Err(GridError::InvalidProbability(-0.1)));
        assert!(NoiseGenerator::new(f64::NAN).is_err());
        assert!(NoiseGenerator::new(0.0).is_ok());
        assert!(NoiseGenerator::new(1.0).is_ok());
    }

    #[test]
    fn test_zero_probability_all_open() {
        let mut grid = Grid::from_rows(&["##", "##"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let changes = NoiseGenerator::new(0.0).unwrap().seed(&mut grid, &mut rng);
        assert_eq!(grid.count(Cell::Open), 4);
        assert_eq!(changes.len(), 4);
    }

    #[test]
    fn test_full_probability_all_wall() {
        let mut grid = Grid::new(10, 10);
        let mut rng = StdRng::seed_from_u64(1);
        NoiseGenerator::new(1.0).unwrap().seed(&mut grid, &mut rng);
        assert_eq!(grid.count(Cell::Wall), 100);
    }

    #[test]
    fn test_seed_overwrites_prior_walls() {
        let mut grid = Grid::new(6, 6);
        let mut rng = StdRng::seed_from_u64(9);
        NoiseGenerator::new(1.0).unwrap().seed(&mut grid, &mut rng);
        NoiseGenerator::new(0.0).unwrap().seed(&mut grid, &mut rng);
        assert_eq!(grid.count(Cell::Wall), 0);
    }

    #[test]
    fn test_same_seed_same_noise() {
        let noise = NoiseGenerator::default();
        let mut a = Grid::new(20, 20);
        let mut b = Grid::new(20, 20);
        noise.seed(&mut a, &mut StdRng::seed_from_u64(5));
        noise.seed(&mut b, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_density_is_roughly_right() {
        let mut grid = Grid::new(100, 100);
        let mut rng = StdRng::seed_from_u64(1234);
        NoiseGenerator::default().seed(&mut grid, &mut rng);
        let walls = grid.count(Cell::Wall);
        assert!((3500..5500).contains(&walls), "walls = {walls}");
    }

    #[test]
    fn test_changes_reflect_final_state() {
        let mut grid = Grid::new(8, 8);
        let mut rng = StdRng::seed_from_u64(77);
        let changes = NoiseGenerator::default().seed(&mut grid, &mut rng);
        // Starting from all open, exactly the new walls are reported.
        assert_eq!(changes.len(), grid.count(Cell::Wall));
        for change in changes {
            assert_eq!(change.cell, Cell::Wall);
            assert_eq!(grid.get(change.row, change.col), Ok(Cell::Wall));
        }
    }
}
