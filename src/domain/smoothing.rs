//! Cave smoothing: the 8-neighbor majority rule and the run-to-stability driver.
//!
//! Every pass reads a snapshot of the grid and writes a fresh buffer, so
//! no cell ever sees a neighbor's already-updated value.

use std::fmt;

use rayon::prelude::*;

use super::{Algorithm, Cell, CellChange, Grid};

/// Pass cap used by the editor
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// How a smoothing run ended, with the number of passes executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmoothOutcome {
    /// A pass reported no change. The count includes that final pass.
    Stabilized(usize),
    /// Every pass up to the cap changed something; the grid holds the last pass.
    MaxIterationsReached(usize),
}

impl SmoothOutcome {
    pub const fn iterations(self) -> usize {
        match self {
            SmoothOutcome::Stabilized(n) | SmoothOutcome::MaxIterationsReached(n) => n,
        }
    }

    pub const fn is_stable(self) -> bool {
        matches!(self, SmoothOutcome::Stabilized(_))
    }
}

impl fmt::Display for SmoothOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmoothOutcome::Stabilized(n) => write!(f, "Stabilized after {n} iterations"),
            SmoothOutcome::MaxIterationsReached(n) => write!(f, "Stopped after {n} iterations"),
        }
    }
}

/// Result of a full smoothing run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmoothReport {
    pub outcome: SmoothOutcome,
    /// Cells that differ between the grid before the run and after it
    pub changes: Vec<CellChange>,
}

/// Applies the smoothing rule to a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmoothingEngine {
    pub max_iterations: usize,
    pub algorithm: Algorithm,
}

impl Default for SmoothingEngine {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            algorithm: Algorithm::default(),
        }
    }
}

impl SmoothingEngine {
    pub fn new(max_iterations: usize, algorithm: Algorithm) -> Self {
        Self {
            max_iterations,
            algorithm,
        }
    }

    /// Run one pass. Returns whether any cell changed.
    pub fn smooth_once(&self, grid: &mut Grid) -> bool {
        let next = match self.algorithm {
            Algorithm::Serial => next_generation(grid),
            Algorithm::Parallel => next_generation_parallel(grid),
        };
        let changed = next.as_slice() != grid.cells();
        grid.swap_cells(next);
        changed
    }

    /// Run passes until one changes nothing or the cap is hit.
    pub fn smooth(&self, grid: &mut Grid) -> SmoothReport {
        let before = grid.cells().to_vec();
        let mut outcome = SmoothOutcome::MaxIterationsReached(self.max_iterations);

        for pass in 1..=self.max_iterations {
            if !self.smooth_once(grid) {
                outcome = SmoothOutcome::Stabilized(pass);
                break;
            }
        }

        let changes = grid.diff_from(&before);
        log::info!("{outcome} ({} cells changed)", changes.len());
        SmoothReport { outcome, changes }
    }
}

/// Count walls among the 8 neighbors, with off-grid positions counted as walls
fn count_wall_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);

    (-1..=1)
        .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .filter(|&(dr, dc)| grid.is_wall_or_outside(row + dr, col + dc))
        .count() as u8
}

fn next_cell(grid: &Grid, idx: usize) -> Cell {
    let (width, _) = grid.dimensions();
    Cell::smooth(count_wall_neighbors(grid, idx / width, idx % width))
}

/// Serial pass into a fresh buffer
fn next_generation(grid: &Grid) -> Vec<Cell> {
    (0..grid.cells().len()).map(|idx| next_cell(grid, idx)).collect()
}

/// Parallel pass into a fresh buffer; same output as the serial pass
fn next_generation_parallel(grid: &Grid) -> Vec<Cell> {
    (0..grid.cells().len())
        .into_par_iter()
        .map(|idx| next_cell(grid, idx))
        .collect()
}
