mod cell;
mod error;
mod grid;
mod noise;
mod algorithm;
mod smoothing;

pub use cell::{Cell, WALL_THRESHOLD};
pub use error::{GridError, Result};
pub use grid::{CellChange, Grid};
pub use noise::{NoiseGenerator, DEFAULT_WALL_PROBABILITY};
pub use algorithm::Algorithm;
pub use smoothing::{SmoothingEngine, SmoothOutcome, SmoothReport, DEFAULT_MAX_ITERATIONS};
