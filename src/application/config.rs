use crate::domain::{Algorithm, DEFAULT_MAX_ITERATIONS, DEFAULT_WALL_PROBABILITY};

/// Editor settings. Defaults reproduce the classic 50×50 board.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    pub width: usize,
    pub height: usize,
    /// Side of one cell on screen, in pixels
    pub cell_size: f32,
    pub max_iterations: usize,
    pub wall_probability: f64,
    pub algorithm: Algorithm,
    /// Fixed RNG seed for reproducible noise; None seeds from the OS
    pub seed: Option<u64>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            cell_size: 10.0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            wall_probability: DEFAULT_WALL_PROBABILITY,
            algorithm: Algorithm::default(),
            seed: None,
        }
    }
}

impl EditorConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_wall_probability(mut self, wall_probability: f64) -> Self {
        self.wall_probability = wall_probability;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Defaults plus `SPACEGEN_*` environment overrides
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup. Unparseable values are logged and skipped.
    /// Board geometry is never overridden.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(seed) = parse_var(&lookup, "SPACEGEN_SEED") {
            self.seed = Some(seed);
        }
        if let Some(p) = parse_var(&lookup, "SPACEGEN_WALL_PROBABILITY") {
            self.wall_probability = p;
        }
        if let Some(n) = parse_var(&lookup, "SPACEGEN_MAX_ITERATIONS") {
            self.max_iterations = n;
        }
        self
    }

    /// Map a pixel position on the board to (row, col).
    /// Positions off the board map to None.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 || self.cell_size <= 0.0 {
            return None;
        }
        let row = (y / self.cell_size) as usize;
        let col = (x / self.cell_size) as usize;
        (row < self.height && col < self.width).then_some((row, col))
    }

    /// Board size in pixels as (width, height)
    pub fn board_pixels(&self) -> (f32, f32) {
        (
            self.width as f32 * self.cell_size,
            self.height as f32 * self.cell_size,
        )
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}
