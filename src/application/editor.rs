use rand::{SeedableRng, rngs::StdRng};

use super::EditorConfig;
use crate::domain::{
    Algorithm, Cell, CellChange, Grid, NoiseGenerator, Result, SmoothOutcome, SmoothingEngine,
};

/// Mouse drag state, independent of grid content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Painting,
}

/// Named commands bound to keys and panel buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    RandomizeNoise,
    ClearAll,
    Smooth,
}

impl Command {
    /// Key bindings: r = noise, c = clear, s = smooth
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'r' => Some(Command::RandomizeNoise),
            'c' => Some(Command::ClearAll),
            's' => Some(Command::Smooth),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::RandomizeNoise => "Noise",
            Command::ClearAll => "Clear",
            Command::Smooth => "Smooth",
        }
    }
}

/// Toolkit-independent input, in board pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerDrag { x: f32, y: f32 },
    PointerUp,
    KeyPress(char),
}

/// Editor owns the grid and turns input events into grid operations.
/// Every handler returns the cells whose state changed, for the renderer.
pub struct Editor {
    grid: Grid,
    config: EditorConfig,
    engine: SmoothingEngine,
    noise: NoiseGenerator,
    rng: StdRng,
    drag: DragState,
    last_outcome: Option<SmoothOutcome>,
    status: String,
}

impl Editor {
    /// Fails if the configured wall probability is outside [0, 1]
    pub fn new(config: EditorConfig) -> Result<Self> {
        let noise = NoiseGenerator::new(config.wall_probability)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            grid: Grid::new(config.width, config.height),
            engine: SmoothingEngine::new(config.max_iterations, config.algorithm),
            noise,
            rng,
            drag: DragState::Idle,
            last_outcome: None,
            status: "Ready".to_string(),
            config,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn algorithm(&self) -> Algorithm {
        self.engine.algorithm
    }

    pub fn last_outcome(&self) -> Option<SmoothOutcome> {
        self.last_outcome
    }

    /// Last human-readable status line
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.engine.algorithm = algorithm;
        self.status = format!("Algorithm: {}", algorithm.name());
    }

    /// Dispatch one input event. Errors are logged and yield no changes.
    pub fn handle(&mut self, event: InputEvent) -> Vec<CellChange> {
        let result = match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerDrag { x, y } => self.pointer_drag(x, y),
            InputEvent::PointerUp => {
                self.drag = DragState::Idle;
                Ok(Vec::new())
            }
            InputEvent::KeyPress(key) => match Command::from_key(key) {
                Some(command) => Ok(self.run(command)),
                None => Ok(Vec::new()),
            },
        };

        result.unwrap_or_else(|err| {
            log::warn!("{err}");
            Vec::new()
        })
    }

    /// Run a named command
    pub fn run(&mut self, command: Command) -> Vec<CellChange> {
        match command {
            Command::RandomizeNoise => self.randomize(),
            Command::ClearAll => self.clear(),
            Command::Smooth => self.smooth(),
        }
    }

    /// Start painting; toggles the cell under the pointer
    fn pointer_down(&mut self, x: f32, y: f32) -> Result<Vec<CellChange>> {
        self.drag = DragState::Painting;

        let Some((row, col)) = self.config.cell_at(x, y) else {
            return Ok(Vec::new());
        };
        let cell = self.grid.toggle(row, col)?;
        log::debug!("cell [{row}][{col}] = {cell:?}");
        self.status = format!("Cell [{row}][{col}] = {cell:?}");
        Ok(vec![CellChange { row, col, cell }])
    }

    /// While painting, turn open cells under the pointer into walls
    fn pointer_drag(&mut self, x: f32, y: f32) -> Result<Vec<CellChange>> {
        if self.drag != DragState::Painting {
            return Ok(Vec::new());
        }
        let Some((row, col)) = self.config.cell_at(x, y) else {
            return Ok(Vec::new());
        };

        if self.grid.set(row, col, Cell::Wall)? {
            Ok(vec![CellChange { row, col, cell: Cell::Wall }])
        } else {
            Ok(Vec::new())
        }
    }

    pub fn randomize(&mut self) -> Vec<CellChange> {
        let changes = self.noise.seed(&mut self.grid, &mut self.rng);
        self.status = format!(
            "Random noise generated ({:.0}% walls)",
            self.noise.wall_probability() * 100.0
        );
        log::info!("{}", self.status);
        changes
    }

    pub fn clear(&mut self) -> Vec<CellChange> {
        let changes = self.grid.clear();
        self.status = "Grid cleared".to_string();
        log::info!("grid cleared ({} cells changed)", changes.len());
        changes
    }

    /// Smooth to stability or the pass cap; changes are reported once for the whole run
    pub fn smooth(&mut self) -> Vec<CellChange> {
        let report = self.engine.smooth(&mut self.grid);
        self.last_outcome = Some(report.outcome);
        self.status = report.outcome.to_string();
        report.changes
    }
}
