// Domain layer - Grid, smoothing and noise
pub mod domain;

// Application layer - Editor state machine and configuration
pub mod application;

// Infrastructure layer - UI, rendering, input, logging
pub mod ui;
pub mod rendering;
pub mod input;
pub mod logging;

// Re-exports for convenience
pub use domain::{
    Algorithm, Cell, CellChange, Grid, GridError, NoiseGenerator, SmoothOutcome, SmoothingEngine,
};
pub use application::{Editor, EditorConfig, Command, InputEvent};
