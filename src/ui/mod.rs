mod button;

pub use button::Button;

// UI constants - functions for layout relative to the window
use macroquad::prelude::screen_width;

use crate::application::Command;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Smallest window height that still fits the panel
pub const MIN_WINDOW_HEIGHT: f32 = 420.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    Run(Command),
    CycleAlgorithm,
}

/// Create panel buttons with standard layout
pub fn create_buttons() -> Vec<(Button, PanelAction)> {
    let px = panel_x();
    [
        PanelAction::Run(Command::RandomizeNoise),
        PanelAction::Run(Command::ClearAll),
        PanelAction::Run(Command::Smooth),
        PanelAction::CycleAlgorithm,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, action)| {
        let label = match action {
            PanelAction::Run(command) => command.label(),
            PanelAction::CycleAlgorithm => "Algorithm",
        };
        let y = 20.0 + i as f32 * (BUTTON_HEIGHT + 10.0);
        (Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, label), action)
    })
    .collect()
}
