use macroquad::prelude::*;

use crate::application::{DragState, Editor};
use crate::domain::{Cell, CellChange, Grid};
use crate::ui::{Button, PanelAction, PANEL_WIDTH, panel_x};

const WALL_COLOR: Color = BLACK;
const OPEN_COLOR: Color = WHITE;
const GRID_LINE_COLOR: Color = Color::new(0.8, 0.8, 0.8, 1.0);

const fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Wall => WALL_COLOR,
        Cell::Open => OPEN_COLOR,
    }
}

/// Per-cell colours mirroring the grid.
/// Kept in sync from change lists rather than by re-reading the whole grid.
pub struct Surface {
    width: usize,
    colors: Vec<Color>,
}

impl Surface {
    pub fn new(grid: &Grid) -> Self {
        let (width, _) = grid.dimensions();
        Self {
            width,
            colors: grid.iter_cells().map(|(_, _, cell)| cell_color(cell)).collect(),
        }
    }

    /// Repaint only the cells that changed
    pub fn apply(&mut self, changes: &[CellChange]) {
        for change in changes {
            let idx = change.row * self.width + change.col;
            if let Some(color) = self.colors.get_mut(idx) {
                *color = cell_color(change.cell);
            }
        }
    }

    pub fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        if col >= self.width {
            return None;
        }
        self.colors.get(row * self.width + col).copied()
    }

    /// Draw every cell as a filled square with an outline
    pub fn draw(&self, cell_size: f32) {
        for (idx, &color) in self.colors.iter().enumerate() {
            let x = (idx % self.width) as f32 * cell_size;
            let y = (idx / self.width) as f32 * cell_size;
            draw_rectangle(x, y, cell_size, cell_size, color);
            if cell_size >= 4.0 {
                draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, GRID_LINE_COLOR);
            }
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the side panel: buttons, key help, census and status
pub fn draw_panel(editor: &Editor, buttons: &[(Button, PanelAction)], mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|(btn, _)| btn.draw(mouse_pos));

    let px = panel_x() + 8.0;
    let grid = editor.grid();
    let (w, h) = grid.dimensions();
    let walls = grid.count(Cell::Wall);

    let help = [
        ("Keys:", 225.0, 14.0, WHITE),
        ("R: Noise", 240.0, 12.0, GRAY),
        ("C: Clear", 253.0, 12.0, GRAY),
        ("S: Smooth", 266.0, 12.0, GRAY),
        ("Click: toggle, drag: paint", 279.0, 12.0, GRAY),
    ];
    help.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let census = format!("Grid: {w}x{h}  Walls: {walls}");
    draw_text(&census, px, 305.0, 12.0, LIGHTGRAY);

    let algo = editor.algorithm();
    draw_text(&format!("Algorithm: {}", algo.name()), px, 320.0, 12.0, LIGHTGRAY);
    draw_text(algo.description(), px, 333.0, 11.0, GRAY);

    let drag = match editor.drag_state() {
        DragState::Idle => "Idle",
        DragState::Painting => "Painting",
    };
    draw_text(&format!("Mode: {drag}"), px, 350.0, 12.0, LIGHTGRAY);

    let status_color = match editor.last_outcome() {
        Some(outcome) if !outcome.is_stable() => ORANGE,
        _ => Color::from_rgba(0, 255, 150, 255),
    };
    draw_text("Status:", px, 375.0, 14.0, WHITE);
    draw_text(editor.status(), px, 392.0, 12.0, status_color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_starts_from_grid() {
        let grid = Grid::from_rows(&["#.", ".#"]).unwrap();
        let surface = Surface::new(&grid);
        assert_eq!(surface.color_at(0, 0), Some(WALL_COLOR));
        assert_eq!(surface.color_at(0, 1), Some(OPEN_COLOR));
        assert_eq!(surface.color_at(1, 1), Some(WALL_COLOR));
        assert_eq!(surface.color_at(0, 2), None);
        assert_eq!(surface.color_at(2, 0), None);
    }

    #[test]
    fn test_surface_follows_changes() {
        let mut grid = Grid::from_rows(&["##.", "..#"]).unwrap();
        let mut surface = Surface::new(&grid);
        let changes = grid.clear();
        surface.apply(&changes);
        assert_eq!(surface.colors, Surface::new(&grid).colors);
    }
}
