use std::fmt;

use super::{Cell, GridError, Result};

/// A single cell whose state changed during an operation.
/// Mutating operations hand these to the renderer instead of forcing a full redraw.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    pub cell: Cell,
}

/// Grid owns the dense W×H cave map.
/// Coordinates are (row, col); storage is row-major.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell open
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Open; width * height],
        }
    }

    /// Build a grid from text rows, `#` for walls and `.` for open cells.
    /// Returns None for empty, ragged or unrecognised input.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let width = rows.first()?.chars().count();
        if width == 0 {
            return None;
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            if row.chars().count() != width {
                return None;
            }
            for c in row.chars() {
                cells.push(Cell::from_symbol(c)?);
            }
        }
        Some(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.height && col < self.width {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get cell at position
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Write a cell. Returns whether the stored value actually changed.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<bool> {
        let idx = self.checked_index(row, col)?;
        let changed = self.cells[idx] != cell;
        self.cells[idx] = cell;
        Ok(changed)
    }

    /// Flip a cell and return its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell> {
        let idx = self.checked_index(row, col)?;
        let next = self.cells[idx].toggle();
        self.cells[idx] = next;
        Ok(next)
    }

    /// Reset every cell to open, reporting only the cells that were walls
    pub fn clear(&mut self) -> Vec<CellChange> {
        let cleared = vec![Cell::Open; self.cells.len()];
        self.replace_cells(cleared)
    }

    /// Count cells in the given state
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over all cells in row-major order with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.width, idx % self.width, cell))
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether the position holds a wall; positions off the grid count as walls.
    pub(crate) fn is_wall_or_outside(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return true;
        }
        self.cells[self.index(row as usize, col as usize)].is_wall()
    }

    /// Swap in a full replacement buffer and diff it against the old one.
    /// The buffer length must match the grid.
    pub(crate) fn replace_cells(&mut self, next: Vec<Cell>) -> Vec<CellChange> {
        let previous = self.swap_cells(next);
        self.diff_from(&previous)
    }

    /// Swap in a full replacement buffer, handing back the old one
    pub(crate) fn swap_cells(&mut self, next: Vec<Cell>) -> Vec<Cell> {
        debug_assert_eq!(next.len(), self.cells.len());
        std::mem::replace(&mut self.cells, next)
    }

    /// Row-major list of cells that differ from `previous`
    pub(crate) fn diff_from(&self, previous: &[Cell]) -> Vec<CellChange> {
        previous
            .iter()
            .zip(&self.cells)
            .enumerate()
            .filter(|(_, (before, after))| before != after)
            .map(|(idx, (_, &cell))| CellChange {
                row: idx / self.width,
                col: idx % self.width,
                cell,
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_open() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.count(Cell::Open), 12);
        assert_eq!(grid.count(Cell::Wall), 0);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(4, 3);
        assert_eq!(
            grid.get(3, 0),
            Err(GridError::OutOfBounds { row: 3, col: 0, width: 4, height: 3 })
        );
        assert!(grid.get(0, 4).is_err());
        assert_eq!(grid.get(2, 3), Ok(Cell::Open));
    }

    #[test]
    fn test_set_reports_change() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(grid.set(1, 2, Cell::Wall), Ok(true));
        assert_eq!(grid.set(1, 2, Cell::Wall), Ok(false));
        assert_eq!(grid.get(1, 2), Ok(Cell::Wall));
        assert!(grid.set(5, 5, Cell::Wall).is_err());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut grid = Grid::from_rows(&["#.", ".#"]).unwrap();
        let original = grid.clone();
        for row in 0..2 {
            for col in 0..2 {
                grid.toggle(row, col).unwrap();
                grid.toggle(row, col).unwrap();
            }
        }
        assert_eq!(grid, original);
    }

    #[test]
    fn test_toggle_returns_new_state() {
        let mut grid = Grid::new(2, 2);
        assert_eq!(grid.toggle(0, 1), Ok(Cell::Wall));
        assert_eq!(grid.toggle(0, 1), Ok(Cell::Open));
        assert!(grid.toggle(2, 0).is_err());
    }

    #[test]
    fn test_clear_reports_only_walls() {
        let mut grid = Grid::from_rows(&["#..", "..#"]).unwrap();
        let changes = grid.clear();
        assert_eq!(
            changes,
            vec![
                CellChange { row: 0, col: 0, cell: Cell::Open },
                CellChange { row: 1, col: 2, cell: Cell::Open },
            ]
        );
        assert_eq!(grid.count(Cell::Wall), 0);
    }

    #[test]
    fn test_clear_on_open_grid_changes_nothing() {
        let mut grid = Grid::new(5, 5);
        assert!(grid.clear().is_empty());
    }

    #[test]
    fn test_iter_cells_row_major() {
        let grid = Grid::from_rows(&["#.", ".."]).unwrap();
        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(cells[0], (0, 0, Cell::Wall));
        assert_eq!(cells[1], (0, 1, Cell::Open));
        assert_eq!(cells[2], (1, 0, Cell::Open));
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Grid::from_rows(&[]).is_none());
        assert!(Grid::from_rows(&["#.", "#"]).is_none());
        assert!(Grid::from_rows(&["#x"]).is_none());
    }

    #[test]
    fn test_display_matches_rows() {
        let grid = Grid::from_rows(&["#.#", "..."]).unwrap();
        assert_eq!(grid.to_string(), "#.#\n...\n");
    }

    #[test]
    fn test_outside_counts_as_wall() {
        let grid = Grid::new(2, 2);
        assert!(grid.is_wall_or_outside(-1, 0));
        assert!(grid.is_wall_or_outside(0, 2));
        assert!(!grid.is_wall_or_outside(1, 1));
    }
}
