/// Cell represents one square of the cave map.
/// Each cell is either Open (passable) or a Wall.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Open,
    Wall,
}

/// Minimum number of wall neighbors (out of 8) for a cell to become a wall.
pub const WALL_THRESHOLD: u8 = 5;

impl Cell {
    /// Check if the cell is a wall
    pub const fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }

    /// Flip Open <-> Wall
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Wall => Cell::Open,
            Cell::Open => Cell::Wall,
        }
    }

    /// Majority rule used by the smoothing pass.
    /// The result only depends on the wall count, not on the current state.
    pub const fn smooth(wall_neighbors: u8) -> Self {
        if wall_neighbors >= WALL_THRESHOLD {
            Cell::Wall
        } else {
            Cell::Open
        }
    }

    /// Single-character form used by `Grid`'s text format
    pub const fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => '.',
        }
    }

    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Open),
            _ => None,
        }
    }
}
