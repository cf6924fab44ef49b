//! Grid state: a square field of cells, each either open water, a hidden
//! ship, or the mark left by a previous shot.

use serde::{Deserialize, Serialize};

/// (row, col) position on the grid.
pub type Coord = (usize, usize);

/// State of a single cell. The serialized form uses the one-character codes
/// of the snapshot file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[serde(rename = "~")]
    Water,
    #[serde(rename = "B")]
    Ship,
    #[serde(rename = "X")]
    Hit,
    #[serde(rename = "O")]
    Miss,
}

impl Cell {
    /// Display symbol of the cell's true state.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Ship => 'B',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }

    /// Display symbol shown to the player. Unhit ships render as water.
    pub const fn masked_symbol(self) -> char {
        match self {
            Cell::Ship => Cell::Water.symbol(),
            other => other.symbol(),
        }
    }
}

/// Square grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a `size` x `size` grid of open water. Size bounds are the
    /// caller's concern (see [`crate::GameConfig::validate_size`]).
    pub fn new(size: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Water; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row)?.get(col).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.rows[row][col] = cell;
    }

    /// Coordinates of every cell currently in the given state, row-major.
    pub fn positions(&self, state: Cell) -> impl Iterator<Item = Coord> + '_ {
        self.rows.iter().enumerate().flat_map(move |(r, row)| {
            row.iter()
                .enumerate()
                .filter(move |&(_, &cell)| cell == state)
                .map(move |(c, _)| (r, c))
        })
    }

    /// Number of cells currently in the given state.
    pub fn count(&self, state: Cell) -> usize {
        self.positions(state).count()
    }

    /// Player-facing rendering, one string per row. Ships are masked as
    /// water; hits and misses show as-is. Pure: renders the same rows every
    /// time until the grid changes.
    pub fn render_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| {
            let mut line = String::with_capacity(row.len() * 2);
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push(cell.masked_symbol());
            }
            line
        })
    }

    /// Check that the grid is square with the expected dimension.
    pub(crate) fn has_shape(&self, size: usize) -> bool {
        self.rows.len() == size && self.rows.iter().all(|row| row.len() == size)
    }
}
