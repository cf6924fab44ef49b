//! Core game state and shot resolution.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::grid::{Cell, Coord, Grid};
use crate::placement::place_ships;

/// Result of resolving one shot.
///
/// `Won` is reported on the shot that lands the final hit; it implies a hit.
/// `AlreadyPlayed` leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    Hit,
    Miss,
    AlreadyPlayed,
    Won,
}

impl ShotOutcome {
    /// Whether the shot changed any state. Mutating shots are the ones worth
    /// persisting.
    pub const fn is_mutating(self) -> bool {
        matches!(self, Self::Hit | Self::Miss | Self::Won)
    }

    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit | Self::Won)
    }
}

/// Full state of one game in progress: the grid, the fleet positions, and
/// how many ships have been sunk so far.
///
/// Invariants: `hits <= ships.len()`; the game is won exactly when they are
/// equal. Each coordinate in `ships` points at a cell that is `Ship` (not yet
/// struck) or `Hit` (struck).
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    grid: Grid,
    ships: Vec<Coord>,
    hits: u32,
    size: usize,
}

impl GameState {
    /// Start a fresh game with randomly placed ships.
    pub fn new<R: Rng>(size: usize, ship_count: usize, rng: &mut R) -> Result<Self, GameError> {
        let mut grid = Grid::new(size);
        let ships = place_ships(&mut grid, ship_count, rng)?;
        Ok(Self {
            grid,
            ships,
            hits: 0,
            size,
        })
    }

    /// Start a fresh game with ships at fixed positions.
    pub fn with_ships(size: usize, coords: &[Coord]) -> Result<Self, GameError> {
        let mut grid = Grid::new(size);
        for &(row, col) in coords {
            match grid.get(row, col) {
                None => return Err(GameError::OutOfBounds { row, col, size }),
                Some(Cell::Ship) => return Err(GameError::DuplicateShip { row, col }),
                Some(_) => grid.set(row, col, Cell::Ship),
            }
        }
        Ok(Self {
            grid,
            ships: coords.to_vec(),
            hits: 0,
            size,
        })
    }

    /// Reassemble a game from previously persisted parts. The caller is
    /// responsible for having validated consistency (see the snapshot
    /// loader).
    pub(crate) fn from_parts(grid: Grid, ships: Vec<Coord>, hits: u32, size: usize) -> Self {
        Self {
            grid,
            ships,
            hits,
            size,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Fleet positions in placement order.
    pub fn ships(&self) -> &[Coord] {
        &self.ships
    }

    /// Ships sunk so far.
    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_won(&self) -> bool {
        self.hits as usize == self.ships.len()
    }

    /// Resolve a shot at (row, col).
    ///
    /// Water becomes a miss, a ship becomes a hit; both are terminal for that
    /// cell, so shooting it again reports `AlreadyPlayed` without changing
    /// anything. Out-of-bounds targets are an error for the caller to
    /// re-prompt on.
    pub fn shoot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
        let Some(cell) = self.grid.get(row, col) else {
            return Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        };

        Ok(match cell {
            Cell::Ship => {
                self.grid.set(row, col, Cell::Hit);
                self.hits += 1;
                if self.is_won() {
                    ShotOutcome::Won
                } else {
                    ShotOutcome::Hit
                }
            }
            Cell::Water => {
                self.grid.set(row, col, Cell::Miss);
                ShotOutcome::Miss
            }
            Cell::Hit | Cell::Miss => ShotOutcome::AlreadyPlayed,
        })
    }
}
