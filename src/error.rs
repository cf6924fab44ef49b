//! Errors raised by game setup and shot resolution. All of them are
//! recoverable: the interactive loop reports the message and re-prompts.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Requested grid size falls outside the configured bounds.
    #[error("grid size {size} is out of range ({min}-{max})")]
    InvalidSize { size: usize, min: usize, max: usize },

    /// More ships requested than the grid has open cells for.
    #[error("cannot place {ships} ships on a grid with {open} open cells")]
    InvalidConfiguration { ships: usize, open: usize },

    /// Two ships assigned to the same cell.
    #[error("two ships placed on cell ({row}, {col})")]
    DuplicateShip { row: usize, col: usize },

    /// Shot target outside the grid.
    #[error("coordinates ({row}, {col}) are outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}
