//! Random placement of single-cell ships.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::GameError;
use crate::grid::{Cell, Coord, Grid};

/// Place `count` ships on distinct water cells chosen uniformly at random,
/// marking each chosen cell as [`Cell::Ship`]. Returns the coordinates in
/// acceptance order.
///
/// The draw is a sample without replacement from the open cells, so it always
/// terminates; asking for as many ships as there are open cells (or more, or
/// zero) is rejected up front.
pub fn place_ships<R: Rng>(
    grid: &mut Grid,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Coord>, GameError> {
    let open: Vec<Coord> = grid.positions(Cell::Water).collect();
    if count == 0 || count >= open.len() {
        return Err(GameError::InvalidConfiguration {
            ships: count,
            open: open.len(),
        });
    }

    let chosen: Vec<Coord> = open.choose_multiple(rng, count).copied().collect();
    for &(row, col) in &chosen {
        grid.set(row, col, Cell::Ship);
    }
    Ok(chosen)
}
