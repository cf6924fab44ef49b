//! Single-player battleship: a fleet of one-cell ships hides on a square
//! grid, the player fires at cells until every ship is sunk. Games are
//! persisted to a JSON snapshot after every shot so an interrupted session
//! can be resumed on the next launch.

mod config;
mod error;
mod game;
mod grid;
mod input;
mod logging;
mod persistence;
mod placement;
mod session;

pub use config::*;
pub use error::*;
pub use game::*;
pub use grid::*;
pub use input::*;
pub use logging::init_logging;
pub use persistence::*;
pub use placement::*;
pub use session::*;
