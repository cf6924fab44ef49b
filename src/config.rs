//! Game configuration, passed explicitly to the session instead of living in
//! globals.

use std::path::PathBuf;

use crate::error::GameError;

/// Tunable parameters of a session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Smallest grid size the player may choose.
    pub min_size: usize,
    /// Largest grid size the player may choose.
    pub max_size: usize,
    /// Number of single-cell ships placed on a fresh grid.
    pub ship_count: usize,
    /// Path of the saved-game snapshot file.
    pub snapshot_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_size: 3,
            max_size: 10,
            ship_count: 3,
            snapshot_path: PathBuf::from("savegame"),
        }
    }
}

impl GameConfig {
    /// Check a player-chosen grid size against the configured bounds.
    pub fn validate_size(&self, size: usize) -> Result<(), GameError> {
        if (self.min_size..=self.max_size).contains(&size) {
            Ok(())
        } else {
            Err(GameError::InvalidSize {
                size,
                min: self.min_size,
                max: self.max_size,
            })
        }
    }
}
