//! Saved-game snapshots: one JSON file holding the full state of the game
//! in progress. The file is written after every shot that changes state and
//! removed once the game is won or restarted.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::GameState;
use crate::grid::{Coord, Grid};

/// Failure to write the snapshot. Saving is best-effort: the session logs
/// the error and play continues.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to write snapshot: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// On-disk form of a [`GameState`]. Field names and cell codes are kept
/// compatible with save files written by earlier versions of the game.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    grille: Grid,
    bateaux: Vec<Coord>,
    nb_coules: u32,
    taille: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
enum SnapshotFlaw {
    #[error("grid does not match the declared size")]
    GridShape,
    #[error("hit counter exceeds the number of ships")]
    HitCount,
    #[error("ship coordinate outside the grid")]
    ShipOutOfBounds,
}

impl Snapshot {
    fn of(state: &GameState) -> Self {
        Self {
            grille: state.grid().clone(),
            bateaux: state.ships().to_vec(),
            nb_coules: state.hits(),
            taille: state.size(),
        }
    }

    fn into_state(self) -> Result<GameState, SnapshotFlaw> {
        if !self.grille.has_shape(self.taille) {
            return Err(SnapshotFlaw::GridShape);
        }
        if self.nb_coules as usize > self.bateaux.len() {
            return Err(SnapshotFlaw::HitCount);
        }
        if self
            .bateaux
            .iter()
            .any(|&(row, col)| row >= self.taille || col >= self.taille)
        {
            return Err(SnapshotFlaw::ShipOutOfBounds);
        }
        Ok(GameState::from_parts(
            self.grille,
            self.bateaux,
            self.nb_coules,
            self.taille,
        ))
    }
}

/// Handle on the snapshot file of a single game.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Serialize the state to the snapshot file, replacing any previous one.
    pub fn save(&self, state: &GameState) -> Result<(), PersistenceError> {
        let text = serde_json::to_string_pretty(&Snapshot::of(state))?;
        fs::write(&self.path, text)?;
        debug!("saved game to {}", self.path.display());
        Ok(())
    }

    /// Load the snapshot, or `None` when there is nothing usable to resume.
    ///
    /// A missing file is the normal no-saved-game case. An unreadable file,
    /// invalid JSON, missing fields, or inconsistent content all degrade to
    /// `None` with a diagnostic; a corrupt save must never take the game
    /// down.
    pub fn load(&self) -> Option<GameState> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!("could not read snapshot {}: {}", self.path.display(), err);
                return None;
            }
        };
        let snapshot: Snapshot = match serde_json::from_str(&text) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(
                    "snapshot {} is not a valid saved game: {}",
                    self.path.display(),
                    err
                );
                return None;
            }
        };
        match snapshot.into_state() {
            Ok(state) => Some(state),
            Err(flaw) => {
                warn!("snapshot {} is inconsistent: {}", self.path.display(), flaw);
                None
            }
        }
    }

    /// Remove the snapshot file. Removing an absent snapshot succeeds.
    pub fn delete(&self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("deleted snapshot {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
