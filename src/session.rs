//! Interactive session loop.
//!
//! Drives one play-through at a time: offer to resume a saved game, place a
//! fresh fleet otherwise, then request shots until the fleet is sunk or the
//! player leaves. The loop is generic over its reader/writer so tests can
//! script a whole console exchange.
//!
//! Session states: choosing the grid size, awaiting the resume decision,
//! active play, confirming a restart, confirming an exit, won, exited.
//! `retry` and `exit` are reserved words at the target prompt; both require
//! a yes/no confirmation, and declining returns to active play unchanged.

use std::io::{self, BufRead, Write};

use log::warn;
use rand::Rng;

use crate::config::GameConfig;
use crate::game::{GameState, ShotOutcome};
use crate::input::{parse_size, parse_target, parse_yes_no, PlayerInput};
use crate::persistence::SnapshotStore;

/// How one play-through ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    /// Player confirmed `retry`: start over from the size prompt.
    Restart,
    /// Player confirmed `exit` (or the input stream ended).
    Exit,
    /// All ships sunk.
    Won,
}

/// Interactive game session over a console-like reader/writer pair.
pub struct Session<R, W, G> {
    config: GameConfig,
    store: SnapshotStore,
    reader: R,
    writer: W,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(config: GameConfig, reader: R, writer: W, rng: G) -> Self {
        let store = SnapshotStore::new(config.snapshot_path.clone());
        Self {
            config,
            store,
            reader,
            writer,
            rng,
        }
    }

    /// Run sessions until the player exits. Only I/O failures on the console
    /// itself escape; every game-level error is reported and re-prompted.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.writer, "Welcome to battleship!")?;
        loop {
            let Some(mut game) = self.start_game()? else {
                return self.goodbye();
            };
            match self.play(&mut game)? {
                Verdict::Restart => continue,
                Verdict::Exit => return self.goodbye(),
                Verdict::Won => {
                    self.render(&game)?;
                    writeln!(
                        self.writer,
                        "You sank all {} ships. Well played!",
                        game.ship_count()
                    )?;
                    self.discard_snapshot();
                    match self.confirm("Play again?")? {
                        Some(true) => continue,
                        Some(false) | None => return self.goodbye(),
                    }
                }
            }
        }
    }

    /// Resume the saved game if the player wants it, otherwise start fresh.
    /// `None` means the input stream ended before a game could start.
    fn start_game(&mut self) -> io::Result<Option<GameState>> {
        if let Some(saved) = self.store.load() {
            writeln!(self.writer, "A saved game was found.")?;
            match self.confirm("Resume it?")? {
                Some(true) => return Ok(Some(saved)),
                Some(false) => self.discard_snapshot(),
                None => return Ok(None),
            }
        } else if self.store.exists() {
            // unusable snapshot: clear it so it cannot shadow the new game
            self.discard_snapshot();
        }
        self.new_game()
    }

    /// Prompt for a grid size until a valid fresh game can be built.
    fn new_game(&mut self) -> io::Result<Option<GameState>> {
        loop {
            let prompt = format!(
                "Enter the grid size ({}-{}): ",
                self.config.min_size, self.config.max_size
            );
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(None);
            };
            let size = match parse_size(&line) {
                Ok(size) => size,
                Err(err) => {
                    writeln!(self.writer, "{err}. Try again.")?;
                    continue;
                }
            };
            if let Err(err) = self.config.validate_size(size) {
                writeln!(self.writer, "{err}. Try again.")?;
                continue;
            }
            match GameState::new(size, self.config.ship_count, &mut self.rng) {
                Ok(game) => return Ok(Some(game)),
                Err(err) => {
                    writeln!(self.writer, "{err}. Try again.")?;
                }
            }
        }
    }

    /// The active-play loop: render, prompt, resolve, persist.
    fn play(&mut self, game: &mut GameState) -> io::Result<Verdict> {
        loop {
            self.render(game)?;
            let Some(line) =
                self.prompt("Select a cell (row,col) or type 'retry' or 'exit': ")?
            else {
                return Ok(Verdict::Exit);
            };
            let input = match parse_target(&line) {
                Ok(input) => input,
                Err(err) => {
                    writeln!(self.writer, "{err}. Try again.")?;
                    continue;
                }
            };
            match input {
                PlayerInput::Retry => match self.confirm("Restart the game from scratch?")? {
                    Some(true) => {
                        self.discard_snapshot();
                        return Ok(Verdict::Restart);
                    }
                    Some(false) => continue,
                    None => return Ok(Verdict::Exit),
                },
                PlayerInput::Exit => match self.confirm("Quit the game?")? {
                    // The snapshot stays on disk so the next launch can
                    // resume.
                    Some(true) | None => return Ok(Verdict::Exit),
                    Some(false) => continue,
                },
                PlayerInput::Coordinate(row, col) => {
                    let outcome = match game.shoot(row, col) {
                        Ok(outcome) => outcome,
                        Err(err) => {
                            writeln!(self.writer, "{err}. Try again.")?;
                            continue;
                        }
                    };
                    if outcome.is_mutating() {
                        if let Err(err) = self.store.save(game) {
                            warn!("could not save game: {err}");
                            writeln!(self.writer, "Warning: progress could not be saved.")?;
                        }
                    }
                    match outcome {
                        ShotOutcome::Hit => {
                            writeln!(
                                self.writer,
                                "Hit! ({}/{})",
                                game.hits(),
                                game.ship_count()
                            )?;
                        }
                        ShotOutcome::Won => {
                            writeln!(
                                self.writer,
                                "Hit! ({}/{})",
                                game.hits(),
                                game.ship_count()
                            )?;
                            return Ok(Verdict::Won);
                        }
                        ShotOutcome::Miss => writeln!(self.writer, "Miss!")?,
                        ShotOutcome::AlreadyPlayed => {
                            writeln!(self.writer, "You already played this cell. Try again.")?;
                        }
                    }
                }
            }
        }
    }

    /// Print the player's view of the grid with row/column indices.
    fn render(&mut self, game: &GameState) -> io::Result<()> {
        write!(self.writer, "   ")?;
        for col in 0..game.size() {
            write!(self.writer, " {col}")?;
        }
        writeln!(self.writer)?;
        for (row, line) in game.grid().render_rows().enumerate() {
            writeln!(self.writer, "{row:2}  {line}")?;
        }
        Ok(())
    }

    /// Ask a yes/no question until it gets an answer. `None` on end of input.
    fn confirm(&mut self, question: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(line) = self.prompt(&format!("{question} (yes/no): "))? else {
                return Ok(None);
            };
            match parse_yes_no(&line) {
                Ok(answer) => return Ok(Some(answer)),
                Err(err) => writeln!(self.writer, "{err}.")?,
            }
        }
    }

    /// Write a prompt and read one line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Best-effort snapshot removal; a failure is logged, not fatal.
    fn discard_snapshot(&mut self) {
        if let Err(err) = self.store.delete() {
            warn!(
                "could not delete snapshot {}: {}",
                self.store.path().display(),
                err
            );
        }
    }

    fn goodbye(&mut self) -> io::Result<()> {
        writeln!(self.writer, "Thanks for playing. Goodbye!")?;
        Ok(())
    }
}
