//! Scripted-console tests for the session loop: each test feeds a fixed
//! input script and inspects the transcript plus the snapshot file left (or
//! not left) behind.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{GameConfig, GameState, Session, SnapshotStore};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn unique_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "seabattle-session-{}-{}-{}.json",
        tag,
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ))
}

fn config_with(path: &PathBuf) -> GameConfig {
    GameConfig {
        snapshot_path: path.clone(),
        ..GameConfig::default()
    }
}

/// Run a full session against a scripted console and return the transcript.
fn run_session(config: GameConfig, script: &str) -> String {
    let mut output = Vec::new();
    let rng = SmallRng::seed_from_u64(7);
    let mut session = Session::new(config, script.as_bytes(), &mut output, rng);
    session.run().unwrap();
    String::from_utf8(output).unwrap()
}

/// A fresh diagonal-fleet game on a 3x3 grid, saved as a resumable snapshot.
fn seed_snapshot(store: &SnapshotStore) -> GameState {
    let game = GameState::with_ships(3, &[(0, 0), (1, 1), (2, 2)]).unwrap();
    store.save(&game).unwrap();
    game
}

#[test]
fn test_fresh_session_prompts_for_size() {
    let path = unique_path("fresh");
    let transcript = run_session(config_with(&path), "4\n");

    assert!(transcript.contains("Enter the grid size (3-10)"));
    // the 4x4 grid was rendered before the input ran out
    assert!(transcript.contains("    0 1 2 3\n"));
    assert!(transcript.contains("Goodbye"));
    assert!(!path.exists());
}

#[test]
fn test_resume_and_win_deletes_snapshot() {
    let path = unique_path("win");
    let store = SnapshotStore::new(&path);
    seed_snapshot(&store);

    let transcript = run_session(config_with(&path), "yes\n0,0\n1,1\n2,2\nno\n");

    assert!(transcript.contains("A saved game was found."));
    assert!(transcript.contains("Hit! (1/3)"));
    assert!(transcript.contains("Hit! (3/3)"));
    assert!(transcript.contains("You sank all 3 ships"));
    assert!(transcript.contains("Play again?"));
    assert!(!store.exists(), "winning must delete the snapshot");
}

#[test]
fn test_resume_declined_deletes_snapshot() {
    let path = unique_path("declined");
    let store = SnapshotStore::new(&path);
    seed_snapshot(&store);

    let transcript = run_session(config_with(&path), "no\n");

    assert!(transcript.contains("Resume it?"));
    assert!(transcript.contains("Enter the grid size"));
    assert!(!store.exists(), "declining resume must delete the snapshot");
}

#[test]
fn test_confirmed_exit_keeps_snapshot() {
    let path = unique_path("exit");
    let store = SnapshotStore::new(&path);
    seed_snapshot(&store);

    // decline retry, decline exit, miss once, then really exit
    let transcript = run_session(
        config_with(&path),
        "yes\nretry\nno\nexit\nno\n0,1\nexit\nyes\n",
    );

    assert!(transcript.contains("Restart the game from scratch?"));
    assert!(transcript.contains("Quit the game?"));
    assert!(transcript.contains("Miss!"));
    assert!(transcript.contains("Goodbye"));
    assert!(store.exists(), "exiting must keep the snapshot for resume");
    store.delete().unwrap();
}

#[test]
fn test_confirmed_retry_restarts_session() {
    let path = unique_path("retry");
    let store = SnapshotStore::new(&path);
    seed_snapshot(&store);

    let transcript = run_session(config_with(&path), "yes\nretry\nyes\n3\n");

    // back to the size prompt, with the old snapshot gone
    assert!(transcript.contains("Enter the grid size"));
    assert!(!store.exists(), "confirmed retry must delete the snapshot");
}

#[test]
fn test_invalid_inputs_reprompt() {
    let path = unique_path("invalid");
    let store = SnapshotStore::new(&path);

    let transcript = run_session(config_with(&path), "99\nabc\n3\nfoo\n9 9\n");

    assert!(transcript.contains("grid size 99 is out of range (3-10)"));
    assert!(transcript.contains("expected a whole number"));
    assert!(transcript.contains("expected two numbers"));
    assert!(transcript.contains("outside the 3x3 grid"));
    assert!(transcript.contains("Goodbye"));
    store.delete().unwrap();
}

#[test]
fn test_corrupt_snapshot_is_cleared_on_start() {
    let path = unique_path("corrupt");
    std::fs::write(&path, "{ not a saved game }").unwrap();
    let store = SnapshotStore::new(&path);

    let transcript = run_session(config_with(&path), "3\n");

    assert!(!transcript.contains("A saved game was found."));
    assert!(transcript.contains("Enter the grid size"));
    assert!(!store.exists(), "corrupt snapshot must be cleared");
}

#[test]
fn test_already_played_cell_does_not_advance() {
    let path = unique_path("replayed");
    let store = SnapshotStore::new(&path);
    let mut game = seed_snapshot(&store);
    game.shoot(0, 0).unwrap();
    store.save(&game).unwrap();

    let transcript = run_session(config_with(&path), "yes\n0,0\nexit\nyes\n");

    assert!(transcript.contains("You already played this cell."));
    assert!(store.exists());
    store.delete().unwrap();
}
