use std::io;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{init_logging, GameConfig, Session};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of ships hidden on the grid.
    #[arg(long, default_value_t = 3)]
    ships: usize,

    /// Path of the saved-game snapshot.
    #[arg(long, default_value = "savegame")]
    save_file: PathBuf,

    /// Fix RNG seed for reproducible games (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    anyhow::ensure!(cli.ships >= 1, "at least one ship is required");

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let config = GameConfig {
        ship_count: cli.ships,
        snapshot_path: cli.save_file,
        ..GameConfig::default()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock(), rng);
    session.run()?;
    Ok(())
}
