//! Main entry point for the console game.
//!
//! Parses the command line, generates the board and runs the two-player
//! turn loop on the terminal.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use game::{GameResult, GameState, run_game_loop};

pub mod config;
mod game;

/// Gem Hunter - two players, one 6x6 board, 30 moves to grab the most gems
#[derive(Parser, Debug)]
#[command(name = "gem-hunter")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed for board generation (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also print the final summary as a JSON line
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> GameResult<()> {
    let mut rng = match args.seed {
        Some(seed) => {
            info!("[Game] Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut state = GameState::new(&mut rng)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    let summary = run_game_loop(&mut state, &mut input, &mut output)?;

    if args.json {
        writeln!(output, "{}", serde_json::to_string(&summary)?)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[Game] {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
