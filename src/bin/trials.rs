//! Trials CLI: run both estimators from the command line.
//!
//! Usage:
//!   cargo run --release --bin trials -- --games 100000
//!   cargo run --release --bin trials -- --board custom.toml --threshold 0.999 --curve

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use candyland_engine::engine::markov::{play_markov, summarize, DEFAULT_CONVERGENCE_THRESHOLD};
use candyland_engine::engine::matrix::TransitionMatrix;
use candyland_engine::engine::trials::{run_trials, run_trials_parallel};
use candyland_engine::games::candyland::config::{load_board, load_default_board};

#[derive(Parser)]
#[command(name = "trials", about = "Estimate the Candy Land win-turn distribution")]
struct Cli {
    /// Number of Monte Carlo games to play
    #[arg(long, default_value = "100000")]
    games: usize,

    /// Base random seed (game k uses seed + k)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Path to a board TOML file (default: auto-discover, then built-in)
    #[arg(long, env = "CANDYLAND_BOARD")]
    board: Option<PathBuf>,

    /// Terminal mass at which the Markov iteration stops
    #[arg(long, default_value_t = DEFAULT_CONVERGENCE_THRESHOLD)]
    threshold: f64,

    /// Run Monte Carlo games on a single thread with a progress line
    #[arg(long)]
    sequential: bool,

    /// Print the per-turn win-probability curve
    #[arg(long)]
    curve: bool,
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("info".parse().map_err(|e| format!("bad directive: {e}"))?),
        )
        .init();

    let cli = Cli::parse();

    let game = match &cli.board {
        Some(path) => load_board(path)?,
        None => load_default_board(),
    };

    let matrix = TransitionMatrix::build(&game);
    matrix.validate()?;

    eprintln!(
        "Trials: {} games, seed={}, threshold={}, board={} spaces, deck={} cards",
        cli.games,
        cli.seed,
        cli.threshold,
        game.board().len(),
        game.deck_size()
    );

    let result = if cli.sequential {
        let total = cli.games;
        let progress = move |done: usize, _total: usize| {
            if done % 1000 == 0 || done == total {
                eprint!("\r  [{}/{}] games played", done, total);
            }
        };
        let result = run_trials(&game, cli.games, cli.seed, Some(&progress));
        eprintln!();
        result
    } else {
        run_trials_parallel(&game, cli.games, cli.seed)
    };

    let markov = summarize(&play_markov(&matrix, cli.threshold));

    println!("{}", result.summary());
    println!();
    println!("{}", markov.summary());

    if cli.curve {
        println!();
        println!("turn  win_prob  reached_by");
        for (t, (&win, &reached)) in markov
            .win_curve
            .iter()
            .zip(&markov.reached_by_turn)
            .enumerate()
        {
            println!("{:>4}  {:.6}  {:.6}", t + 1, win, reached);
        }
    }

    Ok(())
}
