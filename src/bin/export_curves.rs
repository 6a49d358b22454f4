//! Curve exporter for the reporting/plotting collaborator.
//!
//! Runs both estimators on the standard board and writes plain JSON number
//! sequences. Run with:
//!
//!     cargo run --release --bin export_curves

use std::fs;
use std::path::PathBuf;

use candyland_engine::engine::markov::{play_markov, summarize};
use candyland_engine::engine::matrix::TransitionMatrix;
use candyland_engine::engine::trials::run_trials_parallel;
use candyland_engine::games::candyland::CandyLand;

const GAMES: usize = 100_000;
const SEED: u64 = 42;
const THRESHOLD: f64 = 0.9999;

fn main() {
    let out_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("curves");
    fs::create_dir_all(&out_dir).expect("failed to create curves directory");

    let game = CandyLand::standard();
    let matrix = TransitionMatrix::build(&game);
    matrix.validate().expect("standard board transition matrix is stochastic");

    let trials = run_trials_parallel(&game, GAMES, SEED);
    let markov = summarize(&play_markov(&matrix, THRESHOLD));

    let turn_counts_path = out_dir.join("turn_counts.json");
    fs::write(
        &turn_counts_path,
        serde_json::to_string(&trials.turn_counts).expect("turn counts serialize"),
    )
    .expect("failed to write turn counts");

    let win_curve_path = out_dir.join("win_curve.json");
    let curve = serde_json::json!({
        "win_curve": markov.win_curve,
        "reached_by_turn": markov.reached_by_turn,
    });
    fs::write(
        &win_curve_path,
        serde_json::to_string_pretty(&curve).expect("win curve serialize"),
    )
    .expect("failed to write win curve");

    eprintln!(
        "wrote {} turn counts to {}",
        trials.turn_counts.len(),
        turn_counts_path.display()
    );
    eprintln!(
        "wrote {}-turn win curve to {}",
        markov.win_curve.len(),
        win_curve_path.display()
    );
    eprintln!(
        "monte carlo mean: {:.3}  markov mean: {:.3}",
        trials.mean(),
        markov.mean
    );
}
