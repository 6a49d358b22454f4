//! Monte Carlo trial runner: many independent seeded games, aggregated into
//! summary statistics.

use std::collections::HashMap;

use rayon::prelude::*;

use super::simulator::play_one_game;
use crate::games::candyland::CandyLand;

/// Aggregated turn counts from a trial run.
pub struct TrialsResult {
    pub num_games: usize,
    pub turn_counts: Vec<u32>,
}

impl TrialsResult {
    pub fn mean(&self) -> f64 {
        if self.turn_counts.is_empty() {
            return 0.0;
        }
        self.turn_counts.iter().map(|&t| f64::from(t)).sum::<f64>() / self.turn_counts.len() as f64
    }

    pub fn std_dev(&self) -> f64 {
        if self.turn_counts.len() < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .turn_counts
            .iter()
            .map(|&t| (f64::from(t) - mean).powi(2))
            .sum::<f64>()
            / (self.turn_counts.len() - 1) as f64;
        variance.sqrt()
    }

    pub fn min(&self) -> u32 {
        self.turn_counts.iter().copied().min().unwrap_or(0)
    }

    pub fn max(&self) -> u32 {
        self.turn_counts.iter().copied().max().unwrap_or(0)
    }

    /// Empirical percentiles from the sorted counts.
    pub fn percentiles(&self) -> HashMap<String, u32> {
        let mut sorted = self.turn_counts.clone();
        sorted.sort_unstable();

        let percentile_keys = [1, 5, 10, 25, 50, 75, 90, 95, 99];
        let mut percentiles = HashMap::new();
        if sorted.is_empty() {
            return percentiles;
        }
        for pct in percentile_keys {
            let rank = (pct as f64 / 100.0 * sorted.len() as f64).ceil() as usize;
            let idx = rank.saturating_sub(1).min(sorted.len() - 1);
            percentiles.insert(format!("p{pct}"), sorted[idx]);
        }
        percentiles
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Monte Carlo Results ({} games)", self.num_games)];
        lines.push("=".repeat(60));
        lines.push(format!(
            "  mean={:.3}  std={:.3}  min={}  max={}",
            self.mean(),
            self.std_dev(),
            self.min(),
            self.max()
        ));
        let percentiles = self.percentiles();
        for key in ["p5", "p25", "p50", "p75", "p95"] {
            if let Some(turns) = percentiles.get(key) {
                lines.push(format!("  {:>4}: {} turns", key, turns));
            }
        }
        lines.join("\n")
    }
}

/// Run `num_games` independent games, seeding game k with `base_seed + k`.
pub fn run_trials(
    game: &CandyLand,
    num_games: usize,
    base_seed: u64,
    progress_callback: Option<&dyn Fn(usize, usize)>,
) -> TrialsResult {
    let mut turn_counts = Vec::with_capacity(num_games);
    for game_idx in 0..num_games {
        turn_counts.push(play_one_game(game, base_seed + game_idx as u64));
        if let Some(cb) = progress_callback {
            cb(game_idx + 1, num_games);
        }
    }
    TrialsResult {
        num_games,
        turn_counts,
    }
}

/// Parallel variant: same per-game seeds, fanned across rayon workers. Each
/// worker owns its session and RNG; results land in game order, so the
/// outcome is identical to the sequential run.
pub fn run_trials_parallel(game: &CandyLand, num_games: usize, base_seed: u64) -> TrialsResult {
    let turn_counts: Vec<u32> = (0..num_games)
        .into_par_iter()
        .map(|game_idx| play_one_game(game, base_seed + game_idx as u64))
        .collect();
    TrialsResult {
        num_games,
        turn_counts,
    }
}
