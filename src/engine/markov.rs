//! Exact win distribution by forward propagation through the transition
//! matrix.
//!
//! Starting from all mass at position 0, each right-multiplication yields the
//! position distribution after one more draw. The terminal entry of turn t's
//! vector is the probability the game has been won *by* turn t; its first
//! difference is the probability of winning *exactly* at turn t.

use std::collections::HashMap;

use super::matrix::TransitionMatrix;

/// Terminal mass at which the iteration stops.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.995;

/// Guard for the forward loop; unreachable on a well-formed board.
const MAX_TURNS: usize = 10_000;

/// Propagate the start distribution until the terminal mass exceeds
/// `threshold`, returning the full distribution vector after every turn.
pub fn play_markov(matrix: &TransitionMatrix, threshold: f64) -> Vec<Vec<f64>> {
    let terminal = matrix.size() - 1;
    let mut dist = vec![0.0; matrix.size()];
    dist[0] = 1.0;

    let mut turns: Vec<Vec<f64>> = Vec::new();
    while turns.len() < MAX_TURNS {
        dist = matrix.apply(&dist);
        turns.push(dist.clone());
        if dist[terminal] > threshold {
            return turns;
        }
    }
    tracing::warn!(
        turns = turns.len(),
        terminal_mass = dist[terminal],
        "markov iteration guard hit before convergence"
    );
    turns
}

/// Summary statistics over a [`play_markov`] run. Turn numbers are 1-based:
/// `win_curve[t]` is the probability of winning on draw `t + 1`.
pub struct MarkovSummary {
    pub reached_by_turn: Vec<f64>,
    pub win_curve: Vec<f64>,
    /// Total probability mass captured before the threshold cut the tail.
    pub captured_mass: f64,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub percentiles: HashMap<String, usize>,
}

/// Derive the win curve and its moments from the per-turn distributions.
/// Moments are renormalized by the captured mass, so the truncated tail
/// beyond the convergence threshold does not skew them.
pub fn summarize(distributions: &[Vec<f64>]) -> MarkovSummary {
    let reached_by_turn: Vec<f64> = distributions
        .iter()
        .map(|dist| *dist.last().unwrap_or(&0.0))
        .collect();

    let mut win_curve = Vec::with_capacity(reached_by_turn.len());
    let mut previous = 0.0;
    for &reached in &reached_by_turn {
        win_curve.push(reached - previous);
        previous = reached;
    }

    let captured_mass = reached_by_turn.last().copied().unwrap_or(0.0);
    let norm = if captured_mass > 0.0 { captured_mass } else { 1.0 };

    let mean: f64 = win_curve
        .iter()
        .enumerate()
        .map(|(t, &p)| (t + 1) as f64 * p)
        .sum::<f64>()
        / norm;
    let variance: f64 = win_curve
        .iter()
        .enumerate()
        .map(|(t, &p)| ((t + 1) as f64 - mean).powi(2) * p)
        .sum::<f64>()
        / norm;
    let std_dev = variance.sqrt();

    let percentile_keys = [1, 5, 10, 25, 50, 75, 90, 95, 99];
    let mut percentiles = HashMap::new();
    let mut cum_prob = 0.0;
    let mut pct_idx = 0;
    for (t, &p) in win_curve.iter().enumerate() {
        cum_prob += p / norm;
        while pct_idx < percentile_keys.len() && cum_prob >= percentile_keys[pct_idx] as f64 / 100.0
        {
            percentiles.insert(format!("p{}", percentile_keys[pct_idx]), t + 1);
            pct_idx += 1;
        }
    }

    MarkovSummary {
        reached_by_turn,
        win_curve,
        captured_mass,
        mean,
        variance,
        std_dev,
        percentiles,
    }
}

impl MarkovSummary {
    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "Markov Results ({} turns to {:.4} terminal mass)",
            self.win_curve.len(),
            self.captured_mass
        )];
        lines.push("=".repeat(60));
        lines.push(format!(
            "  mean={:.3}  std={:.3}",
            self.mean, self.std_dev
        ));
        for key in ["p5", "p25", "p50", "p75", "p95"] {
            if let Some(turn) = self.percentiles.get(key) {
                lines.push(format!("  {:>4}: {} turns", key, turn));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::candyland::CandyLand;

    fn standard_run(threshold: f64) -> MarkovSummary {
        let game = CandyLand::standard();
        let matrix = TransitionMatrix::build(&game);
        summarize(&play_markov(&matrix, threshold))
    }

    #[test]
    fn test_terminal_mass_is_monotone_and_converges() {
        let summary = standard_run(DEFAULT_CONVERGENCE_THRESHOLD);
        let reached = &summary.reached_by_turn;
        assert!(reached.windows(2).all(|w| w[1] >= w[0] - 1e-12));
        assert!(*reached.last().unwrap() > DEFAULT_CONVERGENCE_THRESHOLD);
    }

    #[test]
    fn test_win_curve_sums_to_captured_mass() {
        let summary = standard_run(DEFAULT_CONVERGENCE_THRESHOLD);
        let total: f64 = summary.win_curve.iter().sum();
        assert!((total - summary.captured_mass).abs() < 1e-9);
        assert!(summary.win_curve.iter().all(|&p| p >= -1e-12));
    }

    #[test]
    fn test_mean_is_at_least_the_shortest_game() {
        let summary = standard_run(0.999);
        assert!(summary.mean >= 1.0);
        assert!(summary.std_dev > 0.0);
    }

    #[test]
    fn test_percentiles_are_ordered() {
        let summary = standard_run(0.999);
        let p25 = summary.percentiles["p25"];
        let p50 = summary.percentiles["p50"];
        let p75 = summary.percentiles["p75"];
        assert!(p25 <= p50 && p50 <= p75);
    }

    #[test]
    fn test_tighter_threshold_runs_longer() {
        let loose = standard_run(0.9);
        let tight = standard_run(0.9999);
        assert!(tight.win_curve.len() > loose.win_curve.len());
    }
}
