//! Transition-probability matrix over board positions.
//!
//! Row `i` holds the destination distribution for one uniformly random card
//! draw at position `i`, weighted by deck multiplicities. Built once from
//! exhaustive traversal, immutable afterwards.

use crate::games::candyland::CandyLand;

/// Tolerance for the stochastic row-sum invariant.
pub const ROW_SUM_EPSILON: f64 = 1e-9;

/// Dense row-major square matrix of destination probabilities.
#[derive(Debug, Clone)]
pub struct TransitionMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl TransitionMatrix {
    /// Apply every distinct card at every position and accumulate
    /// `count / deck_size` into the destination cell. The terminal row comes
    /// out as a fixed point because the end space absorbs every card.
    pub fn build(game: &CandyLand) -> TransitionMatrix {
        let size = game.board().len();
        let deck_size = f64::from(game.deck_size());
        let mut cells = vec![0.0; size * size];

        for position in 0..size {
            for (card, count) in game.cards() {
                let destination = game.traverse(card, position);
                cells[position * size + destination] += f64::from(*count) / deck_size;
            }
        }

        TransitionMatrix { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row(&self, position: usize) -> &[f64] {
        &self.cells[position * self.size..(position + 1) * self.size]
    }

    pub fn prob(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.size + to]
    }

    /// Check that every row sums to 1.0 within [`ROW_SUM_EPSILON`].
    pub fn validate(&self) -> Result<(), String> {
        for position in 0..self.size {
            let sum: f64 = self.row(position).iter().sum();
            if (sum - 1.0).abs() > ROW_SUM_EPSILON {
                return Err(format!("row {position} sums to {sum}, expected 1.0"));
            }
        }
        Ok(())
    }

    /// Right-multiply a distribution vector: `next = dist × M`.
    pub fn apply(&self, dist: &[f64]) -> Vec<f64> {
        let mut next = vec![0.0; self.size];
        for (from, &mass) in dist.iter().enumerate() {
            if mass == 0.0 {
                continue;
            }
            for (to, &prob) in self.row(from).iter().enumerate() {
                if prob > 0.0 {
                    next[to] += mass * prob;
                }
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_stochastic() {
        let game = CandyLand::standard();
        let matrix = TransitionMatrix::build(&game);
        matrix.validate().unwrap();
    }

    #[test]
    fn test_terminal_row_is_a_fixed_point() {
        let game = CandyLand::standard();
        let matrix = TransitionMatrix::build(&game);
        let terminal = game.terminal_index();
        assert!((matrix.prob(terminal, terminal) - 1.0).abs() < ROW_SUM_EPSILON);
    }

    #[test]
    fn test_bridge_start_columns_are_empty() {
        let game = CandyLand::standard();
        let matrix = TransitionMatrix::build(&game);
        for (position, space) in game.board().spaces.iter().enumerate() {
            if space.bridge_start.is_none() {
                continue;
            }
            for from in 0..matrix.size() {
                assert_eq!(
                    matrix.prob(from, position),
                    0.0,
                    "bridge start {position} is reachable from {from}"
                );
            }
        }
    }

    #[test]
    fn test_miss_row_moves_all_mass_one_step() {
        let game = CandyLand::standard();
        let matrix = TransitionMatrix::build(&game);
        for (position, space) in game.board().spaces.iter().enumerate() {
            if space.is_miss() {
                assert!((matrix.prob(position, position + 1) - 1.0).abs() < ROW_SUM_EPSILON);
            }
        }
    }

    #[test]
    fn test_apply_preserves_mass() {
        let game = CandyLand::standard();
        let matrix = TransitionMatrix::build(&game);
        let mut dist = vec![0.0; matrix.size()];
        dist[0] = 1.0;
        for _ in 0..10 {
            dist = matrix.apply(&dist);
            let total: f64 = dist.iter().sum();
            assert!((total - 1.0).abs() < 1e-9);
        }
    }
}
