//! Monte Carlo game session: one token walked from start to the end space,
//! drawing from a shuffled working deck that reshuffles when exhausted.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::games::candyland::types::Card;
use crate::games::candyland::CandyLand;

/// Mutable per-game state. The working deck is a fixed shuffled sequence
/// consumed through a cursor; exhausting it reshuffles a full copy.
pub struct GameSession<'a> {
    game: &'a CandyLand,
    rng: StdRng,
    working: Vec<Card>,
    cursor: usize,
    position: usize,
}

impl<'a> GameSession<'a> {
    pub fn new(game: &'a CandyLand, rng: StdRng) -> GameSession<'a> {
        let working = full_deck(game);
        GameSession {
            game,
            rng,
            working,
            cursor: 0,
            position: 0,
        }
    }

    /// Play one game to completion and return the turn count (always ≥ 1).
    /// Resets position and reshuffles the full deck first, so repeated calls
    /// are independent games sharing only the RNG stream.
    pub fn play(&mut self) -> u32 {
        self.position = 0;
        self.working.shuffle(&mut self.rng);
        self.cursor = 0;

        let terminal = self.game.terminal_index();
        let mut turns = 0;
        while self.position != terminal {
            if self.cursor >= self.working.len() {
                self.working.shuffle(&mut self.rng);
                self.cursor = 0;
            }
            let card = &self.working[self.cursor];
            self.cursor += 1;
            self.position = self.game.traverse(card, self.position);
            turns += 1;
        }
        turns
    }
}

/// One seeded game from a fresh session.
pub fn play_one_game(game: &CandyLand, seed: u64) -> u32 {
    GameSession::new(game, StdRng::seed_from_u64(seed)).play()
}

/// Expand the deck multiset into the full card sequence, in label order.
fn full_deck(game: &CandyLand) -> Vec<Card> {
    let mut cards = Vec::with_capacity(game.deck_size() as usize);
    for (card, count) in game.cards() {
        for _ in 0..*count {
            cards.push(card.clone());
        }
    }
    cards
}
