//! Candy Land game module: board model, card deck, position index, and the
//! traversal rules that drive both simulators.

pub mod catalog;
pub mod config;
pub mod index;
pub mod traverse;
pub mod types;

use std::collections::HashMap;

use self::index::PositionIndex;
use self::types::{Board, Card};

/// A validated game configuration: immutable board, position index, and the
/// deck parsed into cards with multiplicities. Construction fails on any
/// board/deck inconsistency; afterwards traversal is total and the whole
/// struct is safe for unlimited concurrent read-only use.
#[derive(Debug)]
pub struct CandyLand {
    board: Board,
    index: PositionIndex,
    cards: Vec<(Card, u32)>,
    deck_size: u32,
}

impl CandyLand {
    pub fn new(
        board: Board,
        deck: &HashMap<String, u32>,
        characters: &[String],
        bridges: &[String],
    ) -> Result<CandyLand, String> {
        let index = PositionIndex::build(&board, characters, bridges)?;

        // Sorted labels keep card order (and everything seeded from it)
        // deterministic across runs.
        let mut labels: Vec<&String> = deck.keys().collect();
        labels.sort();

        let mut cards = Vec::with_capacity(labels.len());
        for label in labels {
            let count = deck[label];
            if count == 0 {
                continue;
            }
            cards.push((Card::parse(label, characters)?, count));
        }

        let deck_size: u32 = cards.iter().map(|(_, count)| count).sum();
        if deck_size == 0 {
            return Err("deck is empty".to_string());
        }

        Ok(CandyLand {
            board,
            index,
            cards,
            deck_size,
        })
    }

    /// The built-in standard board and deck.
    pub fn standard() -> CandyLand {
        CandyLand::new(
            catalog::STANDARD_BOARD.clone(),
            &catalog::STANDARD_DECK,
            &catalog::CHARACTERS,
            &catalog::BRIDGES,
        )
        .expect("built-in catalog is well-formed")
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn index(&self) -> &PositionIndex {
        &self.index
    }

    /// Distinct cards with their deck multiplicities, in label order.
    pub fn cards(&self) -> &[(Card, u32)] {
        &self.cards
    }

    pub fn deck_size(&self) -> u32 {
        self.deck_size
    }

    pub fn terminal_index(&self) -> usize {
        self.board.terminal_index()
    }

    pub fn traverse(&self, card: &Card, start: usize) -> usize {
        traverse::traverse(&self.board, &self.index, card, start)
    }
}

#[cfg(test)]
mod tests {
    use super::types::*;
    use super::*;

    #[test]
    fn test_standard_game_constructs() {
        let game = CandyLand::standard();
        assert_eq!(game.deck_size(), 55);
        assert_eq!(game.board().len(), 134);
    }

    #[test]
    fn test_rejects_unknown_deck_label() {
        let board = Board::new(vec![Space::start(), Space::colored(Color::Red), Space::end()]);
        let deck = HashMap::from([("z".to_string(), 3)]);
        let err = CandyLand::new(board, &deck, &[], &[]).unwrap_err();
        assert!(err.contains("unknown card label"), "{err}");
    }

    #[test]
    fn test_rejects_character_card_without_space() {
        let board = Board::new(vec![Space::start(), Space::colored(Color::Red), Space::end()]);
        let deck = HashMap::from([("jolly".to_string(), 1)]);
        let characters = vec!["jolly".to_string()];
        let err = CandyLand::new(board, &deck, &characters, &[]).unwrap_err();
        assert!(err.contains("no space on the board"), "{err}");
    }

    #[test]
    fn test_rejects_empty_deck() {
        let board = Board::new(vec![Space::start(), Space::colored(Color::Red), Space::end()]);
        let deck = HashMap::from([("r".to_string(), 0)]);
        let err = CandyLand::new(board, &deck, &[], &[]).unwrap_err();
        assert_eq!(err, "deck is empty");
    }

    #[test]
    fn test_cards_are_label_sorted() {
        let game = CandyLand::standard();
        let labels: Vec<String> = game.cards().iter().map(|(card, _)| card.label()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }
}
