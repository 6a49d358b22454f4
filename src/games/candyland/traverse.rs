//! Traversal rules: where one drawn card moves a token.
//!
//! `traverse` is pure and total for a validated board/deck pair; every call
//! returns an index in `[0, board.len())`.

use super::index::PositionIndex;
use super::types::*;

/// Resolve one card drawn at `start`. Rules, in order:
///
/// 1. The end space absorbs: a card drawn there has no effect.
/// 2. A miss space freezes the player for one turn; any card parks them on
///    the adjacent skip space.
/// 3. A character card jumps to that character's space, forward or backward.
/// 4. A color card moves forward to the next space of that color; a double
///    color card repeats that step once more. Landing on a bridge start
///    resolves to the bridge's end on each hop. The end space satisfies
///    every color.
pub fn traverse(board: &Board, index: &PositionIndex, card: &Card, start: usize) -> usize {
    let space = board.space(start);
    if space.is_end() {
        return start;
    }
    if space.is_miss() {
        return start + 1;
    }

    match card {
        Card::Character(name) => index
            .character_position(name)
            .unwrap_or_else(|| panic!("character card '{name}' has no space on the board")),
        Card::Single(color) => color_hop(board, index, *color, start),
        Card::Double(color) => {
            // Two sequential single-color resolutions, bridges applied per hop.
            let mut position = start;
            for _ in 0..2 {
                position = color_hop(board, index, *color, position);
            }
            position
        }
    }
}

/// One forward hop to the next space of `color` after `from`. Returns the
/// terminal index when no such space remains ahead, and a bridge's end index
/// when the hop lands on its start.
fn color_hop(board: &Board, index: &PositionIndex, color: Color, from: usize) -> usize {
    let terminal = board.terminal_index();
    for position in (from + 1)..=terminal {
        let space = board.space(position);
        if space.is_end() {
            return terminal;
        }
        if space.color == Some(color) {
            if let Some(name) = &space.bridge_start {
                return index
                    .bridge_end(name)
                    .unwrap_or_else(|| panic!("bridge '{name}' has no end space on the board"));
            }
            return position;
        }
    }
    terminal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::candyland::catalog;
    use crate::games::candyland::CandyLand;

    /// [start, red, blue(bridge a →), green, blue(→ bridge a), end]
    fn bridged_board() -> (Board, PositionIndex) {
        let mut bridge_start = Space::colored(Color::Blue);
        bridge_start.bridge_start = Some("a".to_string());
        let mut bridge_end = Space::colored(Color::Blue);
        bridge_end.bridge_end = Some("a".to_string());
        let board = Board::new(vec![
            Space::start(),
            Space::colored(Color::Red),
            bridge_start,
            Space::colored(Color::Green),
            bridge_end,
            Space::end(),
        ]);
        let index = PositionIndex::build(&board, &[], &["a".to_string()]).unwrap();
        (board, index)
    }

    #[test]
    fn test_single_color_moves_to_next_match() {
        let (board, index) = bridged_board();
        assert_eq!(traverse(&board, &index, &Card::Single(Color::Red), 0), 1);
    }

    #[test]
    fn test_single_color_resolves_bridge() {
        let (board, index) = bridged_board();
        assert_eq!(traverse(&board, &index, &Card::Single(Color::Blue), 1), 4);
    }

    #[test]
    fn test_double_color_continues_from_bridge_end() {
        let (board, index) = bridged_board();
        // First blue hop lands on the bridge start at 2 and resolves to 4;
        // no blue remains ahead of 4, so the second hop reaches the end.
        assert_eq!(traverse(&board, &index, &Card::Double(Color::Blue), 0), 5);
    }

    #[test]
    fn test_no_match_ahead_reaches_end() {
        let (board, index) = bridged_board();
        assert_eq!(traverse(&board, &index, &Card::Single(Color::Yellow), 0), 5);
        assert_eq!(traverse(&board, &index, &Card::Single(Color::Green), 4), 5);
    }

    #[test]
    fn test_end_space_absorbs_every_card() {
        let game = CandyLand::standard();
        let terminal = game.board().terminal_index();
        for (card, _) in game.cards() {
            assert_eq!(game.traverse(card, terminal), terminal);
        }
    }

    #[test]
    fn test_miss_space_parks_on_skip_for_any_card() {
        let game = CandyLand::standard();
        for (position, space) in game.board().spaces.iter().enumerate() {
            if !space.is_miss() {
                continue;
            }
            for (card, _) in game.cards() {
                assert_eq!(game.traverse(card, position), position + 1);
            }
        }
    }

    #[test]
    fn test_character_card_moves_backward_too() {
        let game = CandyLand::standard();
        let plumpy = Card::Character("plumpy".to_string());
        assert_eq!(game.traverse(&plumpy, 0), 9);
        assert_eq!(game.traverse(&plumpy, 50), 9);
    }

    #[test]
    fn test_bridge_start_is_never_a_destination() {
        let game = CandyLand::standard();
        let bridge_starts: Vec<usize> = game
            .board()
            .spaces
            .iter()
            .enumerate()
            .filter(|(_, s)| s.bridge_start.is_some())
            .map(|(i, _)| i)
            .collect();
        assert!(!bridge_starts.is_empty());
        for position in 0..game.board().len() {
            for (card, _) in game.cards() {
                let destination = game.traverse(card, position);
                assert!(
                    !bridge_starts.contains(&destination),
                    "card {:?} at {} stopped on bridge start {}",
                    card,
                    position,
                    destination
                );
            }
        }
    }

    #[test]
    fn test_traverse_stays_in_range_and_is_deterministic() {
        let game = CandyLand::standard();
        for position in 0..game.board().len() {
            for (card, _) in game.cards() {
                let destination = game.traverse(card, position);
                assert!(destination < game.board().len());
                assert_eq!(game.traverse(card, position), destination);
            }
        }
    }

    #[test]
    fn test_first_orange_crosses_the_rainbow_trail() {
        let game = CandyLand::standard();
        let index = PositionIndex::build(
            &catalog::STANDARD_BOARD,
            &catalog::CHARACTERS,
            &catalog::BRIDGES,
        )
        .unwrap();
        // Space 5 is the first orange space and the rainbow trail's start.
        assert_eq!(
            traverse(game.board(), &index, &Card::Single(Color::Orange), 0),
            index.bridge_end("rainbow_trail").unwrap()
        );
    }
}
