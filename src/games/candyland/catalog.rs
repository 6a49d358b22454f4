//! Built-in standard board and deck (134 spaces, 55 cards).
//!
//! The trail cycles the six colors from position 1, with seven character
//! picture spaces, two shortcut bridges, and three licorice spaces. Each
//! licorice (miss) space is followed by the skip space the frozen player is
//! parked on for the lost turn.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::types::*;

const BOARD_LEN: usize = 134;

const CHARACTER_SPACES: [(&str, usize); 7] = [
    ("plumpy", 9),
    ("mr_mint", 20),
    ("jolly", 42),
    ("gramma_nutt", 69),
    ("princess_lolly", 92),
    ("queen_frostine", 102),
    ("gloppy", 117),
];

/// (name, start position, end position)
const BRIDGE_SPACES: [(&str, usize, usize); 2] = [
    ("rainbow_trail", 5, 59),
    ("gumdrop_pass", 34, 47),
];

const MISS_SPACES: [usize; 3] = [48, 86, 121];

const SINGLES_PER_COLOR: u32 = 6;
const DOUBLES_PER_COLOR: u32 = 2;

/// Color of the trail space at `position` (positions 1..len-1).
fn cycle_color(position: usize) -> Color {
    PALETTE[(position - 1) % PALETTE.len()]
}

pub static CHARACTERS: Lazy<Vec<String>> = Lazy::new(|| {
    CHARACTER_SPACES
        .iter()
        .map(|(name, _)| name.to_string())
        .collect()
});

pub static BRIDGES: Lazy<Vec<String>> = Lazy::new(|| {
    BRIDGE_SPACES
        .iter()
        .map(|(name, _, _)| name.to_string())
        .collect()
});

pub static STANDARD_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut spaces: Vec<Space> = (0..BOARD_LEN)
        .map(|i| match i {
            0 => Space::start(),
            i if i == BOARD_LEN - 1 => Space::end(),
            i => Space::colored(cycle_color(i)),
        })
        .collect();

    for (name, position) in CHARACTER_SPACES {
        spaces[position] = Space::character(name);
    }
    for (name, start, end) in BRIDGE_SPACES {
        spaces[start].bridge_start = Some(name.to_string());
        spaces[end].bridge_end = Some(name.to_string());
    }
    for position in MISS_SPACES {
        spaces[position].special = Some(SpecialKind::Miss);
        spaces[position + 1].special = Some(SpecialKind::Skip);
    }

    Board::new(spaces)
});

pub static STANDARD_DECK: Lazy<HashMap<String, u32>> = Lazy::new(|| {
    let mut deck = HashMap::new();
    for color in PALETTE {
        deck.insert(color.label().to_string(), SINGLES_PER_COLOR);
        deck.insert(format!("{}{}", color.label(), color.label()), DOUBLES_PER_COLOR);
    }
    for (name, _) in CHARACTER_SPACES {
        deck.insert(name.to_string(), 1);
    }
    deck
});
