//! Candy Land core types: colors, spaces, the board, and cards.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Purple,
    Yellow,
    Blue,
    Orange,
    Green,
}

/// Trail order of the color cycle.
pub const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Purple,
    Color::Yellow,
    Color::Blue,
    Color::Orange,
    Color::Green,
];

impl Color {
    /// Single-letter card label for this color.
    pub fn label(self) -> &'static str {
        match self {
            Color::Red => "r",
            Color::Purple => "p",
            Color::Yellow => "y",
            Color::Blue => "b",
            Color::Orange => "o",
            Color::Green => "g",
        }
    }

    pub fn from_label(label: &str) -> Option<Color> {
        match label {
            "r" => Some(Color::Red),
            "p" => Some(Color::Purple),
            "y" => Some(Color::Yellow),
            "b" => Some(Color::Blue),
            "o" => Some(Color::Orange),
            "g" => Some(Color::Green),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialKind {
    Start,
    End,
    Miss,
    Skip,
}

/// One board cell. A space may combine a color with one defining feature
/// (character, special kind, bridge start, or bridge end).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Space {
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub special: Option<SpecialKind>,
    #[serde(default)]
    pub bridge_start: Option<String>,
    #[serde(default)]
    pub bridge_end: Option<String>,
}

impl Space {
    pub fn colored(color: Color) -> Self {
        Space {
            color: Some(color),
            ..Space::default()
        }
    }

    pub fn start() -> Self {
        Space {
            special: Some(SpecialKind::Start),
            ..Space::default()
        }
    }

    pub fn end() -> Self {
        Space {
            special: Some(SpecialKind::End),
            ..Space::default()
        }
    }

    /// Character picture space. Carries no color: color-card scans pass over it.
    pub fn character(name: &str) -> Self {
        Space {
            character: Some(name.to_string()),
            ..Space::default()
        }
    }

    pub fn is_end(&self) -> bool {
        self.special == Some(SpecialKind::End)
    }

    pub fn is_miss(&self) -> bool {
        self.special == Some(SpecialKind::Miss)
    }

    /// Count of defining features beyond color (at most one is allowed).
    pub fn feature_count(&self) -> usize {
        [
            self.character.is_some(),
            self.special.is_some(),
            self.bridge_start.is_some(),
            self.bridge_end.is_some(),
        ]
        .iter()
        .filter(|&&f| f)
        .count()
    }
}

/// Ordered sequence of spaces; index = position. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub spaces: Vec<Space>,
}

impl Board {
    pub fn new(spaces: Vec<Space>) -> Self {
        Board { spaces }
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    pub fn space(&self, position: usize) -> &Space {
        &self.spaces[position]
    }

    /// Index of the absorbing end space (last position).
    pub fn terminal_index(&self) -> usize {
        self.spaces.len() - 1
    }
}

/// Deck element: a single-color move, a double-color move, or a jump to a
/// character's space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Card {
    Single(Color),
    Double(Color),
    Character(String),
}

impl Card {
    /// Parse a deck label: `"r"` → single red, `"rr"` → double red, any name
    /// in `characters` → character card. Anything else is a configuration
    /// error; deck and board must be mutually consistent.
    pub fn parse(label: &str, characters: &[String]) -> Result<Card, String> {
        if characters.iter().any(|c| c == label) {
            return Ok(Card::Character(label.to_string()));
        }
        let mut chars = label.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), None, _) => Color::from_label(&a.to_string())
                .map(Card::Single)
                .ok_or_else(|| format!("unknown card label '{label}'")),
            (Some(a), Some(b), None) if a == b => Color::from_label(&a.to_string())
                .map(Card::Double)
                .ok_or_else(|| format!("unknown card label '{label}'")),
            _ => Err(format!("unknown card label '{label}'")),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Card::Single(c) => c.label().to_string(),
            Card::Double(c) => format!("{}{}", c.label(), c.label()),
            Card::Character(name) => name.clone(),
        }
    }
}
