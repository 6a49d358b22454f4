//! Board configuration files: TOML schema, loading, and the built-in
//! fallback used when no file is supplied.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::types::{Board, Space};
use super::CandyLand;

/// Top-level TOML file structure: a `[[spaces]]` record per board cell plus
/// the deck multiset and the character/bridge name lists.
#[derive(Debug, Deserialize, Clone)]
pub struct BoardFile {
    #[serde(default)]
    pub spaces: Vec<Space>,
    #[serde(default)]
    pub deck: HashMap<String, u32>,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub bridges: Vec<String>,
}

impl BoardFile {
    /// Validate the file into a playable game.
    pub fn into_game(self) -> Result<CandyLand, String> {
        CandyLand::new(
            Board::new(self.spaces),
            &self.deck,
            &self.characters,
            &self.bridges,
        )
    }
}

/// Load and validate a board from a TOML file at the given path.
pub fn load_board(path: &Path) -> Result<CandyLand, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let file: BoardFile =
        toml::from_str(&content).map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;
    file.into_game()
        .map_err(|e| format!("invalid board in {}: {}", path.display(), e))
}

/// Try well-known paths, falling back to the built-in standard board.
pub fn load_default_board() -> CandyLand {
    let candidates = [
        "candyland.toml",
        "../candyland.toml",
        "/etc/candyland/board.toml",
    ];
    for path in &candidates {
        let p = Path::new(path);
        if p.exists() {
            match load_board(p) {
                Ok(game) => {
                    tracing::info!(path = %p.display(), spaces = game.board().len(), "loaded board file");
                    return game;
                }
                Err(e) => {
                    tracing::warn!(path = %p.display(), error = %e, "failed to load board file");
                }
            }
        }
    }
    tracing::info!("no board file found, using built-in standard board");
    CandyLand::standard()
}
