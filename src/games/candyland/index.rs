//! Position index: one board scan producing the lookups the traversal rules
//! need, with fail-fast validation of the board invariants.

use std::collections::HashMap;

use super::types::*;

/// Precomputed lookups: character name → space index, bridge name → the
/// bridge's end index. Built once per board; a name that is absent here was
/// rejected at construction, so traversal never resolves a missing one.
#[derive(Debug, Clone)]
pub struct PositionIndex {
    characters: HashMap<String, usize>,
    bridge_ends: HashMap<String, usize>,
}

impl PositionIndex {
    /// Scan the board once and validate it:
    /// exactly one start space at position 0, exactly one end space at the
    /// last position, every listed character and bridge resolving to exactly
    /// one space, every bridge-start naming a known bridge, and every miss
    /// space immediately followed by its skip space.
    pub fn build(
        board: &Board,
        characters: &[String],
        bridges: &[String],
    ) -> Result<PositionIndex, String> {
        if board.len() < 2 {
            return Err(format!(
                "board needs at least a start and an end space, got {} spaces",
                board.len()
            ));
        }

        let mut character_positions: HashMap<String, usize> = HashMap::new();
        let mut bridge_end_positions: HashMap<String, usize> = HashMap::new();
        let mut start_positions: Vec<usize> = Vec::new();
        let mut end_positions: Vec<usize> = Vec::new();

        for (position, space) in board.spaces.iter().enumerate() {
            if space.feature_count() > 1 {
                return Err(format!(
                    "space {position} combines more than one defining feature"
                ));
            }
            match space.special {
                Some(SpecialKind::Start) => start_positions.push(position),
                Some(SpecialKind::End) => end_positions.push(position),
                Some(SpecialKind::Miss) => {
                    let next = board.spaces.get(position + 1);
                    if next.map(|s| s.special) != Some(Some(SpecialKind::Skip)) {
                        return Err(format!(
                            "miss space {position} is not followed by a skip space"
                        ));
                    }
                }
                _ => {}
            }
            if let Some(name) = &space.character {
                if character_positions.insert(name.clone(), position).is_some() {
                    return Err(format!("character '{name}' appears on more than one space"));
                }
            }
            if let Some(name) = &space.bridge_end {
                if bridge_end_positions.insert(name.clone(), position).is_some() {
                    return Err(format!("bridge '{name}' ends on more than one space"));
                }
            }
        }

        if start_positions != vec![0] {
            return Err(format!(
                "board must have exactly one start space at position 0, found {start_positions:?}"
            ));
        }
        if end_positions != vec![board.terminal_index()] {
            return Err(format!(
                "board must have exactly one end space at the last position, found {end_positions:?}"
            ));
        }

        for name in characters {
            if !character_positions.contains_key(name) {
                return Err(format!("character '{name}' has no space on the board"));
            }
        }
        for name in bridges {
            if !bridge_end_positions.contains_key(name) {
                return Err(format!("bridge '{name}' has no end space on the board"));
            }
        }
        for (position, space) in board.spaces.iter().enumerate() {
            if let Some(name) = &space.bridge_start {
                if !bridge_end_positions.contains_key(name) {
                    return Err(format!(
                        "bridge start '{name}' at space {position} has no matching end space"
                    ));
                }
            }
        }

        Ok(PositionIndex {
            characters: character_positions,
            bridge_ends: bridge_end_positions,
        })
    }

    pub fn character_position(&self, name: &str) -> Option<usize> {
        self.characters.get(name).copied()
    }

    pub fn bridge_end(&self, name: &str) -> Option<usize> {
        self.bridge_ends.get(name).copied()
    }
}
