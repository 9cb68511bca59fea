//! Domain newtypes shared across modules

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Cell};

/// Validated encoding of a board state, used as the Q-table key.
///
/// Holds exactly 9 cell characters (`.`, `X`, `O`). Two boards map to the
/// same key iff every cell matches; there is no symmetry reduction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateKey(String);

impl StateKey {
    /// Encode a board as a state key
    pub fn from_board(board: &Board) -> Self {
        StateKey(board.cells.iter().map(|&c| c.to_char()).collect())
    }

    /// Parse and validate a raw key string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStateKey`] if the string is not exactly
    /// 9 valid cell characters.
    pub fn parse(raw: &str) -> Result<Self, crate::Error> {
        if raw.chars().count() != 9 {
            return Err(crate::Error::InvalidStateKey {
                key: raw.to_string(),
                reason: "expected exactly 9 cell characters".to_string(),
            });
        }
        for (i, c) in raw.chars().enumerate() {
            if Cell::from_char(c).is_none() {
                return Err(crate::Error::InvalidStateKey {
                    key: raw.to_string(),
                    reason: format!("invalid cell character '{c}' at position {i}"),
                });
            }
        }
        Ok(StateKey(raw.to_string()))
    }

    /// Empty positions encoded in the key, in ascending index order.
    ///
    /// Lets the Q-update enumerate next-state actions without carrying the
    /// board alongside the key.
    pub fn valid_moves(&self) -> Vec<usize> {
        self.0
            .chars()
            .enumerate()
            .filter(|&(_, c)| Cell::from_char(c) == Some(Cell::Empty))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
