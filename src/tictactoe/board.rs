//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines;
use crate::types::StateKey;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Parse a player token ("X"/"x" or "O"/"o")
    pub fn from_token(token: &str) -> Result<Player, crate::Error> {
        match token.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayer {
                player: other.to_string(),
            }),
        }
    }
}

/// Result of scanning a board for a terminal condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Won(Player),
    Draw,
    InProgress,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A 3x3 board, row-major.
///
/// `Copy` by design: moves produce new boards via [`Board::place`], so
/// search and self-play never need to undo a move on a shared buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a slice of cells.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardLength`] unless exactly 9 cells
    /// are given.
    pub fn from_cells(cells: &[Cell]) -> Result<Self, crate::Error> {
        let cells: [Cell; 9] =
            cells
                .try_into()
                .map_err(|_| crate::Error::InvalidBoardLength {
                    expected: 9,
                    got: cells.len(),
                    context: "cell slice".to_string(),
                })?;
        Ok(Board { cells })
    }

    /// Create a board from a 9-character string such as `"XX..O...."`.
    ///
    /// Whitespace is filtered out before parsing. Accepts `.`/`-` for empty
    /// cells and upper- or lowercase piece characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the cleaned string is not exactly 9 characters or
    /// contains a character that is not a valid cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: cleaned.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in cleaned.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Check if the board has no empty cells left
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// All empty positions in ascending index order
    pub fn valid_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a piece and return the new board state
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the position is out of
    /// bounds or occupied.
    #[must_use = "place returns a new board state; the original is unchanged"]
    pub fn place(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        if pos >= 9 || !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut next = *self;
        next.cells[pos] = player.to_cell();
        Ok(next)
    }

    /// Scan for a terminal condition.
    ///
    /// Checks all 8 win lines; a fully-matched non-empty line wins for its
    /// owner. A full board without a winner is a draw.
    pub fn status(&self) -> GameStatus {
        for player in [Player::X, Player::O] {
            if lines::has_won(&self.cells, player) {
                return GameStatus::Won(player);
            }
        }
        if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Swap X and O pieces, used to verify relabeling symmetry in tests
    #[must_use = "swap_players returns a new board state; the original is unchanged"]
    pub fn swap_players(&self) -> Self {
        let mut swapped = *self;
        for cell in &mut swapped.cells {
            *cell = match cell {
                Cell::X => Cell::O,
                Cell::O => Cell::X,
                Cell::Empty => Cell::Empty,
            };
        }
        swapped
    }

    /// Encode the board as the key used in the Q-table.
    ///
    /// Two boards produce the same key iff every cell matches.
    pub fn key(&self) -> StateKey {
        StateKey::from_board(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
