//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player has three in a row
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

/// Find the position completing a win for `player`, if one exists.
///
/// Scans lines in the fixed [`WIN_LINES`] order and returns the first line
/// holding exactly two of the player's pieces and one empty cell. The line
/// order is the reproducible tie-break when several completions exist.
pub fn winning_move(cells: &[Cell; 9], player: Player) -> Option<usize> {
    WIN_LINES
        .iter()
        .find_map(|line| winning_move_in_line(cells, player, line))
}

fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
    let target = player.to_cell();
    let mut count = 0;
    let mut empty_pos = None;

    for &idx in line {
        match cells[idx] {
            Cell::Empty => {
                if empty_pos.is_some() {
                    // More than one empty cell, not a completion
                    return None;
                }
                empty_pos = Some(idx);
            }
            c if c == target => count += 1,
            _ => return None, // Opponent piece in line
        }
    }

    if count == 2 { empty_pos } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board;

    fn cells(s: &str) -> [Cell; 9] {
        Board::from_string(s).unwrap().cells
    }

    #[test]
    fn test_has_won_each_direction() {
        assert!(has_won(&cells("XXX......"), Player::X));
        assert!(has_won(&cells("O..O..O.."), Player::O));
        assert!(has_won(&cells("X...X...X"), Player::X));
        assert!(!has_won(&cells("XX.O..O.."), Player::X));
    }

    #[test]
    fn test_winning_move_found() {
        // X.X on the top row completes at 1
        assert_eq!(winning_move(&cells("X.X......"), Player::X), Some(1));
        // OO. on the top row completes at 2
        assert_eq!(winning_move(&cells("OO.......") , Player::O), Some(2));
    }

    #[test]
    fn test_winning_move_blocked_line_ignored() {
        // Top row has an opponent piece, column 0-3-6 is open for X
        assert_eq!(winning_move(&cells("XXO...X.."), Player::X), Some(3));
    }

    #[test]
    fn test_winning_move_first_line_order_wins() {
        // XX. top row and X.X left column both complete; row [0,1,2]
        // comes first in WIN_LINES
        assert_eq!(winning_move(&cells("XX.X.....") , Player::X), Some(2));
    }

    #[test]
    fn test_no_winning_move() {
        assert_eq!(winning_move(&cells("X........"), Player::X), None);
        assert_eq!(winning_move(&cells("........."), Player::O), None);
    }
}
