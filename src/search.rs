//! Exhaustive game-tree search with alpha-beta pruning.
//!
//! Scores are from the engine's perspective: O is the maximizing role.
//! Available as a selectable oracle via [`crate::engine::Fallback::Minimax`];
//! the default decision path does not invoke it.

use crate::tictactoe::{Board, GameStatus, Player};

/// Score for a position the maximizing role (O) has won
pub const MAX_WIN: i32 = 10;
/// Score for a position the minimizing role (X) has won
pub const MIN_WIN: i32 = -10;
/// Score for a drawn position
pub const DRAW: i32 = 0;

/// Game-theoretic value of `board` with alpha-beta pruning.
///
/// `maximizing` is true when O is to move. Boards are `Copy`, so every
/// recursive call works on its own state and the caller's board is
/// untouched on all paths, pruned branches included.
pub fn minimax(board: &Board, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
    match board.status() {
        GameStatus::Won(Player::O) => return MAX_WIN,
        GameStatus::Won(Player::X) => return MIN_WIN,
        GameStatus::Draw => return DRAW,
        GameStatus::InProgress => {}
    }

    let valid_moves = board.valid_moves();

    if maximizing {
        let mut best = i32::MIN;
        for pos in valid_moves {
            let child = board
                .place(pos, Player::O)
                .expect("valid move placement cannot fail");
            let score = minimax(&child, false, alpha, beta);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for pos in valid_moves {
            let child = board
                .place(pos, Player::X)
                .expect("valid move placement cannot fail");
            let score = minimax(&child, true, alpha, beta);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Best move for O by one-ply expansion into [`minimax`].
///
/// Evaluates moves in ascending index order and keeps the strictly greatest
/// score; first-seen wins ties. Returns `None` on a full board.
pub fn best_move(board: &Board) -> Option<usize> {
    let mut best_score = i32::MIN;
    let mut best_pos = None;

    for pos in board.valid_moves() {
        let child = board
            .place(pos, Player::O)
            .expect("valid move placement cannot fail");
        let score = minimax(&child, false, i32::MIN, i32::MAX);
        if score > best_score {
            best_score = score;
            best_pos = Some(pos);
        }
    }

    best_pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_empty_board_is_drawn() {
        let b = Board::new();
        // X moves first on an empty board
        assert_eq!(minimax(&b, false, i32::MIN, i32::MAX), DRAW);
    }

    #[test]
    fn test_immediate_win_scores_max() {
        // O to move with OO. on the top row
        let b = board("OO..X..X.");
        assert_eq!(minimax(&b, true, i32::MIN, i32::MAX), MAX_WIN);
    }

    #[test]
    fn test_best_move_takes_the_win() {
        let b = board("OO..X..X.");
        assert_eq!(best_move(&b), Some(2));
    }

    #[test]
    fn test_best_move_blocks_forced_loss() {
        // X threatens the top row; every non-blocking O reply loses
        let b = board("XX..O....");
        assert_eq!(best_move(&b), Some(2));
    }

    #[test]
    fn test_best_move_none_on_full_board() {
        let b = board("XOXXOOOXX");
        assert_eq!(best_move(&b), None);
    }

    #[test]
    fn test_caller_board_untouched() {
        let b = board("OO..X..X.");
        let before = b;
        let _ = minimax(&b, true, i32::MIN, i32::MAX);
        let _ = best_move(&b);
        assert_eq!(b, before);
    }
}
