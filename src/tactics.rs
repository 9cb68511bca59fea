//! Tactical rule engine: immediate win/block detection and the positional
//! priority heuristic used whenever the Q-table carries no signal.

use rand::{Rng, seq::IndexedRandom};

use crate::tictactoe::{Board, Player, lines};

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];
const EDGES: [usize; 4] = [1, 3, 5, 7];

/// Find the move that immediately wins for `player`, or that blocks `player`
/// when called with the opponent's symbol.
///
/// Returns the first completion in fixed win-line order.
pub fn winning_move(board: &Board, player: Player) -> Option<usize> {
    lines::winning_move(&board.cells, player)
}

/// Positional fallback policy, in priority order:
/// own immediate win, block, center, random free corner, random free edge,
/// first valid move.
///
/// The win/block steps use the engine's fixed O role (see [`crate::engine`]).
pub fn heuristic_move<R: Rng>(board: &Board, valid_moves: &[usize], rng: &mut R) -> usize {
    if let Some(win) = winning_move(board, Player::O)
        && valid_moves.contains(&win)
    {
        return win;
    }

    if let Some(block) = winning_move(board, Player::X)
        && valid_moves.contains(&block)
    {
        return block;
    }

    if valid_moves.contains(&CENTER) {
        return CENTER;
    }

    let corners: Vec<usize> = valid_moves
        .iter()
        .copied()
        .filter(|m| CORNERS.contains(m))
        .collect();
    if let Some(&corner) = corners.choose(rng) {
        return corner;
    }

    let edges: Vec<usize> = valid_moves
        .iter()
        .copied()
        .filter(|m| EDGES.contains(m))
        .collect();
    if let Some(&edge) = edges.choose(rng) {
        return edge;
    }

    valid_moves[0]
}
