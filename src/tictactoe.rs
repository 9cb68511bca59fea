//! Tic-Tac-Toe game model

pub mod board;
pub mod lines;

pub use board::{Board, Cell, GameStatus, Player};
pub use lines::WIN_LINES;
