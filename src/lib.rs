//! Tic-Tac-Toe decision engine with tabular Q-learning
//!
//! This crate provides:
//! - Board model with win/draw detection
//! - Tactical rule engine (immediate win/block, positional heuristic)
//! - Minimax with alpha-beta pruning as a selectable oracle
//! - Tabular Q-learning trained by self-play
//! - MessagePack persistence of the learned table and stats

pub mod adapters;
pub mod cli;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod search;
pub mod snapshot;
pub mod stats;
pub mod tactics;
pub mod tictactoe;
pub mod types;

pub use engine::{Engine, EngineConfig, Fallback};
pub use error::{Error, Result};
pub use snapshot::Snapshot;
pub use stats::{Stats, StatsReport};
pub use types::StateKey;
