//! Error types for the tacticq crate

use thiserror::Error;

/// Main error type for the tacticq crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid move: position {position} is not a legal move")]
    InvalidMove { position: usize },

    #[error("no legal move: the board is full")]
    NoLegalMove,

    #[error("invalid state key '{key}': {reason}")]
    InvalidStateKey { key: String, reason: String },

    #[error("invalid player '{player}' (expected 'X' or 'O')")]
    InvalidPlayer { player: String },

    #[error("unsupported snapshot version {found} (expected {expected})")]
    SnapshotVersion { found: u32, expected: u32 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
