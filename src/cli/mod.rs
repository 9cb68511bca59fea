//! CLI infrastructure for the tacticq engine
//!
//! Provides the command-line interface for training the engine, requesting
//! moves, and managing the persisted snapshot.

pub mod commands;
pub mod output;
