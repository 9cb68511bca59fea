//! Observer port for training progress reporting
//!
//! Observers let the training pipeline report progress without coupling to
//! a specific output mechanism (progress bars, logs, test probes).

use crate::{Result, tictactoe::GameStatus};

/// Observer trait for monitoring a training run.
///
/// Hooks are called in order: `on_training_start` once, `on_episode_end`
/// after every self-play episode, `on_training_end` once. All hooks default
/// to no-ops so implementors override only what they need.
pub trait Observer {
    /// Called once before the first episode with the planned episode count
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each episode with its index and terminal outcome
    fn on_episode_end(&mut self, _episode: usize, _outcome: GameStatus) -> Result<()> {
        Ok(())
    }

    /// Called once after the last episode
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
