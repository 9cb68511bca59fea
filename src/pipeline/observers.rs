//! Observer implementations for training runs

use indicatif::ProgressBar;

use crate::{
    Result,
    ports::Observer,
    tictactoe::{GameStatus, Player},
};

/// How often the progress message (running win rate) is refreshed
const MESSAGE_INTERVAL: usize = 1000;

/// Progress bar observer for interactive training runs.
///
/// Advances an indicatif bar per episode and refreshes a running
/// X-perspective win-rate message every [`MESSAGE_INTERVAL`] episodes.
pub struct ProgressObserver {
    bar: ProgressBar,
    x_wins: usize,
    episodes: usize,
}

impl ProgressObserver {
    pub fn new(bar: ProgressBar) -> Self {
        Self {
            bar,
            x_wins: 0,
            episodes: 0,
        }
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        self.bar.set_length(total_episodes as u64);
        Ok(())
    }

    fn on_episode_end(&mut self, _episode: usize, outcome: GameStatus) -> Result<()> {
        self.episodes += 1;
        if outcome == GameStatus::Won(Player::X) {
            self.x_wins += 1;
        }

        self.bar.inc(1);
        if self.episodes.is_multiple_of(MESSAGE_INTERVAL) {
            let rate = self.x_wins as f64 / self.episodes as f64 * 100.0;
            self.bar.set_message(format!("X win rate {rate:.1}%"));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.bar.finish_and_clear();
        Ok(())
    }
}
