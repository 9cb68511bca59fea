//! Sequential self-play training over a single engine

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    engine::Engine,
    ports::Observer,
    tictactoe::{GameStatus, Player},
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of self-play episodes to run
    pub episodes: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self { episodes: 1000 }
    }
}

/// Result of a training run.
///
/// Wins and losses are attributed to X, the side that always opens in
/// self-play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub episodes: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
    pub q_table_size: usize,
}

impl TrainingSummary {
    pub fn new(episodes: usize, x_wins: usize, o_wins: usize, draws: usize, q_table_size: usize) -> Self {
        let rate = |n: usize| {
            if episodes > 0 {
                n as f64 / episodes as f64
            } else {
                0.0
            }
        };
        Self {
            episodes,
            x_wins,
            o_wins,
            draws,
            win_rate: rate(x_wins),
            draw_rate: rate(draws),
            loss_rate: rate(o_wins),
            q_table_size,
        }
    }
}

/// Drives N sequential episodes against one engine, notifying observers.
///
/// Episodes accumulate into the engine's table and stats; nothing is reset
/// between runs. A batch runs to completion; there is no cancellation.
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run the configured number of episodes
    pub fn run(&mut self, engine: &mut Engine) -> Result<TrainingSummary> {
        let mut x_wins = 0;
        let mut o_wins = 0;
        let mut draws = 0;

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        for episode in 0..self.config.episodes {
            let outcome = engine.run_episode()?;

            match outcome {
                GameStatus::Won(Player::X) => x_wins += 1,
                GameStatus::Won(Player::O) => o_wins += 1,
                GameStatus::Draw => draws += 1,
                GameStatus::InProgress => {}
            }

            for observer in &mut self.observers {
                observer.on_episode_end(episode, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingSummary::new(
            self.config.episodes,
            x_wins,
            o_wins,
            draws,
            engine.q_table().size(),
        ))
    }
}
