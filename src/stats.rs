//! Aggregate game counters persisted alongside the Q-table

use serde::{Deserialize, Serialize};

use crate::tictactoe::{GameStatus, Player};

/// Running self-play counters.
///
/// `wins` and `losses` are relative to X, the player who always moves first
/// in self-play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl Stats {
    /// Record a finished episode
    pub fn record(&mut self, outcome: GameStatus) {
        self.total_games += 1;
        match outcome {
            GameStatus::Won(Player::X) => self.wins += 1,
            GameStatus::Won(Player::O) => self.losses += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Zero all counters
    pub fn reset(&mut self) {
        *self = Stats::default();
    }

    /// Fraction of games won by X; 0.0 before any game
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}

/// Snapshot of counters plus the current table size, the shape reported to
/// external callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    pub q_table_size: usize,
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl StatsReport {
    pub fn new(q_table_size: usize, stats: &Stats) -> Self {
        Self {
            q_table_size,
            total_games: stats.total_games,
            wins: stats.wins,
            losses: stats.losses,
            draws: stats.draws,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_attributes_to_x() {
        let mut stats = Stats::default();
        stats.record(GameStatus::Won(Player::X));
        stats.record(GameStatus::Won(Player::O));
        stats.record(GameStatus::Draw);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.draws, 1);
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut stats = Stats::default();
        stats.record(GameStatus::Draw);
        stats.reset();
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn test_win_rate() {
        let mut stats = Stats::default();
        assert_eq!(stats.win_rate(), 0.0);
        stats.record(GameStatus::Won(Player::X));
        stats.record(GameStatus::Draw);
        assert!((stats.win_rate() - 0.5).abs() < 1e-12);
    }
}
