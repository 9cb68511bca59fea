//! The decision engine: tactical rules composed with the learned Q-table,
//! plus the self-play episode that trains it.

use std::path::PathBuf;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Result,
    pipeline::{TrainingConfig, TrainingPipeline, TrainingSummary},
    ports::SnapshotRepository,
    q_learning::QTable,
    search,
    snapshot::Snapshot,
    stats::{Stats, StatsReport},
    tactics,
    tictactoe::{Board, GameStatus, Player},
    types::StateKey,
};

/// Strategy used when the Q-table carries no signal for the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Positional heuristic (center > corner > edge)
    #[default]
    Heuristic,
    /// Exhaustive minimax oracle, selectable but never wired in by default
    Minimax,
}

/// Engine configuration with builder-style setters.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Learning rate α
    pub learning_rate: f64,
    /// Discount factor γ
    pub discount_factor: f64,
    /// Exploration rate ε for self-play
    pub epsilon: f64,
    /// Fallback strategy for uninformative states
    pub fallback: Fallback,
    /// Snapshot location for save/load
    pub model_path: PathBuf,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.9,
            epsilon: 0.1,
            fallback: Fallback::default(),
            model_path: PathBuf::from("model/brain.msgpack"),
            seed: None,
        }
    }

    pub fn with_learning_rate(mut self, alpha: f64) -> Self {
        self.learning_rate = alpha;
        self
    }

    pub fn with_discount_factor(mut self, gamma: f64) -> Self {
        self.discount_factor = gamma;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Move-selection and training engine owning the learned state.
///
/// The Q-table and stats live here and nowhere else; move selection reads
/// them, self-play writes them, so trained knowledge is visible to the next
/// move request immediately. All methods take `&mut self`, so a single
/// engine instance serializes access to its table by construction, which is
/// the discipline required when an outer layer handles concurrent requests.
///
/// Role asymmetry: the engine always plays the O role internally. The
/// `symbol` argument of [`Engine::select_move`] is accepted for interface
/// compatibility but does not vary the tactical checks.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    q_table: QTable,
    stats: Stats,
    rng: StdRng,
}

impl Engine {
    /// Create an engine with an empty table
    pub fn new(config: EngineConfig) -> Self {
        let q_table = QTable::new(config.learning_rate, config.discount_factor);
        let rng = build_rng(config.seed);
        Self {
            config,
            q_table,
            stats: Stats::default(),
            rng,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Select a move for the given board.
    ///
    /// Priority: own immediate win, block of the opponent's immediate win,
    /// best-valued learned action (uniform random among ties), then the
    /// configured fallback when every candidate value is zero.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoLegalMove`] when the board is full.
    pub fn select_move(&mut self, board: &Board, _symbol: Player) -> Result<usize> {
        let valid_moves = board.valid_moves();
        if valid_moves.is_empty() {
            return Err(crate::Error::NoLegalMove);
        }

        if let Some(win) = tactics::winning_move(board, Player::O) {
            return Ok(win);
        }
        if let Some(block) = tactics::winning_move(board, Player::X) {
            return Ok(block);
        }

        let state = board.key();
        if self.q_table.is_uninformative(&state, &valid_moves) {
            let fallback_move = match self.config.fallback {
                Fallback::Heuristic => tactics::heuristic_move(board, &valid_moves, &mut self.rng),
                Fallback::Minimax => {
                    search::best_move(board).ok_or(crate::Error::NoLegalMove)?
                }
            };
            return Ok(fallback_move);
        }

        Ok(self.greedy_action(&state, &valid_moves))
    }

    /// Max-Q action with uniform random tie-breaking
    fn greedy_action(&mut self, state: &StateKey, valid_moves: &[usize]) -> usize {
        let max_q = self.q_table.max_q(state, valid_moves);
        let best: Vec<usize> = valid_moves
            .iter()
            .copied()
            .filter(|&action| self.q_table.get(state, action) == max_q)
            .collect();
        *best
            .choose(&mut self.rng)
            .expect("non-empty valid moves always yield a best action")
    }

    /// ε-greedy action used during self-play
    fn training_action(&mut self, board: &Board, valid_moves: &[usize]) -> usize {
        if self.rng.random::<f64>() < self.config.epsilon {
            return *valid_moves
                .choose(&mut self.rng)
                .expect("non-empty valid moves");
        }

        let state = board.key();
        if self.q_table.is_uninformative(&state, valid_moves) {
            tactics::heuristic_move(board, valid_moves, &mut self.rng)
        } else {
            self.greedy_action(&state, valid_moves)
        }
    }

    /// Play one full self-play episode and fold its outcome into the table.
    ///
    /// Both sides share this engine's table and policy. At the terminal
    /// position every recorded (state, action, mover) triple receives one
    /// shaped reward update, in chronological order: draws pay +0.1 to all
    /// moves, the winner's moves pay more the earlier the win arrived, the
    /// loser's moves pay a flat -1.0.
    pub fn run_episode(&mut self) -> Result<GameStatus> {
        let mut board = Board::new();
        let mut current = Player::X;
        let mut history: Vec<(StateKey, usize, Player)> = Vec::new();

        loop {
            let valid_moves = board.valid_moves();
            let state = board.key();
            let action = self.training_action(&board, &valid_moves);

            board = board.place(action, current)?;
            history.push((state, action, current));

            let status = board.status();
            if status.is_terminal() {
                self.apply_rewards(&history, &board, status);
                self.stats.record(status);
                return Ok(status);
            }

            current = current.opponent();
        }
    }

    fn apply_rewards(&mut self, history: &[(StateKey, usize, Player)], terminal: &Board, outcome: GameStatus) {
        let terminal_key = terminal.key();
        let total = history.len();

        for (i, (state, action, mover)) in history.iter().enumerate() {
            let reward = match outcome {
                GameStatus::Draw => 0.1,
                GameStatus::Won(winner) if winner == *mover => {
                    // Earlier wins pay more: steps_remaining counts moves
                    // from this one to the winning move inclusive
                    let steps_remaining = total - i;
                    1.0 + 0.1 * (9 - steps_remaining) as f64
                }
                GameStatus::Won(_) => -1.0,
                GameStatus::InProgress => unreachable!("rewards applied at terminal only"),
            };

            let next_state = if i + 1 < total {
                history[i + 1].0.clone()
            } else {
                terminal_key.clone()
            };

            self.q_table
                .update(state.clone(), *action, reward, &next_state);
        }
    }

    /// Run `episodes` sequential self-play episodes without observers
    pub fn train(&mut self, episodes: usize) -> Result<TrainingSummary> {
        TrainingPipeline::new(TrainingConfig { episodes }).run(self)
    }

    /// Clear the learned table and counters; persisted files are untouched
    pub fn reset(&mut self) {
        self.q_table = QTable::new(self.config.learning_rate, self.config.discount_factor);
        self.stats.reset();
        self.rng = build_rng(self.config.seed);
    }

    /// Counters plus the current table size
    pub fn report(&self) -> StatsReport {
        StatsReport::new(self.q_table.size(), &self.stats)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Persist the Q-table and stats as one snapshot
    pub fn save(&self, repository: &dyn SnapshotRepository) -> Result<()> {
        let snapshot = Snapshot::new(self.q_table.clone(), self.stats.clone());
        repository.save(&snapshot, &self.config.model_path)
    }

    /// Load a prior snapshot if one exists.
    ///
    /// Returns `false` when no snapshot is present; the engine keeps its
    /// empty table and the caller may log a notice.
    pub fn load(&mut self, repository: &dyn SnapshotRepository) -> Result<bool> {
        match repository.load(&self.config.model_path)? {
            Some(snapshot) => {
                self.q_table = snapshot.q_table;
                self.stats = snapshot.stats;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
