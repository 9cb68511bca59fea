//! Q-table implementation for temporal difference learning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::StateKey;

/// Q-table mapping states to per-action value estimates.
///
/// Sparse map-of-maps keyed by [`StateKey`]; unseen (state, action) pairs
/// read as 0.0 without being inserted, so lookups never grow the table.
/// Grows monotonically during training and shrinks only on [`QTable::reset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    /// state -> (action position -> Q-value)
    values: HashMap<StateKey, HashMap<usize, f64>>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create a new empty Q-table with fixed α and γ
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: HashMap::new(),
            learning_rate,
            discount_factor,
        }
    }

    /// Get the stored estimate for a state-action pair, defaulting to 0.0
    pub fn get(&self, state: &StateKey, action: usize) -> f64 {
        self.values
            .get(state)
            .and_then(|actions| actions.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Set the estimate for a state-action pair
    pub fn set(&mut self, state: StateKey, action: usize, value: f64) {
        self.values.entry(state).or_default().insert(action, value);
    }

    /// Maximum Q-value over the given actions; 0.0 for an empty action set
    pub fn max_q(&self, state: &StateKey, actions: &[usize]) -> f64 {
        if actions.is_empty() {
            return 0.0;
        }
        actions
            .iter()
            .map(|&action| self.get(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Q-learning update: off-policy TD control
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// Legal next actions are derived from the next state key's empty
    /// cells; a terminal next state (no empty cells) contributes 0.
    pub fn update(&mut self, state: StateKey, action: usize, reward: f64, next_state: &StateKey) {
        let current_q = self.get(&state, action);
        let next_actions = next_state.valid_moves();
        let max_next_q = if next_actions.is_empty() {
            0.0
        } else {
            self.max_q(next_state, &next_actions)
        };
        let td_target = reward + self.discount_factor * max_next_q;
        let new_q = current_q + self.learning_rate * (td_target - current_q);
        self.set(state, action, new_q);
    }

    /// Number of distinct states with at least one recorded action
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Clear all recorded values
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Whether every given action reads as exactly 0.0 for this state.
    ///
    /// True for unseen states; the policy treats such states as carrying no
    /// signal and falls back to the tactical heuristic.
    pub fn is_uninformative(&self, state: &StateKey, actions: &[usize]) -> bool {
        actions.iter().all(|&action| self.get(state, action) == 0.0)
    }
}
