//! Tabular Q-learning: the sparse state/action value table and its
//! temporal-difference update rule.

pub mod q_table;

pub use q_table::QTable;
