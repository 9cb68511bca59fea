//! Self-play training pipeline and its observers

pub mod observers;
pub mod training;

pub use observers::ProgressObserver;
pub use training::{TrainingConfig, TrainingPipeline, TrainingSummary};
