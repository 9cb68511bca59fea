//! Train command - self-play training against the persisted snapshot

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::MsgPackRepository,
    cli::output,
    engine::{Engine, EngineConfig},
    pipeline::{ProgressObserver, TrainingConfig, TrainingPipeline},
};

#[derive(Parser, Debug)]
#[command(about = "Train the engine by self-play")]
pub struct TrainArgs {
    /// Number of self-play episodes
    #[arg(long, short = 'e', default_value_t = 10_000)]
    pub episodes: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Snapshot location
    #[arg(long, default_value = "model/brain.msgpack")]
    pub model: PathBuf,

    /// Learning rate α
    #[arg(long, default_value_t = 0.1)]
    pub learning_rate: f64,

    /// Discount factor γ
    #[arg(long, default_value_t = 0.9)]
    pub discount_factor: f64,

    /// Exploration rate ε
    #[arg(long, default_value_t = 0.1)]
    pub epsilon: f64,

    /// Suppress the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Discard any prior snapshot instead of training on top of it
    #[arg(long)]
    pub fresh: bool,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let config = EngineConfig::new()
        .with_learning_rate(args.learning_rate)
        .with_discount_factor(args.discount_factor)
        .with_epsilon(args.epsilon)
        .with_model_path(args.model);
    let config = match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };

    let repository = MsgPackRepository::new();
    let mut engine = Engine::new(config);

    if !args.fresh && !engine.load(&repository)? {
        eprintln!("No prior snapshot found, starting with an empty table");
    }

    let mut pipeline = TrainingPipeline::new(TrainingConfig {
        episodes: args.episodes,
    });
    if !args.no_progress {
        let bar = output::create_training_progress(args.episodes as u64);
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new(bar)));
    }

    let summary = pipeline.run(&mut engine)?;
    engine.save(&repository)?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
