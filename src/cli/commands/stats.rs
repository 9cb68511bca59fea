//! Stats command - report counters from the persisted snapshot

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::MsgPackRepository,
    engine::{Engine, EngineConfig},
};

#[derive(Parser, Debug)]
#[command(about = "Show Q-table size and game counters")]
pub struct StatsArgs {
    /// Snapshot location
    #[arg(long, default_value = "model/brain.msgpack")]
    pub model: PathBuf,
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let repository = MsgPackRepository::new();
    let mut engine = Engine::new(EngineConfig::new().with_model_path(args.model));
    if !engine.load(&repository)? {
        eprintln!("No prior snapshot found, reporting an empty table");
    }

    println!("{}", serde_json::to_string_pretty(&engine.report())?);
    Ok(())
}
