//! Reset command - remove the persisted snapshot

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Delete the persisted snapshot")]
pub struct ResetArgs {
    /// Snapshot location
    #[arg(long, default_value = "model/brain.msgpack")]
    pub model: PathBuf,
}

pub fn execute(args: ResetArgs) -> Result<()> {
    if args.model.exists() {
        std::fs::remove_file(&args.model)?;
        println!("Removed snapshot at {}", args.model.display());
    } else {
        println!("No snapshot at {}", args.model.display());
    }
    Ok(())
}
