//! tacticq CLI - Tic-Tac-Toe engine combining tactical rules with tabular
//! Q-learning
//!
//! Subcommands:
//! - Train the engine by self-play
//! - Request a move for a board position
//! - Inspect or remove the persisted snapshot

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tacticq")]
#[command(version, about = "Tic-Tac-Toe engine with tabular Q-learning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the engine by self-play
    Train(tacticq::cli::commands::train::TrainArgs),

    /// Select a move for a board position
    Play(tacticq::cli::commands::play::PlayArgs),

    /// Show Q-table size and game counters
    Stats(tacticq::cli::commands::stats::StatsArgs),

    /// Delete the persisted snapshot
    Reset(tacticq::cli::commands::reset::ResetArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => tacticq::cli::commands::train::execute(args),
        Commands::Play(args) => tacticq::cli::commands::play::execute(args),
        Commands::Stats(args) => tacticq::cli::commands::stats::execute(args),
        Commands::Reset(args) => tacticq::cli::commands::reset::execute(args),
    }
}
