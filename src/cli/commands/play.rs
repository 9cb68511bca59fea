//! Play command - select one move for a supplied board

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::MsgPackRepository,
    engine::{Engine, EngineConfig, Fallback},
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Select a move for a board position")]
pub struct PlayArgs {
    /// Board as 9 cell characters, e.g. "XX..O...."
    #[arg(long, short = 'b')]
    pub board: String,

    /// Symbol the engine plays ("x" or "o")
    #[arg(long, short = 's', default_value = "o")]
    pub symbol: String,

    /// Snapshot location
    #[arg(long, default_value = "model/brain.msgpack")]
    pub model: PathBuf,

    /// Use the minimax oracle when the table has no signal
    #[arg(long)]
    pub minimax: bool,

    /// Random seed for deterministic tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    // Adapter duty: reject malformed input before it reaches the core
    let board = Board::from_string(&args.board)?;
    let symbol = Player::from_token(&args.symbol)?;

    let fallback = if args.minimax {
        Fallback::Minimax
    } else {
        Fallback::Heuristic
    };
    let config = EngineConfig::new()
        .with_model_path(args.model)
        .with_fallback(fallback);
    let config = match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };

    let repository = MsgPackRepository::new();
    let mut engine = Engine::new(config);
    if !engine.load(&repository)? {
        eprintln!("No prior snapshot found, playing from an empty table");
    }

    let position = engine.select_move(&board, symbol)?;
    println!("{}", serde_json::json!({ "move": position }));
    Ok(())
}
