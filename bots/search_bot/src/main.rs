use std::process::ExitCode;

use advance::{Board, Color, Engine, Move, NoLegalMove, DEFAULT_SEARCH_DEPTH};
use advance_bot_utils::{Bot, ProtocolArgs};
use clap::Parser;
use tracing::debug;

#[derive(Parser)]
struct Args {
    #[command(flatten)]
    protocol: ProtocolArgs,

    /// How many plies to look ahead
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH, value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,
}

/// Plays the move found by alpha-beta search.
struct SearchBot {
    depth: u32,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    SearchBot { depth: args.depth }.run(args.protocol)
}

impl Bot for SearchBot {
    fn name(&self) -> &str {
        "search_bot"
    }

    fn play_turn(&mut self, board: &mut Board, color: Color) -> Result<Move, NoLegalMove> {
        debug!(depth = self.depth, "Searching");
        Engine::new(color)
            .with_depth(self.depth)
            .play_one_turn(board)
    }
}
